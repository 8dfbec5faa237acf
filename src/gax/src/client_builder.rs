// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the service URL or the authentication
//! credentials. The IBM Cloud client libraries for Rust use a generic builder
//! type to provide such functionality. The types in this module implement the
//! client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use ibm_cloud_gax::client_builder::examples;
//! # use ibm_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different service URL
//!
//! ```
//! # use ibm_cloud_gax::client_builder::examples;
//! # use ibm_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.iam.cloud.ibm.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: load the configuration from the environment
//!
//! ```
//! # use ibm_cloud_gax::client_builder::examples;
//! # use ibm_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! // Reads IAM_IDENTITY_URL, IAM_IDENTITY_AUTH_TYPE, IAM_IDENTITY_APIKEY, etc.
//! let client = Client::builder()
//!     .with_external_config("iam_identity")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use ibm_cloud_gax::client_builder::examples;
/// # use ibm_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_credentials() => {
///         println!("error obtaining the credentials {e:?}");
///         return Err(e);
///     },
///     Err(e) if e.is_invalid_endpoint() => {
///         println!("the service URL is not valid {e:?}");
///         return Err(e);
///     },
///     Err(e) => {
///         println!("error during client initialization {e:?}");
///         return Err(e);
///     }
/// };
/// # Result::<()>::Ok(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not create the credentials.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the service URL is not a valid URL.
    pub fn is_invalid_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::InvalidEndpoint { .. })
    }

    /// The invalid service URL, if this error is about an invalid URL.
    pub fn endpoint(&self) -> Option<&str> {
        match &self.0 {
            ErrorKind::InvalidEndpoint { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn invalid_endpoint<E, T>(endpoint: E, source: T) -> Self
    where
        E: Into<String>,
        T: Into<BoxError>,
    {
        Self(ErrorKind::InvalidEndpoint {
            endpoint: endpoint.into(),
            source: source.into(),
        })
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create the credentials: {0}")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client: {0}")]
    Transport(#[source] BoxError),
    #[error("the service URL <{endpoint}> is not valid: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: BoxError,
    },
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the IBM Cloud client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// # use ibm_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// # Result::<()>::Ok(()) });
/// ```
///
/// To create a client with the default configuration just invoke the
/// `.build()` method:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// # use ibm_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder().build().await?;
/// # Result::<()>::Ok(()) });
/// ```
///
/// As usual, the builder offers several methods to configure the client, and a
/// `.build()` method to construct the client:
/// ```
/// # use ibm_cloud_gax::client_builder::examples;
/// # use ibm_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("http://private.iam.cloud.ibm.com")
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the service URL.
    ///
    /// The URL must be an absolute `http` or `https` URL, and must not
    /// contain unexpanded templates such as `{region}`.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_endpoint("http://private.iam.cloud.ibm.com")
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_tracing()
    ///     .build().await?;
    /// // Observe traces
    /// # Result::<()>::Ok(()) });
    /// ```
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Most IBM Cloud services require authentication. When no credentials
    /// are configured, the client loads them from the external configuration
    /// (see [with_external_config][Self::with_external_config]).
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Loads the service URL and credentials from the environment.
    ///
    /// The client reads `<SERVICE_NAME>_URL` and `<SERVICE_NAME>_AUTH_TYPE`,
    /// plus the variables required by the authentication type. Explicit
    /// values set with [with_endpoint][Self::with_endpoint] and
    /// [with_credentials][Self::with_credentials] take precedence.
    pub fn with_external_config<V: Into<String>>(mut self, service_name: V) -> Self {
        self.config.external_config = Some(service_name.into());
        self
    }

    /// Configure the retry policy.
    ///
    /// Retries are disabled by default. Use this method, or
    /// `enable_retries()` on the client, to enable them.
    ///
    /// ```
    /// # use ibm_cloud_gax::client_builder::examples;
    /// # use ibm_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use ibm_cloud_gax::retry_policy::{TransientErrors, RetryPolicyExt};
    /// let client = Client::builder()
    ///     .with_retry_policy(TransientErrors.with_attempt_limit(3))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configure the retry backoff policy.
    ///
    /// The backoff policy determines how long to wait in between retry
    /// attempts.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Enable or disable the compression of request bodies.
    ///
    /// Compression is disabled by default. When enabled, the client compresses
    /// request bodies using gzip and sets the `Content-Encoding` header. This
    /// setting takes precedence over any value loaded with
    /// [with_external_config][Self::with_external_config].
    pub fn with_gzip_compression(mut self, v: bool) -> Self {
        self.config.gzip = Some(v);
        self
    }

    /// Sets headers included in every request made by the client.
    pub fn with_default_headers<V: Into<http::HeaderMap>>(mut self, v: V) -> Self {
        self.config.default_headers = v.into();
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A client represents a connection to an IBM Cloud service. Each service
    /// has one or more client types. The default configuration for each client
    /// should work for most applications. But some applications may need to
    /// override the default service URL, the default authentication
    /// credentials, the retry policies, and/or other behaviors of the client.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub gzip: Option<bool>,
        pub default_headers: http::HeaderMap,
        pub external_config: Option<String>,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                gzip: None,
                default_headers: http::HeaderMap::new(),
                external_config: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: super::internal::ClientConfig<Credentials>) -> Result<Self> {
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Credentials>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub apikey: String,
    }

    pub mod credentials {
        pub mod iam {
            #[derive(Clone, Default)]
            pub struct Builder(super::super::Credentials);
            impl Builder {
                pub fn new<V: Into<String>>(apikey: V) -> Self {
                    Self(super::super::Credentials {
                        apikey: apikey.into(),
                    })
                }
                pub fn build(self) -> super::super::Credentials {
                    self.0
                }
            }
        }
    }

}
