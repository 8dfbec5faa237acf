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

//! Types and functions to work with IBM Cloud authentication credentials.
//!
//! Client libraries call [Credentials::headers] before each request, and add
//! the returned headers to the request. The headers replace any header of the
//! same name set by the application.

use crate::build_errors::Error as BuilderError;
use crate::headers_util::build_cacheable_headers;
use crate::token::CachedTokenProvider;
use http::{Extensions, HeaderMap};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod basic;
pub mod bearer_token;
pub mod environment;
pub mod iam;
pub mod no_auth;

pub use crate::errors::CredentialsError;
pub use environment::from_environment;

/// A `Result` alias where the `Err` case is [CredentialsError].
pub type Result<T> = std::result::Result<T, CredentialsError>;

pub(crate) type BuildResult<T> = std::result::Result<T, BuilderError>;

/// An opaque tag identifying a version of a cached resource.
///
/// Callers may store the tag returned with a [CacheableResource::New] value,
/// and pass it back in the `Extensions` of the next call. If the resource has
/// not changed the credentials return [CacheableResource::NotModified].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityTag(u64);

static ENTITY_TAG_GENERATOR: AtomicU64 = AtomicU64::new(0);

impl EntityTag {
    /// Returns a tag different from all the tags returned so far.
    pub fn new() -> Self {
        Self(ENTITY_TAG_GENERATOR.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for EntityTag {
    fn default() -> Self {
        Self::new()
    }
}

/// A resource, such as the authentication headers, which may be cached by the
/// caller.
#[derive(Clone, Debug, PartialEq)]
pub enum CacheableResource<T> {
    /// The resource matches the entity tag provided by the caller.
    NotModified,
    /// A new version of the resource.
    New { entity_tag: EntityTag, data: T },
}

/// An implementation of [CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
///
/// In general, [Credentials][credentials-link] are "digital object that
/// provide proof of identity", the archetype may be a username and password
/// combination, but an IBM Cloud API key is also a credential.
///
/// Applications rarely need to call [Credentials::headers] directly, the
/// client libraries call it before each request.
///
/// [credentials-link]: https://cloud.ibm.com/docs/account?topic=account-iamoverview
#[derive(Clone, Debug)]
pub struct Credentials {
    // Use an `Arc` to hold the inner implementation.
    //
    // Credentials may be shared across threads (`Send + Sync`), so an `Rc`
    // will not do.
    //
    // They also need to derive `Clone`, as the client libraries share the
    // credentials between the clones of a client.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers used to authenticate a request.
    pub async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        self.inner.headers(extensions).await
    }
}

/// A trait for credential types that can provide the authentication headers.
///
/// Applications implement this trait to supply their own authentication
/// strategy, or to mock the credentials in tests.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Returns the headers used to authenticate a request.
    ///
    /// The `extensions` may contain the [EntityTag] of a previous call, in
    /// which case the implementation may return
    /// [CacheableResource::NotModified].
    fn headers(
        &self,
        extensions: Extensions,
    ) -> impl Future<Output = Result<CacheableResource<HeaderMap>>> + Send;
}

/// A dyn-compatible version of [CredentialsProvider].
pub(crate) mod dynamic {
    use super::{CacheableResource, Result};
    use http::{Extensions, HeaderMap};

    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>>;
    }

    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
            T::headers(self, extensions).await
        }
    }
}

/// Credentials that send `Authorization: <token_type> <token>`.
#[derive(Debug)]
pub(crate) struct TokenCredentials<T>
where
    T: CachedTokenProvider,
{
    token_provider: T,
}

impl<T> TokenCredentials<T>
where
    T: CachedTokenProvider,
{
    pub(crate) fn new(token_provider: T) -> Self {
        Self { token_provider }
    }
}

impl<T> CredentialsProvider for TokenCredentials<T>
where
    T: CachedTokenProvider,
{
    async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        let cached_token = self.token_provider.token(extensions).await?;
        build_cacheable_headers(&cached_token)
    }
}
