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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

/// Implements a client for the IAM Identity Services API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use ibm_cloud_iam_identity_v1::client::IamIdentity;
/// let client = IamIdentity::builder().build().await?;
/// let response = client
///     .get_api_key()
///     .set_id("ApiKey-0123")
///     .set_include_history(true)
///     .send()
///     .await?;
/// println!("{:?}", response.body());
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The IAM Identity Service API allows for the management of account
/// identities (service IDs) and their credentials (API keys).
///
/// # Configuration
///
/// To configure `IamIdentity` use the `with_*` methods in the type returned
/// by [builder()][IamIdentity::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global service URL
///   (`https://iam.cloud.ibm.com`). Applications using private endpoints
///   need to override this default.
/// * [with_credentials()]: by default this client reads the credentials from
///   the environment, using the `IAM_IDENTITY_` prefix.
///
/// [with_endpoint()]: super::builder::iam_identity::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::iam_identity::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `IamIdentity` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `IamIdentity` in an
/// [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it. Cloning the
/// client copies its configuration, the clone may be changed independently
/// of the original. The credentials are shared.
#[derive(Clone, Debug)]
pub struct IamIdentity {
    inner: gaxi::http::ReqwestClient,
}

impl IamIdentity {
    /// Returns a builder for [IamIdentity].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_iam_identity_v1::client::IamIdentity;
    /// # let credentials = auth::credentials::no_auth::Builder::default().build();
    /// let client = IamIdentity::builder()
    ///     .with_credentials(credentials)
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::iam_identity::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::iam_identity::client::Factory)
    }

    pub(crate) async fn new(
        mut config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        if config.cred.is_none() && config.external_config.is_none() {
            config.external_config = Some(crate::DEFAULT_SERVICE_NAME.to_string());
        }
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_SERVICE_URL)
            .await?
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }

    /// Changes the service URL used by future requests.
    ///
    /// An empty URL is accepted, but any request made before a new URL is
    /// set fails.
    pub fn set_service_url<T: AsRef<str>>(&mut self, url: T) -> gax::client_builder::Result<()> {
        self.inner.set_service_url(url.as_ref())
    }

    /// The service URL used by future requests.
    pub fn service_url(&self) -> &str {
        self.inner.service_url()
    }

    /// Retries transient failures.
    ///
    /// A `max_retries` of zero selects the default of 4 retries, a zero
    /// `max_interval` selects the default of 30 seconds.
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.inner.enable_retries(max_retries, max_interval);
    }

    /// Disables the automatic retries.
    pub fn disable_retries(&mut self) {
        self.inner.disable_retries();
    }

    /// Sets the headers included in every request.
    pub fn set_default_headers(&mut self, headers: http::HeaderMap) {
        self.inner.set_default_headers(headers);
    }

    pub fn default_headers(&self) -> &http::HeaderMap {
        self.inner.default_headers()
    }

    /// Enables or disables gzip compression of the request bodies.
    pub fn set_enable_gzip_compression(&mut self, v: bool) {
        self.inner.set_enable_gzip_compression(v);
    }

    pub fn enable_gzip_compression(&self) -> bool {
        self.inner.enable_gzip_compression()
    }

    /// Get API keys for a given service or user IAM ID and account ID.
    ///
    /// Returns the list of API key details for a given service or user IAM
    /// ID and account ID. Users can manage user API keys for themself, or
    /// service ID API keys for service IDs that are bound to an entity they
    /// have access to.
    pub fn list_api_keys(&self) -> super::builder::iam_identity::ListApiKeys {
        super::builder::iam_identity::ListApiKeys::new(self.inner.clone())
    }

    /// Create an API key.
    ///
    /// Creates an API key for a UserID or service ID. Users can manage user
    /// API keys for themself, or service ID API keys for service IDs that are
    /// bound to an entity they have access to.
    pub fn create_api_key(&self) -> super::builder::iam_identity::CreateApiKey {
        super::builder::iam_identity::CreateApiKey::new(self.inner.clone())
    }

    /// Get details of an API key by its value.
    ///
    /// The API key value is sent in the `IAM-ApiKey` header.
    pub fn get_api_keys_details(&self) -> super::builder::iam_identity::GetApiKeysDetails {
        super::builder::iam_identity::GetApiKeysDetails::new(self.inner.clone())
    }

    /// Get details of an API key.
    pub fn get_api_key(&self) -> super::builder::iam_identity::GetApiKey {
        super::builder::iam_identity::GetApiKey::new(self.inner.clone())
    }

    /// Updates an API key.
    ///
    /// The `If-Match` header must contain the entity tag of the API key, or
    /// `*` to update any version.
    pub fn update_api_key(&self) -> super::builder::iam_identity::UpdateApiKey {
        super::builder::iam_identity::UpdateApiKey::new(self.inner.clone())
    }

    /// Deletes an API key.
    ///
    /// Existing tokens will remain valid until expired. Refresh tokens will
    /// not work any more for this API key.
    pub fn delete_api_key(&self) -> super::builder::iam_identity::DeleteApiKey {
        super::builder::iam_identity::DeleteApiKey::new(self.inner.clone())
    }

    /// Lock the API key.
    pub fn lock_api_key(&self) -> super::builder::iam_identity::LockApiKey {
        super::builder::iam_identity::LockApiKey::new(self.inner.clone())
    }

    /// Unlock the API key.
    pub fn unlock_api_key(&self) -> super::builder::iam_identity::UnlockApiKey {
        super::builder::iam_identity::UnlockApiKey::new(self.inner.clone())
    }

    /// List service IDs.
    ///
    /// Returns a list of service IDs. Users can manage user API keys for
    /// themself, or service ID API keys for service IDs that are bound to an
    /// entity they have access to.
    pub fn list_service_ids(&self) -> super::builder::iam_identity::ListServiceIds {
        super::builder::iam_identity::ListServiceIds::new(self.inner.clone())
    }

    /// Create a service ID.
    pub fn create_service_id(&self) -> super::builder::iam_identity::CreateServiceId {
        super::builder::iam_identity::CreateServiceId::new(self.inner.clone())
    }

    /// Get details of a service ID.
    pub fn get_service_id(&self) -> super::builder::iam_identity::GetServiceId {
        super::builder::iam_identity::GetServiceId::new(self.inner.clone())
    }

    /// Update service ID.
    pub fn update_service_id(&self) -> super::builder::iam_identity::UpdateServiceId {
        super::builder::iam_identity::UpdateServiceId::new(self.inner.clone())
    }

    /// Deletes a service ID and associated API keys.
    pub fn delete_service_id(&self) -> super::builder::iam_identity::DeleteServiceId {
        super::builder::iam_identity::DeleteServiceId::new(self.inner.clone())
    }

    /// Lock the service ID.
    pub fn lock_service_id(&self) -> super::builder::iam_identity::LockServiceId {
        super::builder::iam_identity::LockServiceId::new(self.inner.clone())
    }

    /// Unlock the service ID.
    pub fn unlock_service_id(&self) -> super::builder::iam_identity::UnlockServiceId {
        super::builder::iam_identity::UnlockServiceId::new(self.inner.clone())
    }
}
