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

//! IBM Cloud Client Libraries for Rust - IAM Identity Services API
//!
//! This crate contains traits, types, and functions to interact with the IAM
//! Identity Services API. Most applications will use the structs defined in
//! the [client] module. More specifically:
//!
//! * [IamIdentity](client/struct.IamIdentity.html)
//!
//! # Example
//! ```no_run
//! # async fn sample() -> ibm_cloud_iam_identity_v1::Result<()> {
//! use ibm_cloud_iam_identity_v1::client::IamIdentity;
//! use ibm_cloud_iam_identity_v1::model::ListApiKeysScope;
//! # let credentials = auth::credentials::no_auth::Builder::default().build();
//! let client = IamIdentity::builder()
//!     .with_credentials(credentials)
//!     .build()
//!     .await
//!     .expect("a valid client configuration");
//! let response = client
//!     .list_api_keys()
//!     .set_account_id("my-account-id")
//!     .set_scope(ListApiKeysScope::Account)
//!     .send()
//!     .await?;
//! for key in response.body().and_then(|l| l.apikeys.as_ref()).into_iter().flatten() {
//!     println!("{:?}", key.name);
//! }
//! # Ok(()) }
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

/// Request builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

/// The default service URL.
pub const DEFAULT_SERVICE_URL: &str = "https://iam.cloud.ibm.com";

/// The default service name, used to find the external configuration.
pub const DEFAULT_SERVICE_NAME: &str = "iam_identity";

pub(crate) mod info {
    pub(crate) static INSTRUMENTATION_CLIENT_INFO: gaxi::InstrumentationClientInfo =
        gaxi::InstrumentationClientInfo {
            service_name: super::DEFAULT_SERVICE_NAME,
            service_version: "V1",
        };
}
