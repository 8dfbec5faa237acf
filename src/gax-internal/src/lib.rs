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

//! Implementation details for IBM Cloud clients.
//!
//! All the types, traits, and functions defined in this crate are **not**
//! intended for general use. This crate will remain unstable for the
//! foreseeable future, even if used in the implementation for stable client
//! libraries. We control both and will change both if needed.
//!
//! The types, traits, and functions defined in this crate are mostly
//! undocumented. This is intentional, as they are not intended for general
//! use and will be changed without notice.

#[cfg(feature = "_internal-common")]
pub mod api_header;

#[cfg(feature = "_internal-common")]
pub mod path_parameter;

#[cfg(feature = "_internal-http-client")]
pub mod query_parameter;

#[cfg(feature = "_internal-http-client")]
pub mod http;

#[cfg(feature = "_internal-common")]
pub mod options;

#[cfg(feature = "_internal-common")]
pub use auth::credentials::Credentials;

#[cfg(feature = "_internal-common")]
pub use options::ClientConfig;

#[cfg(feature = "_internal-common")]
pub(crate) const TRACING_VAR: &str = "IBM_CLOUD_RUST_TRACING";

/// Information about the client library used for instrumentation.
#[derive(Copy, Clone, Debug)]
pub struct InstrumentationClientInfo {
    /// The short service name, e.g., "iam_identity".
    pub service_name: &'static str,
    /// The version of the service API, e.g., "V1".
    pub service_version: &'static str,
}

// Returns true if the environment or client configuration enables tracing.
#[cfg(feature = "_internal-common")]
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(TRACING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}
