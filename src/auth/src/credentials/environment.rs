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

//! Load credentials from environment variables.
//!
//! Services are configured with variables named `<SERVICE_NAME>_<PROPERTY>`.
//! The service name is upper-cased, and any `-` is replaced by `_`. For
//! example, the IAM Identity service reads:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `IAM_IDENTITY_URL` | the service URL |
//! | `IAM_IDENTITY_AUTH_TYPE` | `noauth`, `basic`, `bearertoken`, or `iam` (the default) |
//! | `IAM_IDENTITY_USERNAME`, `IAM_IDENTITY_PASSWORD` | basic authentication |
//! | `IAM_IDENTITY_BEARER_TOKEN` | bearer token authentication |
//! | `IAM_IDENTITY_APIKEY` | IAM authentication |
//! | `IAM_IDENTITY_AUTH_URL` | the IAM token service |
//! | `IAM_IDENTITY_CLIENT_ID`, `IAM_IDENTITY_CLIENT_SECRET`, `IAM_IDENTITY_SCOPE` | optional IAM settings |

use crate::build_errors::Error as BuilderError;
use crate::constants::{AUTH_TYPE_BASIC, AUTH_TYPE_BEARER_TOKEN, AUTH_TYPE_IAM, AUTH_TYPE_NOAUTH};
use crate::credentials::{BuildResult, Credentials, basic, bearer_token, iam, no_auth};
use std::collections::HashMap;

/// Returns the prefix of the environment variables for `service_name`.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::environment::variable_prefix;
/// assert_eq!(variable_prefix("iam-identity"), "IAM_IDENTITY_");
/// ```
pub fn variable_prefix(service_name: &str) -> String {
    format!("{}_", service_name.to_uppercase().replace('-', "_"))
}

/// Returns all the properties configured for `service_name`.
///
/// The keys are the property names, with the service prefix removed, e.g.
/// `URL` or `AUTH_TYPE`. Variables whose name or value is not valid UTF-8
/// are ignored.
pub fn service_properties(service_name: &str) -> HashMap<String, String> {
    let prefix = variable_prefix(service_name);
    std::env::vars_os()
        .filter_map(|(k, v)| {
            let property = k.to_str()?.strip_prefix(&prefix)?.to_string();
            Some((property, v.into_string().ok()?))
        })
        .collect()
}

/// Creates the credentials configured in the environment for `service_name`.
///
/// # Example
/// ```no_run
/// # use ibm_cloud_auth::credentials::from_environment;
/// // Reads IAM_IDENTITY_AUTH_TYPE, IAM_IDENTITY_APIKEY, etc.
/// let credentials = from_environment("iam_identity")?;
/// # Ok::<(), ibm_cloud_auth::build_errors::Error>(())
/// ```
pub fn from_environment(service_name: &str) -> BuildResult<Credentials> {
    from_properties(&service_properties(service_name))
}

fn from_properties(properties: &HashMap<String, String>) -> BuildResult<Credentials> {
    let get = |name: &'static str| {
        properties
            .get(name)
            .cloned()
            .ok_or_else(|| BuilderError::missing_field(name))
    };
    let auth_type = properties
        .get("AUTH_TYPE")
        .map(|t| t.to_lowercase())
        .unwrap_or_else(|| AUTH_TYPE_IAM.to_string());
    tracing::debug!(auth_type = %auth_type, "loading credentials from the environment");

    match auth_type.as_str() {
        AUTH_TYPE_NOAUTH => Ok(no_auth::Builder::default().build()),
        AUTH_TYPE_BASIC => basic::Builder::new(get("USERNAME")?, get("PASSWORD")?).build(),
        AUTH_TYPE_BEARER_TOKEN => bearer_token::Builder::new(get("BEARER_TOKEN")?).build(),
        AUTH_TYPE_IAM => {
            let mut builder = iam::Builder::new(get("APIKEY")?);
            if let Some(url) = properties.get("AUTH_URL") {
                builder = builder.with_url(url);
            }
            if let (Some(id), Some(secret)) =
                (properties.get("CLIENT_ID"), properties.get("CLIENT_SECRET"))
            {
                builder = builder.with_client_id_and_secret(id, secret);
            }
            if let Some(scope) = properties.get("SCOPE") {
                builder = builder.with_scope(scope);
            }
            builder.build()
        }
        unknown => Err(BuilderError::unknown_type(format!(
            "unsupported authentication type `{unknown}`"
        ))),
    }
}
