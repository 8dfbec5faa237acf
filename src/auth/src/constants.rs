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

/// The default IAM token service.
pub(crate) const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

/// The path of the token exchange endpoint, relative to the IAM URL.
pub(crate) const REQUEST_TOKEN_PATH: &str = "/identity/token";

/// The OAuth grant type used to exchange API keys for access tokens.
pub(crate) const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

pub(crate) const RESPONSE_TYPE: &str = "cloud_iam";

/// Access tokens are refreshed once this fraction of their lifetime elapses.
pub(crate) const REFRESH_FRACTION: f64 = 0.8;

/// The authentication types accepted in `<SERVICE_NAME>_AUTH_TYPE`.
pub(crate) const AUTH_TYPE_NOAUTH: &str = "noauth";
pub(crate) const AUTH_TYPE_BASIC: &str = "basic";
pub(crate) const AUTH_TYPE_BEARER_TOKEN: &str = "bearertoken";
pub(crate) const AUTH_TYPE_IAM: &str = "iam";
