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

//! IBM Cloud Client Libraries for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate requests to
//! IBM Cloud services. The SDK clients consume a [credentials::Credentials]
//! value and use it to add the authentication headers to each request.
//!
//! Four authentication strategies are supported:
//!
//! * [credentials::no_auth]: send requests without authentication headers.
//! * [credentials::basic]: send an `Authorization: Basic ...` header built
//!   from a username and password.
//! * [credentials::bearer_token]: send a user-managed bearer token.
//! * [credentials::iam]: exchange an [IBM Cloud API key] for an IAM access
//!   token, cache the token, and refresh it before it expires.
//!
//! [IBM Cloud API key]: https://cloud.ibm.com/docs/account?topic=account-manapikey

pub mod build_errors;
pub mod credentials;
pub mod errors;

pub(crate) mod constants;
pub(crate) mod headers_util;
pub(crate) mod token;
pub(crate) mod token_cache;

/// A `Result` alias where the `Err` case is
/// `ibm_cloud_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;
