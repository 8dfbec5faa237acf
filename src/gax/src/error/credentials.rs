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

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

type ArcError = Arc<dyn Error + Send + Sync>;

/// Represents an error creating or using [Credentials].
///
/// The client libraries may experience problems creating credentials and/or
/// using them. An example of problems creating credentials may be a missing
/// environment variable, or an empty username for basic authentication. An
/// example of problems using credentials may be a temporary failure to
/// exchange an API key for an [IAM access token]. Note that the latter kind
/// of errors may happen even after the credentials are successfully created.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code, where the application is
/// mocking a client library behavior.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(
///     true, "simulated transient error while trying to create credentials");
/// assert!(err.is_transient());
/// assert!(format!("{err}").contains("simulated transient error"));
/// ```
///
/// [IAM access token]: https://cloud.ibm.com/docs/account?topic=account-iamtoken_from_apikey
/// [Credentials]: https://docs.rs/ibm-cloud-auth/latest/ibm_cloud_auth/credentials/struct.Credentials.html
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_transient: bool,
    message: Option<String>,
    source: Option<ArcError>,
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping `source`.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::error::CredentialsError;
    /// let source = std::io::Error::other("connection reset");
    /// let err = CredentialsError::from_source(true, source);
    /// assert!(err.is_transient());
    /// ```
    pub fn from_source<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        Self {
            is_transient,
            message: None,
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::error::CredentialsError;
    /// let err = CredentialsError::from_msg(false, "the API key is empty");
    /// assert!(!err.is_transient());
    /// ```
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Creates a new `CredentialsError` with both a message and a source.
    pub fn new<M, S>(is_transient: bool, message: M, source: S) -> Self
    where
        M: Into<String>,
        S: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: Some(message.into()),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns `true` if the error is transient and may succeed in future attempts.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl std::error::Error for CredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        match (&self.message, &self.source) {
            (Some(m), Some(s)) => write!(f, "{m}, {msg}, source: {s}"),
            (Some(m), None) => write!(f, "{m}, {msg}"),
            (None, Some(s)) => write!(f, "cannot create the authentication headers, {msg}, source: {s}"),
            (None, None) => write!(f, "cannot create the authentication headers, {msg}"),
        }
    }
}
