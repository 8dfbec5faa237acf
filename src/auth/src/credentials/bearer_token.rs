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

//! Credentials using a user-managed bearer token.
//!
//! The application obtains the access token on its own, and is responsible
//! for creating new credentials before the token expires.

use crate::Result;
use crate::build_errors::Error as BuilderError;
use crate::credentials::{BuildResult, Credentials, TokenCredentials};
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;

struct BearerTokenProvider {
    bearer_token: String,
}

impl std::fmt::Debug for BearerTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenCredentials")
            .field("bearer_token", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for BearerTokenProvider {
    async fn token(&self) -> Result<Token> {
        Ok(Token::bearer(self.bearer_token.as_str()))
    }
}

/// A builder for bearer token credentials.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::bearer_token::Builder;
/// let credentials = Builder::new("my-access-token").build()?;
/// # Ok::<(), ibm_cloud_auth::build_errors::Error>(())
/// ```
#[derive(Debug)]
pub struct Builder {
    bearer_token: String,
}

impl Builder {
    /// Creates a new builder with the given token.
    pub fn new<T: Into<String>>(bearer_token: T) -> Self {
        Self {
            bearer_token: bearer_token.into(),
        }
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// Fails if the token is empty.
    pub fn build(self) -> BuildResult<Credentials> {
        if self.bearer_token.is_empty() {
            return Err(BuilderError::missing_field("bearer_token"));
        }
        let token_provider = TokenCache::new(BearerTokenProvider {
            bearer_token: self.bearer_token,
        });
        Ok(Credentials::from(TokenCredentials::new(token_provider)))
    }
}
