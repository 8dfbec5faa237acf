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

//! [Basic] authentication credentials.
//!
//! Each request carries an `Authorization: Basic <base64(username:password)>`
//! header. This is how IBM Cloud Pak services accept a username and password.
//!
//! [Basic]: https://datatracker.ietf.org/doc/html/rfc7617

use crate::Result;
use crate::build_errors::validate;
use crate::credentials::{BuildResult, Credentials, TokenCredentials};
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;

struct BasicTokenProvider {
    username: String,
    password: String,
}

impl std::fmt::Debug for BasicTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for BasicTokenProvider {
    async fn token(&self) -> Result<Token> {
        Ok(Token::basic(&self.username, &self.password))
    }
}

/// A builder for basic authentication credentials.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::basic::Builder;
/// let credentials = Builder::new("my-username", "my-password").build()?;
/// # Ok::<(), ibm_cloud_auth::build_errors::Error>(())
/// ```
#[derive(Debug)]
pub struct Builder {
    username: String,
    password: String,
}

impl Builder {
    /// Creates a new builder with the given username and password.
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn build_token_provider(self) -> BuildResult<BasicTokenProvider> {
        validate("username", &self.username)?;
        validate("password", &self.password)?;
        Ok(BasicTokenProvider {
            username: self.username,
            password: self.password,
        })
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// Fails if the username or password are empty, or if they start or end
    /// with curly braces or quotes.
    pub fn build(self) -> BuildResult<Credentials> {
        let token_provider = TokenCache::new(self.build_token_provider()?);
        Ok(Credentials::from(TokenCredentials::new(token_provider)))
    }
}
