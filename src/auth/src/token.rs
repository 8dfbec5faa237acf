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

//! Authorization tokens and the providers that produce them.
//!
//! A token is rendered as the `Authorization` header value
//! `<token_type> <token>`. Basic and user-managed bearer tokens never expire.
//! IAM access tokens are considered stale once 80% of their lifetime elapses,
//! so they are replaced before the service starts rejecting them.

use crate::Result;
use crate::constants::REFRESH_FRACTION;
use crate::credentials::CacheableResource;
use crate::errors;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::{Extensions, HeaderValue};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Clone, PartialEq)]
pub(crate) struct Token {
    pub token: String,
    /// `"Basic"` or `"Bearer"`, as returned by the token source.
    pub token_type: String,
    /// `None` for tokens that are never refreshed.
    pub expires_at: Option<Instant>,
}

impl Token {
    pub(crate) fn basic(username: &str, password: &str) -> Self {
        Self {
            token: STANDARD.encode(format!("{username}:{password}")),
            token_type: "Basic".to_string(),
            expires_at: None,
        }
    }

    pub(crate) fn bearer<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
            token_type: "Bearer".to_string(),
            expires_at: None,
        }
    }

    /// An IAM access token valid for `expires_in` seconds from now.
    pub(crate) fn iam(access_token: String, token_type: String, expires_in: u64) -> Self {
        let lifetime = Duration::from_secs(expires_in).mul_f64(REFRESH_FRACTION);
        Self {
            token: access_token,
            token_type,
            expires_at: Some(Instant::now() + lifetime),
        }
    }

    pub(crate) fn needs_refresh(&self) -> bool {
        self.expires_at.is_some_and(|e| e <= Instant::now())
    }

    /// The `Authorization` header value, marked as sensitive.
    pub(crate) fn authorization(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("{} {}", self.token_type, self.token))
            .map_err(errors::non_retryable)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Produces a fresh token on every call.
#[async_trait::async_trait]
pub(crate) trait TokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self) -> Result<Token>;
}

/// Produces tokens from a cache, `NotModified` if the caller already has the
/// current one.
#[async_trait::async_trait]
pub(crate) trait CachedTokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self, extensions: Extensions) -> Result<CacheableResource<Token>>;
}
