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

//! [IAM API key] credentials.
//!
//! These credentials exchange an IBM Cloud API key for an IAM access token,
//! and send the access token as an `Authorization: Bearer ...` header. The
//! access token is cached, and refreshed once 80% of its lifetime elapses.
//! Concurrent requests share a single refresh.
//!
//! # Example
//! ```
//! # use ibm_cloud_auth::credentials::iam::Builder;
//! let credentials = Builder::new("my-api-key")
//!     .with_url("https://iam.cloud.ibm.com")
//!     .build()?;
//! # Ok::<(), ibm_cloud_auth::build_errors::Error>(())
//! ```
//!
//! [IAM API key]: https://cloud.ibm.com/docs/account?topic=account-iamtoken_from_apikey

use crate::build_errors::{Error as BuilderError, validate};
use crate::constants::{
    APIKEY_GRANT_TYPE, DEFAULT_IAM_URL, REQUEST_TOKEN_PATH, RESPONSE_TYPE,
};
use crate::credentials::{BuildResult, Credentials, CredentialsError, Result, TokenCredentials};
use crate::errors::{self, is_retryable};
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use http::header::{ACCEPT, HeaderValue};
use reqwest::Client;

/// A builder for IAM API key credentials.
#[derive(Debug)]
pub struct Builder {
    apikey: String,
    url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
}

impl Builder {
    /// Creates a new builder with the given API key.
    pub fn new<T: Into<String>>(apikey: T) -> Self {
        Self {
            apikey: apikey.into(),
            url: None,
            client_id: None,
            client_secret: None,
            scope: None,
        }
    }

    /// Sets the URL of the IAM token service.
    ///
    /// Defaults to `https://iam.cloud.ibm.com`. The `/identity/token` path is
    /// appended to this URL.
    pub fn with_url<T: Into<String>>(mut self, url: T) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the client id and secret sent to the IAM token service.
    ///
    /// These are rarely needed. When set, the token requests carry an
    /// `Authorization: Basic ...` header.
    pub fn with_client_id_and_secret<I: Into<String>, S: Into<String>>(
        mut self,
        client_id: I,
        client_secret: S,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Requests the access token for a space separated list of scopes.
    pub fn with_scope<T: Into<String>>(mut self, scope: T) -> Self {
        self.scope = Some(scope.into());
        self
    }

    fn build_token_provider(self) -> BuildResult<IamTokenProvider> {
        validate("apikey", &self.apikey)?;
        let client_credentials = match (self.client_id, self.client_secret) {
            (None, None) => None,
            (Some(id), Some(secret)) => Some((id, secret)),
            (Some(_), None) => return Err(BuilderError::missing_field("client_secret")),
            (None, Some(_)) => return Err(BuilderError::missing_field("client_id")),
        };
        let url = self.url.unwrap_or_else(|| DEFAULT_IAM_URL.to_string());
        let url = url.trim_end_matches('/');
        let url = url.strip_suffix(REQUEST_TOKEN_PATH).unwrap_or(url);
        if url.is_empty() {
            return Err(BuilderError::missing_field("url"));
        }
        let client = Client::builder().build().map_err(BuilderError::transport)?;

        Ok(IamTokenProvider {
            apikey: self.apikey,
            endpoint: format!("{url}{REQUEST_TOKEN_PATH}"),
            client_credentials,
            scope: self.scope,
            client,
        })
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// Fails if the API key is empty, or starts or ends with curly braces or
    /// quotes. Also fails if only one of the client id and secret is set.
    pub fn build(self) -> BuildResult<Credentials> {
        let token_provider = TokenCache::new(self.build_token_provider()?);
        Ok(Credentials::from(TokenCredentials::new(token_provider)))
    }
}

struct IamTokenProvider {
    apikey: String,
    endpoint: String,
    client_credentials: Option<(String, String)>,
    scope: Option<String>,
    client: Client,
}

impl std::fmt::Debug for IamTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamCredentials")
            .field("apikey", &"[censored]")
            .field("endpoint", &self.endpoint)
            .field(
                "client_id",
                &self.client_credentials.as_ref().map(|(id, _)| id),
            )
            .field("scope", &self.scope)
            .finish()
    }
}

#[async_trait::async_trait]
impl TokenProvider for IamTokenProvider {
    async fn token(&self) -> Result<Token> {
        let mut form = vec![
            ("grant_type", APIKEY_GRANT_TYPE),
            ("apikey", self.apikey.as_str()),
            ("response_type", RESPONSE_TYPE),
        ];
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.as_str()));
        }
        let mut builder = self
            .client
            .post(self.endpoint.as_str())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form(&form);
        if let Some((id, secret)) = &self.client_credentials {
            builder = builder.basic_auth(id, Some(secret));
        }
        tracing::debug!(endpoint = %self.endpoint, "requesting IAM access token");
        let resp = builder.send().await.map_err(errors::retryable)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| CredentialsError::from_source(is_retryable(status), e))?;
            return Err(CredentialsError::from_msg(
                is_retryable(status),
                format!("failed to fetch IAM access token, status={status}, body={body}"),
            ));
        }
        let response = resp.json::<IamTokenResponse>().await.map_err(|e| {
            let retryable = !e.is_decode();
            CredentialsError::from_source(retryable, e)
        })?;
        tracing::debug!(
            expires_in = response.expires_in,
            expiration = ?response.expiration,
            has_refresh_token = response.refresh_token.is_some(),
            "received IAM access token"
        );

        Ok(Token::iam(
            response.access_token,
            response.token_type,
            response.expires_in,
        ))
    }
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    token_type: String,
    expires_in: u64,
    #[serde(default)]
    expiration: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::get_headers_from_cache;
    use http::Extensions;
    use http::header::AUTHORIZATION;
    use httptest::matchers::{all_of, contains, request, url_decoded};
    use httptest::responders::{json_encoded, status_code};
    use httptest::{Expectation, Server};
    use serde_json::json;
    use std::time::Duration;
    use test_case::test_case;
    use tokio::time::Instant;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn token_response(access_token: &str) -> serde_json::Value {
        json!({
            "access_token": access_token,
            "refresh_token": "test-refresh-token",
            "token_type": "Bearer",
            "expires_in": 3600,
            "expiration": 1_700_003_600,
        })
    }

    #[test]
    fn debug_token_provider() -> TestResult {
        let tp = Builder::new("super-secret-api-key")
            .with_client_id_and_secret("test-client-id", "super-secret-client")
            .build_token_provider()?;
        let fmt = format!("{tp:?}");
        assert!(!fmt.contains("super-secret-api-key"), "{fmt}");
        assert!(!fmt.contains("super-secret-client"), "{fmt}");
        assert!(fmt.contains("test-client-id"), "{fmt}");
        assert!(fmt.contains(DEFAULT_IAM_URL), "{fmt}");
        Ok(())
    }

    #[test_case("https://iam.test.cloud.ibm.com", "https://iam.test.cloud.ibm.com/identity/token")]
    #[test_case("https://iam.test.cloud.ibm.com/", "https://iam.test.cloud.ibm.com/identity/token")]
    #[test_case("https://iam.test.cloud.ibm.com/identity/token", "https://iam.test.cloud.ibm.com/identity/token")]
    fn endpoint(url: &str, want: &str) -> TestResult {
        let tp = Builder::new("test-api-key").with_url(url).build_token_provider()?;
        assert_eq!(tp.endpoint, want);
        Ok(())
    }

    #[test_case("")]
    #[test_case("{apikey}")]
    #[test_case("\"apikey\"")]
    fn bad_apikey(apikey: &str) {
        let err = Builder::new(apikey).build().unwrap_err();
        assert!(err.is_missing_field() || err.is_invalid_value(), "{err:?}");
    }

    #[test]
    fn partial_client_credentials() {
        let mut builder = Builder::new("test-api-key");
        builder.client_id = Some("test-client-id".to_string());
        let err = builder.build().unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert!(err.to_string().contains("client_secret"), "{err}");
    }

    #[tokio::test]
    async fn token_success() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                request::headers(contains(("accept", "application/json"))),
                request::body(url_decoded(contains(("grant_type", APIKEY_GRANT_TYPE)))),
                request::body(url_decoded(contains(("apikey", "test-api-key")))),
                request::body(url_decoded(contains(("response_type", "cloud_iam")))),
            ])
            .respond_with(json_encoded(token_response("test-access-token"))),
        );

        let tp = Builder::new("test-api-key")
            .with_url(server.url_str("/"))
            .build_token_provider()?;
        let before = Instant::now();
        let token = tp.token().await?;
        let after = Instant::now();
        assert_eq!(token.token, "test-access-token");
        assert_eq!(token.token_type, "Bearer");

        let refresh = Duration::from_secs(2880);
        let expires_at = token.expires_at.unwrap();
        assert!(expires_at >= before + refresh, "{token:?}");
        assert!(expires_at <= after + refresh, "{token:?}");
        Ok(())
    }

    #[tokio::test]
    async fn token_with_client_credentials_and_scope() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                // base64("test-client-id:test-client-secret")
                request::headers(contains((
                    "authorization",
                    "Basic dGVzdC1jbGllbnQtaWQ6dGVzdC1jbGllbnQtc2VjcmV0"
                ))),
                request::body(url_decoded(contains(("scope", "test-scope")))),
            ])
            .respond_with(json_encoded(token_response("test-access-token"))),
        );

        let tp = Builder::new("test-api-key")
            .with_url(server.url_str("/"))
            .with_client_id_and_secret("test-client-id", "test-client-secret")
            .with_scope("test-scope")
            .build_token_provider()?;
        let token = tp.token().await?;
        assert_eq!(token.token, "test-access-token");
        Ok(())
    }

    #[test_case(400, false)]
    #[test_case(401, false)]
    #[test_case(429, true)]
    #[test_case(500, true)]
    #[test_case(503, true)]
    #[tokio::test]
    async fn token_http_error(code: u16, transient: bool) -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(status_code(code).body("test-only-error")),
        );

        let tp = Builder::new("test-api-key")
            .with_url(server.url_str("/"))
            .build_token_provider()?;
        let err = tp.token().await.unwrap_err();
        assert_eq!(err.is_transient(), transient, "{err:?}");
        assert!(err.to_string().contains("test-only-error"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn token_bad_json() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(json_encoded(json!({"unexpected": "field"}))),
        );

        let tp = Builder::new("test-api-key")
            .with_url(server.url_str("/"))
            .build_token_provider()?;
        let err = tp.token().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn headers_are_cached() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .times(1)
                .respond_with(json_encoded(token_response("test-access-token"))),
        );

        let credentials = Builder::new("test-api-key")
            .with_url(server.url_str("/"))
            .build()?;
        for _ in 0..3 {
            let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
            let value = headers.get(AUTHORIZATION).unwrap();
            assert_eq!(value, HeaderValue::from_static("Bearer test-access-token"));
            assert!(value.is_sensitive());
        }
        Ok(())
    }

    #[test]
    fn token_response_defaults() -> TestResult {
        let got = serde_json::from_value::<IamTokenResponse>(json!({
            "access_token": "test-access-token",
            "expires_in": 60,
        }))?;
        let want = IamTokenResponse {
            access_token: "test-access-token".to_string(),
            refresh_token: None,
            token_type: "Bearer".to_string(),
            expires_in: 60,
            expiration: None,
        };
        assert_eq!(got, want);
        Ok(())
    }
}
