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

//! Defines helpers functions to run ReqwestClient integration tests.
//!
//! The server offers a few routes:
//! - `/echo` returns the method, headers, query, and body of the request. The
//!   `delay_ms` query parameter delays the response.
//! - `/error` always fails with an IBM Cloud error envelope.
//! - `/empty` succeeds without a body.
//! - `/invalid` succeeds with a body that is not JSON.

use auth::credentials::Credentials;
use axum::{
    extract::Query,
    http::{HeaderMap, Method, StatusCode, header::CONTENT_ENCODING},
};
use serde_json::json;
use std::io::Read;
use tokio::task::JoinHandle;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub const ERROR_TRACE: &str = "echo-server-trace";
pub const ERROR_CODE: &str = "invalid_request";
pub const ERROR_MESSAGE: &str = "this path always returns an error";

pub async fn start() -> Result<(String, JoinHandle<()>)> {
    let app = axum::Router::new()
        .route("/echo", axum::routing::any(echo))
        .route("/error", axum::routing::any(error))
        .route("/empty", axum::routing::any(empty))
        .route("/invalid", axum::routing::any(invalid));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async {
        axum::serve(listener, app).await.unwrap();
    });

    Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
}

pub fn builder(
    endpoint: impl Into<String>,
) -> gax::client_builder::ClientBuilder<Factory, Credentials> {
    gax::client_builder::internal::new_builder(Factory(endpoint.into()))
}

pub struct Factory(String);
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = gaxi::http::ReqwestClient;
    type Credentials = Credentials;
    async fn build(
        self,
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        Self::Client::new(config, &self.0).await
    }
}

/// Credentials that add `Authorization: Bearer test-only-token`.
pub fn test_credentials() -> Result<Credentials> {
    let credentials = auth::credentials::bearer_token::Builder::new("test-only-token").build()?;
    Ok(credentials)
}

pub fn make_error_value() -> serde_json::Value {
    json!({
        "trace": ERROR_TRACE,
        "errors": [{
            "code": ERROR_CODE,
            "message": ERROR_MESSAGE,
        }],
        "status_code": StatusCode::BAD_REQUEST.as_u16(),
    })
}

async fn echo(
    method: Method,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> (StatusCode, String) {
    let response = echo_impl(method, query, headers, body).await;
    match response {
        Err(e) => internal_error(e),
        Ok(s) => (StatusCode::OK, s),
    }
}

async fn echo_impl(
    method: Method,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> Result<String> {
    if let Some(delay) = query
        .iter()
        .find(|(k, _)| k == "delay_ms")
        .map(|(_, v)| v.parse::<u64>())
        .transpose()?
        .map(tokio::time::Duration::from_millis)
    {
        tokio::time::sleep(delay).await;
    }
    let compressed = headers
        .get(CONTENT_ENCODING)
        .is_some_and(|v| v.as_bytes() == b"gzip");
    let body = if compressed {
        let mut decoded = Vec::new();
        flate2::read::GzDecoder::new(body.as_ref()).read_to_end(&mut decoded)?;
        decoded
    } else {
        body.to_vec()
    };
    let body = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice::<serde_json::Value>(&body)?
    };
    let query = query
        .into_iter()
        .map(|(k, v)| json!([k, v]))
        .collect::<Vec<_>>();
    let headers = headers_to_json(headers)?;
    let object = json!({
        "method": method.as_str(),
        "headers": headers,
        "query": query,
        "body": body,
        "compressed": compressed,
    });
    let body = serde_json::to_string(&object)?;
    Ok(body)
}

async fn error() -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, make_error_value().to_string())
}

async fn empty() -> StatusCode {
    StatusCode::OK
}

async fn invalid() -> (StatusCode, &'static str) {
    (StatusCode::OK, "this is not JSON")
}

fn headers_to_json(headers: HeaderMap) -> Result<serde_json::Value> {
    let to_dyn = |e| -> Box<dyn std::error::Error + 'static> { Box::new(e) };
    let headers = headers
        .into_iter()
        .map(|(k, v)| {
            (
                k.map(|h| h.to_string()).unwrap_or("__status__".to_string()),
                v.to_str().map(|s| serde_json::Value::String(s.to_string())),
            )
        })
        .map(|(k, v)| v.map(|s| (k, s)))
        .map(|r| r.map_err(to_dyn))
        .collect::<Result<Vec<_>>>()?;

    Ok(serde_json::Value::Object(headers.into_iter().collect()))
}

fn internal_error(e: Box<dyn std::error::Error>) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}"))
}
