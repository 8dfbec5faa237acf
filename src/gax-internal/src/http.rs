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

use crate::InstrumentationClientInfo;
use crate::api_header::{ANALYTICS_HEADER, user_agent};
use auth::credentials::CacheableResource;
use auth::credentials::Credentials;
use bytes::Bytes;
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::{ApiError, CredentialsError, Error};
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use gax::retry_policy::{LimitedAttemptCount, RetryPolicy, TransientErrors};
use http::Extensions;
use reqwest::header::{
    ACCEPT, CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
    USER_AGENT,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

const DEFAULT_MAX_RETRIES: u32 = 4;

const JSON: &str = "application/json";

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    gzip: bool,
    default_headers: HeaderMap,
    tracing: bool,
    instrumentation: Option<&'static InstrumentationClientInfo>,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::tracing_enabled(&config);
        let properties = config
            .external_config
            .as_deref()
            .map(auth::credentials::environment::service_properties)
            .unwrap_or_default();
        let cred = Self::make_credentials(&config)?;
        let endpoint = config
            .endpoint
            .or_else(|| properties.get("URL").cloned())
            .unwrap_or_else(|| default_endpoint.to_string());
        let endpoint = validate_service_url(&endpoint)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let gzip = config
            .gzip
            .unwrap_or_else(|| flag(&properties, "ENABLE_GZIP"));
        let mut client = Self {
            inner,
            cred,
            endpoint,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            gzip,
            default_headers: config.default_headers,
            tracing,
            instrumentation: None,
        };
        if client.retry_policy.is_none() && flag(&properties, "ENABLE_RETRIES") {
            let max_retries = number(&properties, "MAX_RETRIES");
            let interval = Duration::from_secs(number(&properties, "RETRY_INTERVAL"));
            client.enable_retries(max_retries, interval);
        }
        Ok(client)
    }

    pub fn with_instrumentation(mut self, instrumentation: &'static InstrumentationClientInfo) -> Self {
        self.instrumentation = Some(instrumentation);
        self
    }

    fn make_credentials(
        config: &crate::options::ClientConfig,
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        match config.external_config.as_deref() {
            Some(name) => {
                auth::credentials::from_environment(name).map_err(BuilderError::cred)
            }
            None => Err(BuilderError::cred(
                "no credentials configured, use `with_credentials()` or `with_external_config()`",
            )),
        }
    }

    /// Changes the service URL used by future requests.
    pub fn set_service_url(&mut self, url: &str) -> gax::client_builder::Result<()> {
        self.endpoint = validate_service_url(url)?;
        Ok(())
    }

    pub fn service_url(&self) -> &str {
        &self.endpoint
    }

    /// Retries transient errors with exponential backoff.
    ///
    /// A `max_retries` of zero selects the default of 4 retries. A zero
    /// `max_interval` selects the default of 30 seconds.
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        let max_retries = if max_retries == 0 {
            DEFAULT_MAX_RETRIES
        } else {
            max_retries
        };
        let backoff = ExponentialBackoff::with_max_interval(max_interval);
        self.retry_policy = Some(Arc::new(LimitedAttemptCount::custom(
            TransientErrors,
            max_retries.saturating_add(1),
        )));
        self.backoff_policy = Some(Arc::new(backoff));
    }

    pub fn disable_retries(&mut self) {
        self.retry_policy = None;
        self.backoff_policy = None;
    }

    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn set_enable_gzip_compression(&mut self, v: bool) {
        self.gzip = v;
    }

    pub fn enable_gzip_compression(&self) -> bool {
        self.gzip
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> Result<reqwest::RequestBuilder> {
        if self.endpoint.is_empty() {
            return Err(Error::service_url_missing());
        }
        let user_agent = HeaderValue::from_str(user_agent()).map_err(Error::ser)?;
        Ok(self
            .inner
            .request(method, format!("{}{path}", &self.endpoint))
            .header(ACCEPT, HeaderValue::from_static(JSON))
            .header(USER_AGENT, user_agent)
            .headers(self.default_headers.clone()))
    }

    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned>(
        &self,
        operation_id: &'static str,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        headers: &HashMap<String, String>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let response = self
            .send(operation_id, builder, body, headers, options)
            .await?;
        to_http_response(response)
    }

    /// Like [execute][Self::execute], for operations without a result.
    ///
    /// The response body, if any, is ignored.
    pub async fn execute_no_content<I: serde::ser::Serialize>(
        &self,
        operation_id: &'static str,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        headers: &HashMap<String, String>,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let response = self
            .send(operation_id, builder, body, headers, options)
            .await?;
        let (parts, _) = response.into_parts();
        tracing::debug!(status = parts.status.as_u16(), "response without content");
        Ok(Response::from_parts(
            Parts::new()
                .set_status(parts.status)
                .set_headers(parts.headers),
            None,
        ))
    }

    async fn send<I: serde::ser::Serialize>(
        &self,
        operation_id: &'static str,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        headers: &HashMap<String, String>,
        options: RequestOptions,
    ) -> Result<http::Response<Bytes>> {
        let request = self.prepare(operation_id, builder, body, headers, &options)?;
        let span = if self.tracing {
            tracing::info_span!(
                "http_request",
                service_name = self.instrumentation.map(|i| i.service_name),
                operation_id,
                http.method = %request.method(),
                url.path = request.url().path(),
            )
        } else {
            tracing::Span::none()
        };
        self.run(request, &options).instrument(span).await
    }

    fn prepare<I: serde::ser::Serialize>(
        &self,
        operation_id: &'static str,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        headers: &HashMap<String, String>,
        options: &RequestOptions,
    ) -> Result<reqwest::Request> {
        let mut request = builder.build().map_err(Error::ser)?;
        let request_headers = request.headers_mut();
        if let Some(info) = self.instrumentation {
            let value = HeaderValue::from_str(&info.analytics_header_value(operation_id))
                .map_err(Error::ser)?;
            request_headers.insert(HeaderName::from_static(ANALYTICS_HEADER), value);
        }
        if let Some(user_agent) = options.user_agent() {
            request_headers.insert(
                USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(Error::ser)?;
            if name == CONTENT_TYPE || name == CONTENT_LENGTH || name == CONTENT_ENCODING {
                continue;
            }
            let value = HeaderValue::from_str(value).map_err(Error::ser)?;
            request_headers.insert(name, value);
        }
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            request_headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
            let payload = if self.gzip {
                request_headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
                gzip(&payload).map_err(Error::ser)?
            } else {
                payload
            };
            *request.body_mut() = Some(reqwest::Body::from(payload));
        }
        Ok(request)
    }

    async fn run(
        &self,
        request: reqwest::Request,
        options: &RequestOptions,
    ) -> Result<http::Response<Bytes>> {
        let deadline = async {
            match options.timeout() {
                Some(t) => tokio::time::sleep(*t).await,
                None => std::future::pending::<()>().await,
            }
        };
        let cancelled = async {
            match options.cancellation() {
                Some(token) => token.cancelled().await,
                None => std::future::pending::<()>().await,
            }
        };
        let call = async {
            match self.get_retry_policy(options) {
                None => self.request_attempt(request, options, None).await,
                Some(policy) => self.retry_loop(request, options, policy).await,
            }
        };
        tokio::select! {
            biased;
            _ = cancelled => Err(Error::cancelled("the request was cancelled by the application")),
            _ = deadline => Err(Error::timeout("the request deadline expired")),
            response = call => response,
        }
    }

    async fn retry_loop(
        &self,
        request: reqwest::Request,
        options: &RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<http::Response<Bytes>> {
        let idempotent = options.idempotent().unwrap_or(false);
        let backoff = self.get_backoff_policy(options);
        let inner = async |d| {
            let request = request
                .try_clone()
                .ok_or_else(|| Error::ser("the request body cannot be retried"))?;
            self.request_attempt(request, options, d).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(inner, sleep, idempotent, retry_policy, backoff)
            .await
    }

    async fn request_attempt(
        &self,
        mut request: reqwest::Request,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
    ) -> Result<http::Response<Bytes>> {
        *request.timeout_mut() = gax::retry_loop_internal::effective_timeout(options, remaining_time);
        let cached_auth_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;
        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                return Err(Error::authentication(CredentialsError::from_msg(
                    false,
                    "the credentials returned cached headers for an uncached request",
                )));
            }
        };
        for (name, value) in auth_headers.iter() {
            request.headers_mut().insert(name.clone(), value.clone());
        }
        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            "sending request"
        );
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        let response = http::Response::from(response);
        let (parts, body) = response.into_parts();
        let body = http_body_util::BodyExt::collect(body)
            .await
            .map_err(Error::io)?
            .to_bytes();
        Ok(http::Response::from_parts(parts, body))
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(&self, options: &RequestOptions) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
    }

    pub(crate) fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

/// Validates a service URL.
///
/// An empty URL is accepted, requests fail until a URL is configured. A
/// trailing `/` is removed.
pub fn validate_service_url(url: &str) -> gax::client_builder::Result<String> {
    if url.starts_with(['{', '"']) || url.ends_with(['}', '"']) {
        return Err(BuilderError::invalid_endpoint(
            url,
            "the service URL cannot start or end with curly brackets or quotes, remove any surrounding brackets or quotes",
        ));
    }
    if url.is_empty() {
        return Ok(String::new());
    }
    url::Url::parse(url).map_err(|e| BuilderError::invalid_endpoint(url, e))?;
    Ok(url.trim_end_matches('/').to_string())
}

fn flag(properties: &HashMap<String, String>, name: &str) -> bool {
    properties
        .get(name)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn number<T: std::str::FromStr + Default>(properties: &HashMap<String, String>, name: &str) -> T {
    properties
        .get(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_default()
}

fn gzip(payload: &[u8]) -> std::io::Result<Vec<u8>> {
    use std::io::Write;
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(payload)?;
    encoder.finish()
}

#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match ApiError::try_from(&body) {
        Ok(api_error) => Error::service_with_http_metadata(
            api_error.set_status_code(status_code),
            Some(status_code),
            Some(parts.headers),
        ),
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    tracing::debug!(status_code, error = %error, "request failed");
    Err(error)
}

fn to_http_response<O: serde::de::DeserializeOwned>(
    response: http::Response<Bytes>,
) -> Result<Response<O>> {
    let (parts, body) = response.into_parts();
    tracing::debug!(
        status = parts.status.as_u16(),
        length = body.len(),
        "resolving response"
    );
    // A success without content has no result.
    let result = if body.is_empty() {
        None
    } else {
        match serde_json::from_slice::<O>(&body) {
            Ok(r) => Some(r),
            Err(e) => {
                return Err(Error::deser_with_http_metadata(
                    e,
                    parts.status.as_u16(),
                    parts.headers,
                    body,
                ));
            }
        }
    };
    Ok(Response::from_parts(
        Parts::new()
            .set_status(parts.status)
            .set_headers(parts.headers),
        result,
    ))
}
