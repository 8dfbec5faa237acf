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

use super::{ApiError, CredentialsError};
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection to make a request, the request may timeout before a
/// response is received, the retry policy may be exhausted, or the library may
/// be unable to format the request due to invalid or missing application
/// inputs.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// Errors that happen after a response is received keep the HTTP status code,
/// headers and (when available) the payload of that response. Errors detected
/// before any request is sent have no HTTP metadata.
///
/// # Example
/// ```
/// use ibm_cloud_gax::error::Error;
/// match example_function() {
///     Err(e) if e.api_error().is_some() => {
///         println!("service error {e}, debug using {:?}", e.api_error());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use ibm_cloud_gax::error::ApiError;
///     # Err(Error::service(ApiError::new("NOT FOUND").set_code("not_found")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by IBM Cloud services.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::{ApiError, Error};
    /// let details = ApiError::new("NOT FOUND").set_code("not_found");
    /// let error = Error::service(details.clone());
    /// assert_eq!(error.api_error(), Some(&details));
    /// ```
    pub fn service(api_error: ApiError) -> Self {
        Self::service_with_http_metadata(api_error, None, None)
    }

    /// Creates a service error that also keeps the HTTP response metadata.
    pub fn service_with_http_metadata(
        api_error: ApiError,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            api_error,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The error details reported by the service, if any.
    ///
    /// Only errors returned by the service, where the response payload
    /// contains a valid IBM Cloud error envelope, have these details.
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.api_error),
            _ => None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value to handle temporary latency
    /// increases too.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a request cancelled by the application.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::cancelled("the application cancelled the request");
    /// assert!(error.is_cancelled());
    /// ```
    pub fn cancelled<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Cancelled,
            source: Some(source.into()),
        }
    }

    /// The application cancelled the request before it completed.
    ///
    /// As with timeouts, the request may or may not have reached the service.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }

    /// Creates an error representing an exhausted policy.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::exhausted("too many retry attempts");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The request could not complete before the retry policy expired.
    ///
    /// This is always a client-side generated error, but it may be the result
    /// of multiple errors received from the service.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is a transient problem that lasts
    /// longer than your retry policy. If your application can tolerate longer
    /// recovery times then extend the retry policy.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Creates an error representing a missing service URL.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::service_url_missing();
    /// assert!(error.is_service_url_missing());
    /// assert!(error.to_string().contains("service URL is missing"));
    /// ```
    pub fn service_url_missing() -> Self {
        Self {
            kind: ErrorKind::ServiceUrlMissing,
            source: None,
        }
    }

    /// The client has no service URL configured.
    ///
    /// # Troubleshooting
    ///
    /// The service URL can be cleared after the client is created, for example,
    /// by calling `set_service_url("")`. Set a valid URL before making requests.
    pub fn is_service_url_missing(&self) -> bool {
        matches!(self.kind, ErrorKind::ServiceUrlMissing)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization(None),
            source: Some(source.into()),
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates a deserialization error that keeps the response metadata.
    #[doc(hidden)]
    pub fn deser_with_http_metadata<T: Into<BoxError>>(
        source: T,
        status_code: u16,
        headers: HeaderMap,
        payload: bytes::Bytes,
    ) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Deserialization(Some(Box::new(details))),
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. The service returned a
    /// successful status code, but the payload did not match the expected
    /// format. The HTTP status code, headers and payload are available via
    /// [http_status_code][Error::http_status_code],
    /// [http_headers][Error::http_headers] and
    /// [http_payload][Error::http_payload].
    ///
    /// # Troubleshooting
    ///
    /// The most common cause for deserialization problems are bugs in the
    /// client library, (rarely) bugs in the service, or a service URL that
    /// points to something other than the expected service.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization(_))
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic.
    ///
    /// # Troubleshooting
    ///
    /// Most of the time this is caused by custom headers with invalid names or
    /// values.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// let e = search_for_key("test-only-id");
    /// if let Some(404) = e.http_status_code() {
    ///     println!("cannot find the API key");
    /// }
    /// fn search_for_key(id: &str) -> Error {
    ///   # Error::http(404, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Deserialization(Some(d)) => d.status_code,
            ErrorKind::Service(d) => d.status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Deserialization(Some(d)) => d.headers.as_ref(),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            ErrorKind::Deserialization(Some(d)) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a missing or invalid request parameter.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// The request is missing its options, or a required parameter.
    ///
    /// This is always a client-side generated error, generated before any
    /// request is made.
    ///
    /// # Troubleshooting
    ///
    /// Set the request options with `with_options()` or the `set_*` setters
    /// in the request builder, including all the required fields.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// For IAM credentials, verify the API key is valid and the IAM token
    /// endpoint is reachable.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error for a response that did not contain an IBM Cloud error
    /// envelope.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error for a problem sending the request or receiving the
    /// response, such as a dropped connection.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem sending the request or receiving the response.
    ///
    /// These problems are detected before any HTTP response is received.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error for a problem reading a response after its headers
    /// were received.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: Some(headers),
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer, or a response without an IBM Cloud
    /// error envelope.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    pub(crate) fn is_transient_and_before_rpc(&self) -> bool {
        if !matches!(&self.kind, ErrorKind::Authentication) {
            return false;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<CredentialsError>())
            .map(|e| e.is_transient())
            .unwrap_or(false)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot find a matching binding to send the request {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization(_), Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Cancelled, Some(e)) => {
                write!(f, "the request was cancelled {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => {
                write!(f, "{e}")
            }
            (ErrorKind::ServiceUrlMissing, _) => {
                write!(f, "the service URL is missing, set it before making requests")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.api_error.code().unwrap_or("unknown"),
                    d.api_error.message()
                )
            }
            (_, None) => write!(f, "{:?}", self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization(Option<Box<TransportDetails>>),
    Authentication,
    Timeout,
    Cancelled,
    Exhausted,
    ServiceUrlMissing,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => write!(f, "the transport reports an unknown error"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    api_error: ApiError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    fn test_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    fn test_source() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::ConnectionReset, "test-only-source")
    }

    fn assert_source(error: &Error) {
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(
            matches!(got, Some(e) if e.kind() == std::io::ErrorKind::ConnectionReset),
            "{error:?}"
        );
        assert!(error.to_string().contains("test-only-source"), "{error}");
    }

    fn assert_no_http_metadata(error: &Error) {
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.api_error().is_none(), "{error:?}");
    }

    #[test]
    fn service() {
        let details = ApiError::new("NOT FOUND").set_code("not_found");
        let error = Error::service(details.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.api_error(), Some(&details));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("not_found"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let details = ApiError::new("NOT FOUND").set_code("not_found");
        let error =
            Error::service_with_http_metadata(details.clone(), Some(404), Some(test_headers()));
        assert_eq!(error.api_error(), Some(&details));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&test_headers()));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(test_source());
        assert!(error.is_timeout(), "{error:?}");
        assert!(!error.is_cancelled(), "{error:?}");
        assert_source(&error);
        assert_no_http_metadata(&error);
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn cancelled() {
        let error = Error::cancelled(test_source());
        assert!(error.is_cancelled(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert_source(&error);
        assert_no_http_metadata(&error);
    }

    #[test]
    fn exhausted() {
        let error = Error::exhausted(test_source());
        assert!(error.is_exhausted(), "{error:?}");
        assert_source(&error);
        assert_no_http_metadata(&error);
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn service_url_missing() {
        let error = Error::service_url_missing();
        assert!(error.is_service_url_missing(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(
            error.to_string().contains("service URL is missing"),
            "{error}"
        );
        assert_no_http_metadata(&error);
    }

    #[test]
    fn deserialization() {
        let error = Error::deser(test_source());
        assert!(error.is_deserialization(), "{error:?}");
        assert_source(&error);
        assert_no_http_metadata(&error);
    }

    #[test]
    fn deserialization_with_http_metadata() {
        let payload = bytes::Bytes::from_static(b"{not-json");
        let error = Error::deser_with_http_metadata(test_source(), 200, test_headers(), payload.clone());
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert_source(&error);
        assert_eq!(error.http_status_code(), Some(200));
        assert_eq!(error.http_headers(), Some(&test_headers()));
        assert_eq!(error.http_payload(), Some(&payload));
    }

    #[test]
    fn serialization() {
        let error = Error::ser(test_source());
        assert!(error.is_serialization(), "{error:?}");
        assert_source(&error);
        assert_no_http_metadata(&error);
    }

    #[test]
    fn binding() {
        let error = Error::binding(test_source());
        assert!(error.is_binding(), "{error:?}");
        assert_source(&error);
        assert_no_http_metadata(&error);
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn auth_transient() {
        let source = CredentialsError::from_msg(true, "test-message");
        let error = Error::authentication(source);
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
        assert!(error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn auth_not_transient() {
        let source = CredentialsError::from_msg(false, "test-message");
        let error = Error::authentication(source);
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn http() {
        let payload = bytes::Bytes::from_static(b"NOT FOUND");
        let error = Error::http(404, test_headers(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.api_error().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&test_headers()));
        assert_eq!(error.http_payload(), Some(&payload));
    }

    #[test]
    fn http_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(502, test_headers(), payload.clone());
        assert!(
            error.to_string().contains(&format!("{payload:?}")),
            "{error}"
        );
        assert!(error.to_string().contains("502"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io(test_source());
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert_source(&error);
        assert_no_http_metadata(&error);
    }

    #[test]
    fn transport() {
        let error = Error::transport(test_headers(), test_source());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_source(&error);
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert_eq!(error.http_headers(), Some(&test_headers()));
        assert!(error.http_payload().is_none(), "{error:?}");
    }
}
