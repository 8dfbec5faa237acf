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

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The error details reported by IBM Cloud services.
///
/// IBM Cloud services report errors using a JSON envelope. Most services use
/// an `errors` array where each element has a `code` and a `message`, plus a
/// top-level `trace` identifier. Some older services report a flat object with
/// `error`, `message` or `errorMessage` fields. This type normalizes all these
/// shapes.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::error::ApiError;
/// let body = serde_json::json!({
///     "trace": "abc-123",
///     "errors": [{"code": "not_found", "message": "API key not found"}],
///     "status_code": 404,
/// });
/// let payload = bytes::Bytes::from(body.to_string());
/// let error = ApiError::try_from(&payload).unwrap();
/// assert_eq!(error.message(), "API key not found");
/// assert_eq!(error.code(), Some("not_found"));
/// assert_eq!(error.trace(), Some("abc-123"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ApiError {
    /// The HTTP status code reported in the envelope, if any.
    pub status_code: Option<u16>,
    /// A machine readable error code.
    pub code: Option<String>,
    /// A human readable message.
    pub message: String,
    /// The trace identifier, useful when contacting IBM Cloud support.
    pub trace: Option<String>,
    /// The individual error items.
    pub errors: Vec<ApiErrorItem>,
}

/// One element of the `errors` array in the IBM Cloud error envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApiErrorItem {
    pub code: Option<String>,
    pub message: Option<String>,
    pub message_code: Option<String>,
    pub more_info: Option<String>,
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error with the given message.
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Sets the machine readable code.
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    /// Sets the HTTP status code.
    pub fn set_status_code(mut self, v: u16) -> Self {
        self.status_code = Some(v);
        self
    }

    /// Sets the trace identifier.
    pub fn set_trace<T: Into<String>>(mut self, v: T) -> Self {
        self.trace = Some(v.into());
        self
    }

    /// Sets the error items.
    pub fn set_errors<T: IntoIterator<Item = ApiErrorItem>>(mut self, v: T) -> Self {
        self.errors = v.into_iter().collect();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    fn from_object(object: &Map<String, Value>) -> Option<Self> {
        let items: Vec<ApiErrorItem> = object
            .get("errors")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default();
        let message = items
            .first()
            .and_then(|e| e.message.clone())
            .or_else(|| string_field(object, "error"))
            .or_else(|| string_field(object, "message"))
            .or_else(|| string_field(object, "errorMessage"))?;
        let code = items
            .first()
            .and_then(|e| e.code.clone())
            .or_else(|| scalar_field(object, "code"))
            .or_else(|| scalar_field(object, "errorCode"));
        let trace = string_field(object, "trace").or_else(|| string_field(object, "incidentID"));
        let status_code = object
            .get("status_code")
            .and_then(Value::as_u64)
            .and_then(|v| u16::try_from(v).ok());
        Some(Self {
            status_code,
            code,
            message,
            trace,
            errors: items,
        })
    }
}

fn string_field(object: &Map<String, Value>, name: &str) -> Option<String> {
    object.get(name).and_then(Value::as_str).map(str::to_string)
}

// Some services report numeric codes.
fn scalar_field(object: &Map<String, Value>, name: &str) -> Option<String> {
    match object.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl TryFrom<&bytes::Bytes> for ApiError {
    type Error = serde_json::Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let json = serde_json::from_slice::<Value>(value)?;
        json.as_object()
            .and_then(ApiError::from_object)
            .ok_or_else(|| serde::de::Error::custom("no error message in the response payload"))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.trace) {
            (Some(c), Some(t)) => write!(f, "{} [code={c}, trace={t}]", self.message),
            (Some(c), None) => write!(f, "{} [code={c}]", self.message),
            (None, Some(t)) => write!(f, "{} [trace={t}]", self.message),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn parse(v: Value) -> Result<ApiError, serde_json::Error> {
        let payload = bytes::Bytes::from(v.to_string());
        ApiError::try_from(&payload)
    }

    #[test]
    fn errors_array() -> TestResult {
        let got = parse(json!({
            "trace": "test-trace",
            "status_code": 409,
            "errors": [
                {"code": "conflict", "message": "entity tag mismatch", "more_info": "https://example.com"},
                {"code": "other", "message": "ignored"},
            ],
        }))?;
        assert_eq!(got.message(), "entity tag mismatch");
        assert_eq!(got.code(), Some("conflict"));
        assert_eq!(got.trace(), Some("test-trace"));
        assert_eq!(got.status_code, Some(409));
        assert_eq!(got.errors.len(), 2);
        assert_eq!(got.errors[0].more_info.as_deref(), Some("https://example.com"));
        Ok(())
    }

    #[test_case(json!({"error": "test-message"}); "error field")]
    #[test_case(json!({"message": "test-message"}); "message field")]
    #[test_case(json!({"errorMessage": "test-message"}); "errorMessage field")]
    #[test_case(json!({"errors": [], "message": "test-message"}); "empty errors")]
    fn flat_messages(input: Value) -> TestResult {
        let got = parse(input)?;
        assert_eq!(got.message(), "test-message");
        assert!(got.errors.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn precedence() -> TestResult {
        let got = parse(json!({
            "errors": [{"message": "from-errors"}],
            "error": "from-error",
            "message": "from-message",
            "code": 42,
        }))?;
        assert_eq!(got.message(), "from-errors");
        assert_eq!(got.code(), Some("42"));
        Ok(())
    }

    #[test]
    fn incident_id() -> TestResult {
        let got = parse(json!({"errorMessage": "test-message", "errorCode": "BXNIM0415E", "incidentID": "test-incident"}))?;
        assert_eq!(got.code(), Some("BXNIM0415E"));
        assert_eq!(got.trace(), Some("test-incident"));
        Ok(())
    }

    #[test_case(json!({}); "empty object")]
    #[test_case(json!({"code": "no-message"}); "no message")]
    #[test_case(json!(["not", "an", "object"]); "array")]
    #[test_case(json!({"errors": "not-an-array"}); "bad errors")]
    fn no_envelope(input: Value) {
        let got = parse(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn not_json() {
        let payload = bytes::Bytes::from_static(b"<html>Bad Gateway</html>");
        let got = ApiError::try_from(&payload);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn display() {
        let error = ApiError::new("test-message")
            .set_code("test-code")
            .set_trace("test-trace");
        let fmt = error.to_string();
        assert!(fmt.contains("test-message"), "{fmt}");
        assert!(fmt.contains("test-code"), "{fmt}");
        assert!(fmt.contains("test-trace"), "{fmt}");
        assert_eq!(ApiError::new("only-message").to_string(), "only-message");
    }
}
