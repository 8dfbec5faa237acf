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

//! Validation and encoding of request parameters.
//!
//! Generated code validates each call before any network I/O. A call fails if
//! the options object is missing, if a required field is missing, or if a
//! path parameter is empty. A few small helper functions make the generated
//! code easier to read.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The characters escaped in a path segment.
///
/// Everything except the RFC 3986 unreserved characters, in particular `/`
/// becomes `%2F`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("the path parameter {0} cannot be empty")]
    EmptyPathParameter(String),
    #[error("the request options are missing")]
    MissingOptions,
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

pub fn missing_options() -> gax::error::Error {
    gax::error::Error::binding(Error::MissingOptions)
}

/// Returns the value of a required field, or a binding error.
///
/// # Example
/// ```
/// # use ibm_cloud_gax_internal::path_parameter::required;
/// let name = Some("my-key".to_string());
/// assert_eq!(required(&name, "name").map(String::as_str).ok(), Some("my-key"));
/// let missing: Option<String> = None;
/// assert!(required(&missing, "name").is_err());
/// ```
pub fn required<'a, T>(value: &'a Option<T>, name: &str) -> gax::Result<&'a T> {
    value.as_ref().ok_or_else(|| missing(name))
}

/// Validates and encodes a path parameter.
///
/// The parameter must be present and non-empty. The result is ready to be
/// used as a path segment.
pub fn path_segment(value: &Option<String>, name: &str) -> gax::Result<String> {
    let value = required(value, name)?;
    if value.is_empty() {
        return Err(gax::error::Error::binding(Error::EmptyPathParameter(
            name.to_string(),
        )));
    }
    Ok(encode_segment(value))
}

/// Percent-encodes `value` as a single path segment.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
