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

//! Response types.
//!
//! This module contains types related to IBM Cloud service responses.
//! Notably it contains the `Response` type itself. Typically you'll import
//! this type.
//!
//! A successful response always carries the HTTP status code and headers.
//! The body is optional: IBM Cloud services return empty bodies for some
//! successful requests (e.g. `204 No Content` on deletes), and in that case
//! [Response::body] returns `None`.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use ibm_cloud_gax::Result;
//! # use ibm_cloud_gax::response::Response;
//! // A type representing an IBM Cloud service resource, for example, an
//! // API key.
//! struct Resource {
//!   // ...
//! }
//!
//! async fn make_ibm_service_request(id: &str) -> Result<Response<Resource>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = make_ibm_service_request("ApiKey-1234").await?;
//! if let Some(date) = response.headers().get("Date") {
//!     // do something with the date
//! }
//! match response.body() {
//!     Some(resource) => { /* do something with the resource */ },
//!     None => println!("empty response with status {}", response.status_code()),
//! }
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use ibm_cloud_gax::Result;
//! # use ibm_cloud_gax::response::Response;
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents an IBM Cloud service response.
///
/// The body is `None` when the service returned a successful status code
/// with an empty payload.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: Option<T>,
}

impl<T> Response<T> {
    /// Creates a successful response with a `200 OK` status and the given body.
    pub fn from(body: T) -> Self {
        Self {
            body: Some(body),
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts and optional body.
    pub fn from_parts(parts: Parts, body: Option<T>) -> Self {
        Self { parts, body }
    }

    /// Returns the HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.parts.status.as_u16()
    }

    /// Returns the HTTP status.
    pub fn status(&self) -> http::StatusCode {
        self.parts.status
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response, if any.
    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    /// Returns `true` if the service returned an empty payload.
    pub fn is_empty(&self) -> bool {
        self.body.is_none()
    }

    /// Consumes the response returning the metadata and body.
    pub fn into_parts(self) -> (Parts, Option<T>) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> Option<T> {
        self.body
    }

    /// Maps the body of the response, keeping the status and headers.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: self.body.map(f),
        }
    }
}

/// Component parts of a response.
///
/// The response status and headers, without the body.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status of the response.
    pub status: http::StatusCode,
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Default for Parts {
    fn default() -> Self {
        Self {
            status: http::StatusCode::OK,
            headers: http::HeaderMap::new(),
        }
    }
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status<V>(mut self, v: V) -> Self
    where
        V: Into<http::StatusCode>,
    {
        self.status = v.into();
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}
