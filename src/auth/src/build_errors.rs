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

//! Errors created during credentials construction.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for [Credentials] builders.
///
/// Construction validates the configuration eagerly, so a client can never be
/// created with credentials that are certain to fail.
///
/// [Credentials]: super::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The authentication type is invalid or unknown.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.0, ErrorKind::UnknownType(_))
    }

    /// A required field was missing from the builder or the environment.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, ErrorKind::MissingField(_))
    }

    /// A field has a value that cannot be used, for example, an API key
    /// wrapped in curly braces.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self.0, ErrorKind::InvalidValue { .. })
    }

    /// The HTTP client used to fetch access tokens cannot be created.
    pub fn is_transport(&self) -> bool {
        matches!(self.0, ErrorKind::Transport(_))
    }

    /// The authentication type is unknown or invalid.
    pub(crate) fn unknown_type<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::UnknownType(source.into()))
    }

    /// A required field was missing.
    pub(crate) fn missing_field(field: &'static str) -> Error {
        Error(ErrorKind::MissingField(field))
    }

    pub(crate) fn invalid_value(field: &'static str, reason: &'static str) -> Error {
        Error(ErrorKind::InvalidValue { field, reason })
    }

    pub(crate) fn transport<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("unknown or invalid authentication type {0}")]
    UnknownType(#[source] BoxError),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
    #[error("cannot create the HTTP client for token requests {0}")]
    Transport(#[source] BoxError),
}

/// Rejects empty values and values wrapped in `{}` or double quotes.
///
/// Such values are almost always a copy-and-paste mistake from a template or a
/// JSON document.
pub(crate) fn validate(field: &'static str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::missing_field(field));
    }
    let bad_first = value.starts_with('{') || value.starts_with('"');
    let bad_last = value.ends_with('}') || value.ends_with('"');
    if bad_first || bad_last {
        return Err(Error::invalid_value(
            field,
            "the value cannot start or end with curly braces or quotes",
        ));
    }
    Ok(())
}
