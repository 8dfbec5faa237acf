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

//! Credentials that do not authenticate requests.
//!
//! Useful for services running behind a trusted proxy, and in tests.

use crate::credentials::{CacheableResource, Credentials, CredentialsProvider, EntityTag, Result};
use http::{Extensions, HeaderMap};

#[derive(Debug)]
struct NoAuthCredentials {
    entity_tag: EntityTag,
}

impl CredentialsProvider for NoAuthCredentials {
    async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        match extensions.get::<EntityTag>() {
            Some(tag) if *tag == self.entity_tag => Ok(CacheableResource::NotModified),
            _ => Ok(CacheableResource::New {
                entity_tag: self.entity_tag.clone(),
                data: HeaderMap::new(),
            }),
        }
    }
}

/// A builder for credentials that add no headers to the requests.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::no_auth::Builder;
/// let credentials = Builder::default().build();
/// ```
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Returns a [Credentials] instance that adds no headers.
    pub fn build(self) -> Credentials {
        Credentials::from(NoAuthCredentials {
            entity_tag: EntityTag::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::tests::get_headers_from_cache;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[tokio::test]
    async fn empty_headers() -> TestResult {
        let credentials = Builder::default().build();
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn not_modified() -> TestResult {
        let credentials = Builder::default().build();
        let tag = match credentials.headers(Extensions::new()).await? {
            CacheableResource::New { entity_tag, .. } => entity_tag,
            CacheableResource::NotModified => unreachable!("expecting new headers"),
        };
        let mut extensions = Extensions::new();
        extensions.insert(tag);
        let got = credentials.headers(extensions).await?;
        assert!(matches!(got, CacheableResource::NotModified), "{got:?}");
        Ok(())
    }
}
