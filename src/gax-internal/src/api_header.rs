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

//! SDK header helpers.
//!
//! Every request carries a `User-Agent` header identifying the SDK and the
//! platform, and an `X-IBMCloud-SDK-Analytics` header identifying the service
//! and the operation.

use crate::InstrumentationClientInfo;
use std::sync::LazyLock;

/// The name of the analytics header.
pub const ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";

/// The name of the SDK, used in the user agent.
pub const SDK_NAME: &str = "ibm-cloud-rust-sdk";

mod build_info {
    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{SDK_NAME}/{} (lang=rust; arch={}; os={})",
        build_info::PKG_VERSION,
        std::env::consts::ARCH,
        std::env::consts::OS,
    )
});

/// Returns the value of the `User-Agent` header.
pub fn user_agent() -> &'static str {
    USER_AGENT.as_str()
}

impl InstrumentationClientInfo {
    /// Format the analytics header value for `operation_id`.
    pub fn analytics_header_value(&self, operation_id: &str) -> String {
        format!(
            "service_name={};service_version={};operation_id={operation_id}",
            self.service_name, self.service_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_format() {
        let got = user_agent();
        assert!(
            got.starts_with(&format!("{SDK_NAME}/{} (", build_info::PKG_VERSION)),
            "{got}"
        );
        assert!(got.contains("lang=rust"), "{got}");
        assert!(
            got.contains(&format!("arch={}", std::env::consts::ARCH)),
            "{got}"
        );
        assert!(got.contains(&format!("os={}", std::env::consts::OS)), "{got}");
        assert!(http::HeaderValue::from_str(got).is_ok(), "{got}");
    }

    #[test]
    fn analytics() {
        let info = InstrumentationClientInfo {
            service_name: "iam_identity",
            service_version: "V1",
        };
        assert_eq!(
            info.analytics_header_value("ListApiKeys"),
            "service_name=iam_identity;service_version=V1;operation_id=ListApiKeys"
        );
    }
}
