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

//! The decision a [RetryPolicy][crate::retry_policy::RetryPolicy] makes about
//! a failed attempt.
//!
//! Only applications writing their own retry policies need this type.
//!
//! # Example
//! ```
//! # use ibm_cloud_gax::error::Error;
//! # use ibm_cloud_gax::retry_policy::RetryPolicy;
//! # use ibm_cloud_gax::retry_result::RetryResult;
//! // Retries throttled requests, up to 10 attempts.
//! #[derive(Debug)]
//! struct OnlyThrottled;
//! impl RetryPolicy for OnlyThrottled {
//!     fn on_error(
//!         &self,
//!         _loop_start: std::time::Instant,
//!         attempt_count: u32,
//!         _idempotent: bool,
//!         error: Error,
//!     ) -> RetryResult {
//!         match error.http_status_code() {
//!             Some(429) if attempt_count >= 10 => RetryResult::Exhausted(error),
//!             Some(429) => RetryResult::Continue(error),
//!             _ => RetryResult::Permanent(error),
//!         }
//!     }
//! }
//! ```

use crate::error::Error;

/// Each variant carries the error from the failed attempt. The retry loop
/// returns it unchanged unless the decision is [Continue][Self::Continue].
#[derive(Debug)]
pub enum RetryResult {
    /// Retrying cannot succeed, e.g. a 404 or an invalid request.
    Permanent(Error),
    /// The error is transient, but the policy has run out of attempts or
    /// time.
    Exhausted(Error),
    /// Try again after the backoff delay.
    Continue(Error),
}

impl RetryResult {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}
