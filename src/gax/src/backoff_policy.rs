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

//! Controls how long the client waits between retry attempts.
//!
//! A retry policy decides *if* a failed request is retried, a backoff policy
//! decides *when*. The policy sees the error from the failed attempt, so it
//! can follow any delay the service requested.
//!
//! # Example
//! ```
//! # use ibm_cloud_gax::backoff_policy::BackoffPolicy;
//! # use ibm_cloud_gax::error::Error;
//! use std::time::{Duration, Instant};
//!
//! // Waits one second per attempt, ignoring `Retry-After`.
//! #[derive(Debug)]
//! struct Linear;
//! impl BackoffPolicy for Linear {
//!     fn on_failure(&self, _loop_start: Instant, attempt_count: u32, _error: &Error) -> Duration {
//!         Duration::from_secs(attempt_count as u64)
//!     }
//! }
//! ```

use crate::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the delay before the next attempt.
    ///
    /// `attempt_count` is the number of attempts made so far, it is at least
    /// one. `error` is the error returned by the last attempt.
    fn on_failure(&self, loop_start: Instant, attempt_count: u32, error: &Error) -> Duration;
}

/// Accepts any [BackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct BackoffPolicyArg(pub(crate) Arc<dyn BackoffPolicy>);

impl<T: BackoffPolicy + 'static> From<T> for BackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<BackoffPolicyArg> for Arc<dyn BackoffPolicy> {
    fn from(value: BackoffPolicyArg) -> Self {
        value.0
    }
}
