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

//! Exponential backoff for IBM Cloud services.
//!
//! The delay before retry `n` is `initial_delay * 2^(n-1)`, capped at the
//! maximum delay. A throttled (429) or unavailable (503) response may ask
//! for a specific delay with `Retry-After: <seconds>`. The policy honors the
//! request, but never waits longer than the maximum delay.
//!
//! This is the policy installed by `enable_retries()` in a client.
//!
//! # Example
//! ```
//! # use ibm_cloud_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
//! use std::time::Duration;
//!
//! let policy = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(250))
//!     .with_maximum_delay(Duration::from_secs(10))
//!     .build()?;
//! # Ok::<(), Error>(())
//! ```

use crate::backoff_policy::BackoffPolicy;
use crate::error::Error as RequestError;
use std::time::{Duration, Instant};

/// The initial delay used by [ExponentialBackoff::with_max_interval].
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);

/// The maximum delay used when the application does not provide one.
pub const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(30);

/// The error type for exponential backoff creation.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the initial delay must be greater than zero")]
    InvalidInitialDelay,
    #[error("the maximum delay ({maximum:?}) is shorter than the initial delay ({initial:?})")]
    EmptyRange {
        maximum: Duration,
        initial: Duration,
    },
}

/// Builds an [ExponentialBackoff] with custom delays.
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
}

impl ExponentialBackoffBuilder {
    pub fn new() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
        }
    }

    /// The delay before the first retry.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// The upper bound for any delay, including delays requested by the
    /// service.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay);
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
        })
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Doubles the delay after each failed attempt, up to a maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
}

impl ExponentialBackoff {
    /// Returns the policy for a maximum retry interval.
    ///
    /// A zero `max_interval` selects [DEFAULT_MAXIMUM_DELAY]. The first retry
    /// waits [DEFAULT_INITIAL_DELAY], or `max_interval` if that is shorter.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::exponential_backoff::ExponentialBackoff;
    /// use std::time::Duration;
    /// let policy = ExponentialBackoff::with_max_interval(Duration::from_millis(100));
    /// assert_eq!(policy.initial_delay(), Duration::from_millis(100));
    /// assert_eq!(policy.maximum_delay(), Duration::from_millis(100));
    /// ```
    pub fn with_max_interval(max_interval: Duration) -> Self {
        let maximum_delay = if max_interval.is_zero() {
            DEFAULT_MAXIMUM_DELAY
        } else {
            max_interval
        };
        Self {
            initial_delay: std::cmp::min(DEFAULT_INITIAL_DELAY, maximum_delay),
            maximum_delay,
        }
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    pub fn maximum_delay(&self) -> Duration {
        self.maximum_delay
    }

    fn delay(&self, attempt_count: u32) -> Duration {
        2_u32
            .checked_pow(attempt_count.saturating_sub(1))
            .and_then(|factor| self.initial_delay.checked_mul(factor))
            .map_or(self.maximum_delay, |d| d.min(self.maximum_delay))
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::with_max_interval(Duration::ZERO)
    }
}

impl BackoffPolicy for ExponentialBackoff {
    fn on_failure(
        &self,
        _loop_start: Instant,
        attempt_count: u32,
        error: &RequestError,
    ) -> Duration {
        match retry_after(error) {
            Some(requested) => requested.min(self.maximum_delay),
            None => self.delay(attempt_count),
        }
    }
}

// Only the delay-seconds form is supported, HTTP dates are ignored.
fn retry_after(error: &RequestError) -> Option<Duration> {
    if !matches!(error.http_status_code(), Some(429) | Some(503)) {
        return None;
    }
    error
        .http_headers()?
        .get(http::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
