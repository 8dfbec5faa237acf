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

//! Defines traits for retry policies and some common implementations.
//!
//! IBM Cloud clients do not retry requests by default. Applications enable
//! retries with `enable_retries()` on the client, which installs a
//! [TransientErrors] policy limited to a number of attempts. Applications may
//! also configure their own retry policy in the client builder, or in the
//! options of each request.
//!
//! The policies in this module only decide *if* a request should be retried,
//! the [backoff policy][crate::backoff_policy] decides *when*.
//!
//! # Example
//! ```
//! # use ibm_cloud_gax::*;
//! # use ibm_cloud_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = TransientErrors
//!     .with_attempt_limit(5)
//!     .with_time_limit(Duration::from_secs(60));
//! ```

use crate::error::Error;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method is called after the first attempt, so the
    ///   value is always non-zero.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many more
    ///   errors are retryable on idempotent operations.
    /// * `error` - the last error when attempting the request.
    #[must_use = "the result of on_error() determines if the loop continues"]
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next attempt
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
    ) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(pub(crate) Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry loop.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::retry_policy::*;
    /// use std::time::Duration;
    /// let policy = TransientErrors.with_time_limit(Duration::from_secs(10));
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// The initial attempt counts, so a limit of `1` disables retries, and a
    /// limit of `n + 1` allows `n` retries.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::retry_policy::*;
    /// let policy = TransientErrors.with_attempt_limit(5);
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// A retry policy that retries transient errors.
///
/// The following errors are considered transient:
/// - Errors sending the request or receiving the response, such as a reset
///   connection.
/// - HTTP responses with status code `429` (too many requests).
/// - HTTP responses with a `5xx` status code, except `501` (not implemented).
/// - Transient errors creating the authentication headers, for example, a
///   failure reaching the IAM token service.
///
/// This policy ignores the idempotency of the request. Applications that
/// enable retries accept that non-idempotent requests may be sent more than
/// once.
///
/// This policy does not limit the number of attempts or the elapsed time,
/// decorate it with [RetryPolicyExt::with_attempt_limit] or
/// [RetryPolicyExt::with_time_limit].
#[derive(Clone, Debug)]
pub struct TransientErrors;

impl TransientErrors {
    /// Returns true if the HTTP status code represents a transient error.
    pub fn is_transient_status(status_code: u16) -> bool {
        status_code == 429 || ((500..600).contains(&status_code) && status_code != 501)
    }
}

impl RetryPolicy for TransientErrors {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if error.is_transient_and_before_rpc() || error.is_io() {
            return RetryResult::Continue(error);
        }
        match error.http_status_code() {
            Some(code) if !error.is_deserialization() && Self::is_transient_status(code) => {
                RetryResult::Continue(error)
            }
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that never retries.
///
/// This is the default policy for IBM Cloud clients.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop. Mostly useful in tests.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. While the time spent in the retry loop (including time in backoff)
/// is less than the prescribed duration the `on_error()` method returns the
/// results of the inner policy. After that time it returns
/// [Exhausted][RetryResult::Exhausted] if the inner policy returns
/// [Continue][RetryResult::Continue].
///
/// The `remaining_time()` function returns the remaining time. This is always
/// [Duration::ZERO] once or after the policy's expiration time is reached.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: TransientErrors,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn error_if_exhausted(&self, loop_start: std::time::Instant, error: Error) -> RetryResult {
        let deadline = loop_start + self.maximum_duration;
        let now = tokio::time::Instant::now().into_std();
        if now < deadline {
            RetryResult::Continue(error)
        } else {
            RetryResult::Exhausted(error)
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        start: std::time::Instant,
        count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(start, count, idempotent, error) {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => self.error_if_exhausted(start, e),
        }
    }

    fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration> {
        let deadline = loop_start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now().into_std());
        if let Some(inner) = self.inner.remaining_time(loop_start, attempt_count) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// This policy decorates an inner policy and limits the total number of
/// attempts. Note that `on_error()` is not called before the initial
/// (non-retry) attempt. Therefore, setting the maximum number of attempts to 0
/// or 1 results in no retry attempts.
///
/// The policy passes through the results from the inner policy as long as
/// `attempt_count < maximum_attempts`. Once the maximum number of attempts is
/// reached, the policy returns [Exhausted][RetryResult::Exhausted] if the
/// inner policy returns [Continue][RetryResult::Continue].
#[derive(Debug)]
pub struct LimitedAttemptCount<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: TransientErrors,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        start: std::time::Instant,
        count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(start, count, idempotent, error) {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => {
                if count >= self.maximum_attempts {
                    RetryResult::Exhausted(e)
                } else {
                    RetryResult::Continue(e)
                }
            }
        }
    }

    fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, CredentialsError};
    use std::time::Instant;
    use test_case::test_case;

    // Verify `RetryPolicyArg` can be converted from the desired types.
    #[test]
    fn retry_policy_arg() {
        let policy = LimitedAttemptCount::new(3);
        let _ = RetryPolicyArg::from(policy);

        let policy: Arc<dyn RetryPolicy> = Arc::new(LimitedAttemptCount::new(3));
        let _ = RetryPolicyArg::from(policy);
    }

    fn http_error(code: u16) -> Error {
        Error::http(
            code,
            http::HeaderMap::new(),
            bytes::Bytes::from_static(b"test-only"),
        )
    }

    fn service_error(code: u16) -> Error {
        Error::service_with_http_metadata(ApiError::new("test-only"), Some(code), None)
    }

    #[test_case(429, true)]
    #[test_case(500, true)]
    #[test_case(501, false)]
    #[test_case(502, true)]
    #[test_case(503, true)]
    #[test_case(504, true)]
    #[test_case(599, true)]
    #[test_case(400, false)]
    #[test_case(401, false)]
    #[test_case(404, false)]
    #[test_case(409, false)]
    fn transient_status(code: u16, want: bool) {
        assert_eq!(TransientErrors::is_transient_status(code), want);
        let p = TransientErrors;
        let now = Instant::now();
        for idempotent in [true, false] {
            let got = p.on_error(now, 1, idempotent, http_error(code));
            assert_eq!(got.is_continue(), want, "{got:?}");
            let got = p.on_error(now, 1, idempotent, service_error(code));
            assert_eq!(got.is_continue(), want, "{got:?}");
        }
    }

    #[test]
    fn transient_errors() {
        let p = TransientErrors;
        let now = Instant::now();

        let got = p.on_error(now, 1, false, Error::io("err"));
        assert!(got.is_continue(), "{got:?}");

        let got = p.on_error(
            now,
            1,
            false,
            Error::authentication(CredentialsError::from_msg(true, "err")),
        );
        assert!(got.is_continue(), "{got:?}");
        let got = p.on_error(
            now,
            1,
            false,
            Error::authentication(CredentialsError::from_msg(false, "err")),
        );
        assert!(got.is_permanent(), "{got:?}");

        let got = p.on_error(now, 1, true, Error::ser("err"));
        assert!(got.is_permanent(), "{got:?}");
        let got = p.on_error(now, 1, true, Error::binding("err"));
        assert!(got.is_permanent(), "{got:?}");
        let got = p.on_error(now, 1, true, Error::timeout("err"));
        assert!(got.is_permanent(), "{got:?}");
        let got = p.on_error(now, 1, true, Error::service_url_missing());
        assert!(got.is_permanent(), "{got:?}");
        let got = p.on_error(
            now,
            1,
            true,
            Error::deser_with_http_metadata(
                "err",
                503,
                http::HeaderMap::new(),
                bytes::Bytes::new(),
            ),
        );
        assert!(got.is_permanent(), "{got:?}");

        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn never_retry() {
        let p = NeverRetry;
        let now = Instant::now();
        let got = p.on_error(now, 1, true, http_error(503));
        assert!(got.is_exhausted(), "{got:?}");
        let got = p.on_error(now, 1, true, http_error(400));
        assert!(got.is_exhausted(), "{got:?}");
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn always_retry() {
        let p = AlwaysRetry;
        let now = Instant::now();
        let got = p.on_error(now, 1, true, http_error(400));
        assert!(got.is_continue(), "{got:?}");
        let got = p.on_error(now, 1, false, Error::ser("err"));
        assert!(got.is_continue(), "{got:?}");
    }

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, loop_start: std::time::Instant, attempt_count: u32, idempotent: bool, error: Error) -> RetryResult;
            fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    #[test]
    fn limited_attempt_count() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let policy = LimitedAttemptCount::custom(mock, 3);
        let now = Instant::now();

        let got = policy.on_error(now, 1, true, http_error(503));
        assert!(got.is_continue(), "{got:?}");
        let got = policy.on_error(now, 2, true, http_error(503));
        assert!(got.is_continue(), "{got:?}");
        let got = policy.on_error(now, 3, true, http_error(503));
        assert!(got.is_exhausted(), "{got:?}");
    }

    #[test]
    fn limited_attempt_count_inner_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(2)
            .returning(|_, _, _, e| RetryResult::Permanent(e));
        let policy = LimitedAttemptCount::custom(mock, 2);
        let now = Instant::now();

        let got = policy.on_error(now, 1, true, http_error(400));
        assert!(got.is_permanent(), "{got:?}");
        let got = policy.on_error(now, 2, true, http_error(400));
        assert!(got.is_permanent(), "{got:?}");
    }

    #[test]
    fn limited_attempt_count_remaining_time() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(123)));
        let policy = LimitedAttemptCount::custom(mock, 3);
        let got = policy.remaining_time(Instant::now(), 1);
        assert_eq!(got, Some(Duration::from_secs(123)));
    }

    #[test]
    fn limited_attempt_count_one_attempt() {
        let policy = TransientErrors.with_attempt_limit(1);
        let got = policy.on_error(Instant::now(), 1, true, http_error(503));
        assert!(got.is_exhausted(), "{got:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn limited_elapsed_time() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let start = tokio::time::Instant::now().into_std();

        let got = policy.on_error(start, 1, true, http_error(503));
        assert!(got.is_continue(), "{got:?}");

        tokio::time::advance(Duration::from_secs(61)).await;
        let got = policy.on_error(start, 2, true, http_error(503));
        assert!(got.is_exhausted(), "{got:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn limited_elapsed_time_remaining() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time().returning(|_, _| None);
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let start = tokio::time::Instant::now().into_std();

        tokio::time::advance(Duration::from_secs(10)).await;
        let got = policy.remaining_time(start, 1);
        assert_eq!(got, Some(Duration::from_secs(50)));

        tokio::time::advance(Duration::from_secs(100)).await;
        let got = policy.remaining_time(start, 1);
        assert_eq!(got, Some(Duration::ZERO));
    }

    #[tokio::test(start_paused = true)]
    async fn limited_elapsed_time_remaining_inner_shorter() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .returning(|_, _| Some(Duration::from_secs(5)));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let start = tokio::time::Instant::now().into_std();
        let got = policy.remaining_time(start, 1);
        assert_eq!(got, Some(Duration::from_secs(5)));
    }

    #[test]
    fn extension_trait() {
        let policy = TransientErrors
            .with_attempt_limit(3)
            .with_time_limit(Duration::from_secs(60));
        let now = Instant::now();
        let got = policy.on_error(now, 1, false, http_error(503));
        assert!(got.is_continue(), "{got:?}");
        let got = policy.on_error(now, 3, false, http_error(503));
        assert!(got.is_exhausted(), "{got:?}");
        let got = policy.on_error(now, 1, false, http_error(404));
        assert!(got.is_permanent(), "{got:?}");
    }
}
