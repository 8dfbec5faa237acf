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

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::error::Error;
use super::retry_policy::RetryPolicy;
use super::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

enum RetryLoopAttempt {
    // The first attempt
    Initial,
    // (Attempt count, backoff delay, previous error)
    Retry(u32, Duration, Error),
}

impl RetryLoopAttempt {
    fn count(&self) -> u32 {
        match self {
            RetryLoopAttempt::Initial => 0,
            RetryLoopAttempt::Retry(count, _, _) => *count,
        }
    }
}

/// Runs the retry loop for a given function.
///
/// This functions calls an inner function as long as (1) the retry policy has
/// not expired, and (2) the inner function has not returned a successful
/// request, and (3) the retry policy considers the errors retryable.
///
/// Between attempts the loop sleeps for the delay computed by the backoff
/// policy from the last error.
pub async fn retry_loop<F, S, Response>(
    inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    retry_loop_with_callback(
        inner,
        sleep,
        idempotent,
        retry_policy,
        backoff_policy,
        |_, _, _| {},
    )
    .await
}

/// Runs the retry loop, calling `on_retry` before each retry attempt.
pub async fn retry_loop_with_callback<F, S, OnRetry, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    mut on_retry: OnRetry,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
    OnRetry: FnMut(u32, &Error, Duration) + Send,
{
    let loop_start = tokio::time::Instant::now().into_std();
    let mut attempt_state = RetryLoopAttempt::Initial;
    loop {
        let mut attempt_count = attempt_state.count();
        let remaining_time = retry_policy.remaining_time(loop_start, attempt_count);

        if let RetryLoopAttempt::Retry(attempt_count, delay, prev_error) = attempt_state {
            if remaining_time.is_some_and(|remaining| remaining < delay) {
                return Err(Error::exhausted(prev_error));
            }
            tracing::warn!(
                attempt_count,
                ?delay,
                error = %prev_error,
                "retrying request after transient error"
            );
            on_retry(attempt_count, &prev_error, delay);
            sleep(delay).await;
        }
        attempt_count += 1;
        match inner(remaining_time).await {
            Ok(r) => return Ok(r),
            Err(e) => match retry_policy.on_error(loop_start, attempt_count, idempotent, e) {
                RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
                RetryResult::Continue(e) => {
                    let delay = backoff_policy.on_failure(loop_start, attempt_count, &e);
                    attempt_state = RetryLoopAttempt::Retry(attempt_count, delay, e);
                }
            },
        };
    }
}

/// Computes the timeout for the next attempt.
///
/// This is the smaller of the attempt timeout in the request options, and the
/// remaining time in the retry policy.
pub fn effective_timeout(
    options: &crate::options::RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (options.attempt_timeout(), remaining_time) {
        (None, None) => None,
        (None, Some(t)) => Some(t),
        (Some(t), None) => Some(*t),
        (Some(a), Some(r)) => Some(*std::cmp::min(a, &r)),
    }
}
