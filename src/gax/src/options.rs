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

//! Per request options.
//!
//! While the client defaults are intended to work for most applications, it
//! is sometimes necessary to customize the behavior of some calls made via a
//! client. Applications sometimes set a deadline for a specific call, cancel
//! a call from another task, or change the retry configuration. The request
//! builder returned by each client method implements the
//! [RequestOptionsBuilder] trait where applications can override some
//! defaults.
//!
//! # Example
//! ```
//! # use ibm_cloud_gax::options::*;
//! # use ibm_cloud_gax::options::internal::RequestBuilder;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! # #[derive(Default)] struct ListApiKeys { options: RequestOptions }
//! # impl RequestBuilder for ListApiKeys {
//! #     fn request_options(&mut self) -> &mut RequestOptions { &mut self.options }
//! # }
//! let token = CancellationToken::new();
//! let builder = ListApiKeys::default()
//!     .with_timeout(Duration::from_secs(30))
//!     .with_cancellation(token.clone());
//! // Calling `token.cancel()` from another task stops the request.
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl RequestOptions {
    /// Gets the idempotency
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the request as idempotent.
    ///
    /// The default retry policy ignores this value, custom retry policies may
    /// use it.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt. The
    /// overall timeout for a request is set by [set_timeout][Self::set_timeout].
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Sets the overall deadline for the request, including all retry
    /// attempts and the backoff between them.
    ///
    /// When the deadline elapses the request returns an error where
    /// [is_timeout()][crate::error::Error::is_timeout] is `true`, even if the
    /// service has not responded yet.
    pub fn set_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.timeout = Some(v.into());
    }

    /// Gets the overall deadline for the request.
    pub fn timeout(&self) -> &Option<Duration> {
        &self.timeout
    }

    /// Sets a token to cancel the request.
    ///
    /// Once the token is cancelled the request returns an error where
    /// [is_cancelled()][crate::error::Error::is_cancelled] is `true`, and no
    /// further attempts are made.
    pub fn set_cancellation(&mut self, v: CancellationToken) {
        self.cancellation = Some(v);
    }

    /// Gets the cancellation token, if any.
    pub fn cancellation(&self) -> &Option<CancellationToken> {
        &self.cancellation
    }

    /// Get the current retry policy override, if any.
    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Sets the retry policy configuration.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    /// Get the current backoff policy override, if any.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The IBM Cloud Client Libraries for Rust provide a builder for each
/// request. These builders can be used to set the request parameters, e.g.,
/// the account id of the API keys, and also to configure the request options.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the request as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the overall deadline for the request.
    fn with_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets a token to cancel the request.
    fn with_cancellation(self, v: CancellationToken) -> Self;

    /// Sets the retry policy configuration.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_timeout(v);
        self
    }

    fn with_cancellation(mut self, v: CancellationToken) -> Self {
        self.request_options().set_cancellation(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }
}
