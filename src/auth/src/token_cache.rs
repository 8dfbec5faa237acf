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

use crate::Result;
use crate::credentials::{CacheableResource, EntityTag};
use crate::errors::CredentialsError;
use crate::token::{CachedTokenProvider, Token, TokenProvider};
use http::Extensions;
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    // The cached token and its entity tag, or the last seen error.
    token: Arc<Mutex<Result<(Token, EntityTag)>>>,

    // Tracks if a refresh is ongoing. If the lock is held, there is a refresh.
    refresh_in_progress: Arc<Mutex<()>>,
    // Allows us to await the result of a refresh in multiple tasks.
    refresh_notify: Arc<Notify>,

    // The token provider. This thing does the refreshing.
    inner: Arc<T>,
}

// Returns true if we are holding an error, or a token that needs a refresh.
fn invalid(token: &Result<(Token, EntityTag)>) -> bool {
    match token {
        Ok((t, _)) => t.needs_refresh(),
        Err(_) => true,
    }
}

// Only the `Arc<T>` is cloned, so `T` does not need to be `Clone`.
impl<T: TokenProvider> Clone for TokenCache<T> {
    fn clone(&self) -> TokenCache<T> {
        TokenCache {
            token: self.token.clone(),
            refresh_in_progress: self.refresh_in_progress.clone(),
            refresh_notify: self.refresh_notify.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T: TokenProvider> TokenCache<T> {
    pub(crate) fn new(inner: T) -> TokenCache<T> {
        TokenCache {
            token: Arc::new(Mutex::new(Err(CredentialsError::from_msg(
                true,
                "no token in the cache, the first refresh has not completed",
            )))),
            refresh_in_progress: Arc::new(Mutex::new(())),
            refresh_notify: Arc::new(Notify::new()),
            inner: Arc::new(inner),
        }
    }

    // Clones the current token, in a thread-safe manner. Releases the lock on return.
    async fn current_token(&self) -> Result<(Token, EntityTag)> {
        self.token.lock().await.clone()
    }

    async fn valid_token(&self) -> Result<(Token, EntityTag)> {
        let token = self.current_token().await;
        if !invalid(&token) {
            return token;
        }

        // Register interest before checking for a refresh, a refresh that
        // completes in between must still wake us up.
        let mut notified = std::pin::pin!(self.refresh_notify.notified());
        notified.as_mut().enable();

        match self.refresh_in_progress.try_lock() {
            Ok(guard) => {
                // No refreshes. We should start one.
                let token = self.inner.token().await.map(|t| (t, EntityTag::new()));
                if let Err(e) = &token {
                    tracing::debug!("token refresh failed: {e}");
                }

                // Store the token, or an updated error.
                *self.token.lock().await = token.clone();

                // The refresh is complete. Release the refresh guard.
                drop(guard);

                // Notify any and all waiters.
                self.refresh_notify.notify_waiters();

                // Return here without asking for the token lock again.
                return token;
            }
            Err(_) => {
                // There is already a refresh. We will await its result.
                notified.await;
            }
        }

        // The refresh operation has completed. We should have a new
        // error/token. Return it.
        self.current_token().await
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + 'static> CachedTokenProvider for TokenCache<T> {
    async fn token(&self, extensions: Extensions) -> Result<CacheableResource<Token>> {
        let (token, entity_tag) = self.valid_token().await?;
        match extensions.get::<EntityTag>() {
            Some(tag) if *tag == entity_tag => Ok(CacheableResource::NotModified),
            _ => Ok(CacheableResource::New {
                entity_tag,
                data: token,
            }),
        }
    }
}
