//! Upstream bearer token cache
//!
//! Holds at most one token. Concurrent refreshes may both log in; the last
//! one stored wins, which is harmless.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::AnalyticsResult;

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Single-slot token cache with a fixed TTL
#[derive(Debug)]
pub struct TokenCache {
    ttl: Duration,
    slot: RwLock<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> AnalyticsResult<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AnalyticsResult<String>>,
    {
        self.get_or_refresh_at(Utc::now(), refresh).await
    }

    /// Cached token if still valid at `now`, otherwise the result of `refresh`
    ///
    /// A failed refresh leaves the cache empty.
    pub async fn get_or_refresh_at<F, Fut>(
        &self,
        now: DateTime<Utc>,
        refresh: F,
    ) -> AnalyticsResult<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AnalyticsResult<String>>,
    {
        if let Some(cached) = self.slot.read().await.as_ref() {
            if now < cached.expires_at {
                return Ok(cached.token.clone());
            }
        }

        let token = refresh().await?;
        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::hours(1));

        *self.slot.write().await = Some(CachedToken {
            token: token.clone(),
            expires_at: now + ttl,
        });
        tracing::debug!("Cached new upstream token");

        Ok(token)
    }

    /// Drop the cached token
    pub async fn invalidate(&self) {
        *self.slot.write().await = None;
    }

    /// Whether a token valid at `now` is cached
    pub async fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.slot
            .read()
            .await
            .as_ref()
            .is_some_and(|c| now < c.expires_at)
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(60 * 60))
    }
}
