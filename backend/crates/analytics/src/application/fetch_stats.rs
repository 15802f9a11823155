//! Fetch Stats Use Case
//!
//! Obtains a (possibly cached) token, confirms the upstream still accepts
//! it, then fetches stats for the requested window.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::token_cache::TokenCache;
use crate::domain::range::StatsRange;
use crate::domain::stats::UmamiStats;
use crate::domain::upstream::AnalyticsUpstream;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Fetch stats use case
pub struct FetchStatsUseCase<U>
where
    U: AnalyticsUpstream,
{
    upstream: Arc<U>,
    cache: Arc<TokenCache>,
}

impl<U> FetchStatsUseCase<U>
where
    U: AnalyticsUpstream,
{
    pub fn new(upstream: Arc<U>, cache: Arc<TokenCache>) -> Self {
        Self { upstream, cache }
    }

    pub async fn execute(&self, range: StatsRange) -> AnalyticsResult<UmamiStats> {
        self.execute_at(range, Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        range: StatsRange,
        now: DateTime<Utc>,
    ) -> AnalyticsResult<UmamiStats> {
        let token = self
            .cache
            .get_or_refresh_at(now, || self.upstream.login())
            .await?;

        if !self.upstream.verify(&token).await {
            self.cache.invalidate().await;
            return Err(AnalyticsError::TokenRejected);
        }

        let window = range.window(now);
        let stats = self.upstream.fetch_stats(&token, window).await?;

        tracing::debug!(
            ?range,
            start_at = window.start_at,
            end_at = window.end_at,
            pageviews = stats.pageviews.value,
            "Fetched analytics stats"
        );

        Ok(stats)
    }
}
