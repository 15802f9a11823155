//! HTTP Handlers

use axum::extract::{Query, State};
use std::sync::Arc;

use kernel::response::Envelope;

use crate::application::{FetchStatsUseCase, TokenCache};
use crate::domain::range::StatsRange;
use crate::domain::stats::UmamiStats;
use crate::domain::upstream::AnalyticsUpstream;
use crate::error::AnalyticsResult;
use crate::presentation::dto::StatsQuery;

/// Shared state for analytics handlers
pub struct AnalyticsAppState<U>
where
    U: AnalyticsUpstream + Send + Sync + 'static,
{
    pub upstream: Arc<U>,
    pub cache: Arc<TokenCache>,
}

impl<U> Clone for AnalyticsAppState<U>
where
    U: AnalyticsUpstream + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            cache: self.cache.clone(),
        }
    }
}

/// GET /api/umami
pub async fn umami_stats<U>(
    State(state): State<AnalyticsAppState<U>>,
    Query(query): Query<StatsQuery>,
) -> AnalyticsResult<Envelope<UmamiStats>>
where
    U: AnalyticsUpstream + Send + Sync + 'static,
{
    let range = StatsRange::from_query(query.range.as_deref());

    let use_case = FetchStatsUseCase::new(state.upstream.clone(), state.cache.clone());
    let stats = use_case.execute(range).await?;

    Ok(Envelope::ok(stats))
}
