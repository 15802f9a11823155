//! Analytics Router

use axum::{Router, routing::get};
use std::sync::Arc;

use kernel::response::method_not_allowed;

use crate::application::TokenCache;
use crate::domain::upstream::AnalyticsUpstream;
use crate::presentation::handlers::{self, AnalyticsAppState};

/// Create the Analytics router for any upstream implementation
pub fn analytics_router<U>(upstream: U, cache: Arc<TokenCache>) -> Router
where
    U: AnalyticsUpstream + Send + Sync + 'static,
{
    let state = AnalyticsAppState {
        upstream: Arc::new(upstream),
        cache,
    };

    Router::new()
        .route(
            "/umami",
            get(handlers::umami_stats::<U>)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}
