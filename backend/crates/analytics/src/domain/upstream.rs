//! Upstream Trait
//!
//! The Umami API as seen by the use case. Implementation is in the
//! infrastructure layer.

use crate::domain::range::TimeRange;
use crate::domain::stats::UmamiStats;
use crate::error::AnalyticsResult;

/// Analytics upstream trait
#[trait_variant::make(AnalyticsUpstream: Send)]
pub trait LocalAnalyticsUpstream {
    /// Exchange the configured credentials for a bearer token
    async fn login(&self) -> AnalyticsResult<String>;

    /// Whether the upstream still accepts `token` (transport errors count as no)
    async fn verify(&self, token: &str) -> bool;

    /// Website stats for `range`
    async fn fetch_stats(&self, token: &str, range: TimeRange) -> AnalyticsResult<UmamiStats>;
}
