//! Domain Layer

pub mod range;
pub mod stats;
pub mod upstream;

pub use range::{StatsRange, TimeRange};
pub use stats::{Metric, UmamiStats};
pub use upstream::{AnalyticsUpstream, LocalAnalyticsUpstream};
