//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod fetch_stats;
pub mod token_cache;

// Re-exports
pub use config::AnalyticsConfig;
pub use fetch_stats::FetchStatsUseCase;
pub use token_cache::TokenCache;
