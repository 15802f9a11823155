//! Analytics Backend Module
//!
//! Read-only proxy to a self-hosted Umami server.
//!
//! Clean Architecture structure:
//! - `domain/` - Stats payload, reporting windows, upstream trait
//! - `application/` - Fetch use case, token cache, config
//! - `infra/` - reqwest-based Umami client
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! The upstream bearer token is cached for an hour and dropped as soon as
//! the upstream stops accepting it.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AnalyticsConfig, TokenCache};
pub use domain::{StatsRange, UmamiStats};
pub use error::{AnalyticsError, AnalyticsResult};
pub use infra::UmamiClient;
pub use presentation::router::analytics_router;
