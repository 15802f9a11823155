//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

/// GET /umami query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    /// `day`, `week`, `month`, `year` or `all`
    pub range: Option<String>,
}
