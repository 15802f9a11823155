//! Website statistics as reported by Umami

use serde::{Deserialize, Serialize};

/// Current and previous-period value of one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metric {
    pub value: i64,
    #[serde(default)]
    pub prev: i64,
}

/// Website summary returned by `/api/websites/{id}/stats`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UmamiStats {
    pub pageviews: Metric,
    pub visitors: Metric,
    pub visits: Metric,
    pub bounces: Metric,
    pub totaltime: Metric,
}
