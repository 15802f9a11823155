//! Reporting windows

use chrono::{DateTime, Duration, Utc};

/// Named window ending now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsRange {
    Day,
    Week,
    Month,
    Year,
    /// Since the Unix epoch
    #[default]
    All,
}

impl StatsRange {
    /// Absent means `All`; an unrecognised name falls back to `Month`
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => StatsRange::All,
            Some("day") => StatsRange::Day,
            Some("week") => StatsRange::Week,
            Some("month") => StatsRange::Month,
            Some("year") => StatsRange::Year,
            Some("all") => StatsRange::All,
            Some(other) => {
                tracing::debug!(range = other, "Unknown stats range; using month");
                StatsRange::Month
            }
        }
    }

    /// Millisecond window ending at `now`
    pub fn window(&self, now: DateTime<Utc>) -> TimeRange {
        let end_at = now.timestamp_millis();
        let start_at = match self {
            StatsRange::Day => end_at - Duration::days(1).num_milliseconds(),
            StatsRange::Week => end_at - Duration::days(7).num_milliseconds(),
            StatsRange::Month => end_at - Duration::days(30).num_milliseconds(),
            StatsRange::Year => end_at - Duration::days(365).num_milliseconds(),
            StatsRange::All => 0,
        };
        TimeRange { start_at, end_at }
    }
}

/// Query window in Unix milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start_at: i64,
    pub end_at: i64,
}
