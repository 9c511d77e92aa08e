//! Recovery point models

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A restorable point-in-time copy of an application's resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryPoint {
    /// When the recovery point became restorable
    pub available_at: DateTime<Utc>,

    /// Protected recovery points are never garbage collected
    #[serde(default)]
    pub protected: bool,

    pub recovery_point_id: String,

    /// Logical event time of the recovery point
    pub timestamp: DateTime<Utc>,
}

/// Optional bounds on recovery point timestamps. `None` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimestampWindow {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| *timestamp >= start)
            && self.end.is_none_or(|end| *timestamp <= end)
    }

    /// Query parameters for the recovery point listing endpoint.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(start) = self.start {
            params.push(("timestampStart".to_string(), format_timestamp(&start)));
        }
        if let Some(end) = self.end {
            params.push(("timestampEnd".to_string(), format_timestamp(&end)));
        }
        params
    }
}

/// RFC 3339 with whole seconds, as the API expects in query strings.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Pick the recovery point with the greatest timestamp. On ties the
/// earliest-listed one wins.
pub fn latest_recovery_point(points: Vec<RecoveryPoint>) -> Option<RecoveryPoint> {
    let mut latest: Option<RecoveryPoint> = None;
    for point in points {
        let newer = match &latest {
            None => true,
            Some(current) => point.timestamp > current.timestamp,
        };
        if newer {
            latest = Some(point);
        }
    }
    latest
}
