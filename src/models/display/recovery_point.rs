//! Recovery point display model

use serde::Serialize;
use tabled::Tabled;

use arpio::client::models::{RecoveryPoint, format_timestamp};

use super::common::check;

/// Recovery point display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RecoveryPointDisplay {
    #[tabled(rename = "RECOVERY POINT ID")]
    pub id: String,

    /// Point in time the data was captured
    #[tabled(rename = "TIMESTAMP")]
    pub timestamp: String,

    /// When the point became usable for recovery
    #[tabled(rename = "AVAILABLE AT")]
    pub available_at: String,

    #[tabled(rename = "PROTECTED")]
    #[serde(skip)]
    pub protected_mark: String,

    #[tabled(skip)]
    pub protected: bool,
}

impl From<&RecoveryPoint> for RecoveryPointDisplay {
    fn from(rp: &RecoveryPoint) -> Self {
        Self {
            id: rp.recovery_point_id.clone(),
            timestamp: format_timestamp(&rp.timestamp),
            available_at: format_timestamp(&rp.available_at),
            protected_mark: check(rp.protected),
            protected: rp.protected,
        }
    }
}
