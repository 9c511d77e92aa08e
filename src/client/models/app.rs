//! Application models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SelectionRule, SyncPair};

/// Kind of Arpio application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    Standard,
    /// Managed by infrastructure-as-code
    #[default]
    Terraform,
}

impl AppType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Standard => "standard",
            AppType::Terraform => "terraform",
        }
    }
}

/// Application resource
///
/// `app_id` and `created_at` are assigned by the service on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub account_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    #[serde(rename = "type")]
    pub app_type: AppType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notification_emails: Vec<String>,

    /// Recovery point objective
    #[serde(default)]
    pub rpo: i64,

    pub source_aws_account_id: String,

    pub source_region: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_phase: Option<String>,

    pub target_aws_account_id: String,

    pub target_region: String,

    #[serde(default, with = "crate::codec::strict")]
    pub selection_rules: Vec<SelectionRule>,
}

impl App {
    /// A not-yet-created application in the given account.
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Self::default()
        }
    }

    /// Sync pair addressing this application's recovery points.
    pub fn sync_pair(&self) -> SyncPair {
        SyncPair::new(
            self.source_aws_account_id.clone(),
            self.source_region.clone(),
            self.target_aws_account_id.clone(),
            self.target_region.clone(),
        )
    }
}
