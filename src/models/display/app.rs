//! Application display model

use serde::Serialize;
use tabled::Tabled;

use arpio::client::models::App;

/// Application display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AppDisplay {
    /// Application ID
    #[tabled(rename = "APP ID")]
    pub id: String,

    /// Application name
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "TYPE")]
    #[serde(rename = "type")]
    pub app_type: String,

    /// Source and target account/region
    #[tabled(rename = "SYNC PAIR")]
    pub sync_pair: String,

    /// Recovery point objective, minutes
    #[tabled(rename = "RPO")]
    pub rpo: i64,

    #[tabled(rename = "RULES")]
    pub rules: usize,
}

impl From<&App> for AppDisplay {
    fn from(app: &App) -> Self {
        Self {
            id: app.app_id.clone().unwrap_or_default(),
            name: app.name.clone(),
            app_type: app.app_type.as_str().to_string(),
            sync_pair: app.sync_pair().to_string(),
            rpo: app.rpo,
            rules: app.selection_rules.len(),
        }
    }
}
