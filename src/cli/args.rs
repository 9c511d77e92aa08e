//! Shared CLI argument types

use chrono::{DateTime, Utc};

use crate::cli::Cli;
use arpio::config::Overrides;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format, one row per entry
    #[default]
    Table,
    /// JSON format, structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format name stored in the config file.
    pub fn from_preference(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag, then environment variable, then config file, then
/// default. This struct captures the CLI/env layer; the config file is merged
/// in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; falls back to the config preference
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.arpio/config.yaml)
    pub config: Option<String>,

    /// Connection overrides
    pub overrides: Overrides,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            overrides: Overrides {
                api_url: cli.api_url.clone(),
                account_id: cli.account_id.clone(),
                api_key_id: cli.api_key_id.clone(),
                api_key_secret: cli.api_key_secret.clone(),
            },
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

/// Parse an RFC 3339 timestamp argument.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp like 2024-05-01T12:00:00Z: {}", e))
}
