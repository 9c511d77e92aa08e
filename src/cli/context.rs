//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, credential validation, and client initialization.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{GlobalOptions, OutputFormat};
use arpio::client::{App, ArpioClient, PollPolicy};
use arpio::config::Config;
use arpio::{AppApi, Result};

/// Context for command execution containing the client and output options.
pub struct CommandContext {
    /// API client scoped to the configured account
    pub client: ArpioClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is fine as long as the overrides supply every
    /// required field.
    ///
    /// # Errors
    /// Returns error if the config file cannot be parsed or a required
    /// connection field is missing.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_or_default(opts.config_ref())?;
        config.apply(&opts.overrides);

        let settings = config.client_settings()?;
        let client = ArpioClient::new(&settings)?;

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_preference)
            })
            .unwrap_or_default();

        log::debug!(
            "Using account {} at {}",
            settings.account_id,
            settings.api_url
        );

        Ok(Self { client, format })
    }

    /// Look up an app by name once; a missing app is an error.
    pub async fn require_app(&self, name: &str) -> Result<App> {
        self.client.must_get_app_by_name(name, PollPolicy::once()).await
    }
}

/// Poll policy for a `--wait <SECONDS>` flag.
pub fn wait_policy(seconds: u64, interval: Duration) -> PollPolicy {
    PollPolicy::with_timeout(Duration::from_secs(seconds)).interval(interval)
}

/// Spinner shown on stderr while waiting for a resource to appear.
///
/// Returns `None` for a single attempt so nothing flickers.
pub fn wait_spinner(policy: &PollPolicy, message: String) -> Option<ProgressBar> {
    if policy.is_single_attempt() {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    Some(spinner)
}
