//! CLI command definitions and handlers

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod app;
pub mod args;
pub mod context;
pub mod init;
pub mod recovery_point;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use args::parse_timestamp;

/// Arpio CLI - manage disaster recovery applications and recovery points
#[derive(Parser, Debug)]
#[command(name = "arpio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, global = true, env = "ARPIO_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "ARPIO_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the Arpio API URL
    #[arg(long, global = true, env = "ARPIO_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override the Arpio account ID
    #[arg(long, global = true, env = "ARPIO_ACCOUNT_ID", hide_env = true)]
    pub account_id: Option<String>,

    /// Override the API key ID
    #[arg(long, global = true, env = "ARPIO_API_KEY_ID", hide_env = true)]
    pub api_key_id: Option<String>,

    /// Override the API key secret
    #[arg(
        long,
        global = true,
        env = "ARPIO_API_KEY_SECRET",
        hide_env_values = true
    )]
    pub api_key_secret: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ARPIO_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Arpio configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Manage applications
    #[command(subcommand)]
    App(AppCommands),

    /// Inspect and protect recovery points
    #[command(subcommand)]
    #[command(visible_alias = "recovery-point")]
    Rp(RecoveryPointCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   arpio completion bash > /etc/bash_completion.d/arpio
  zsh:    arpio completion zsh > \"${fpath[1]}/_arpio\"
  fish:   arpio completion fish > ~/.config/fish/completions/arpio.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Application management subcommands
#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// List all applications in the account
    List,

    /// Show an application by ID
    Get {
        /// Application ID
        app_id: String,
    },

    /// Find the application with a given name
    Find {
        /// Application name (exact match)
        name: String,

        /// Keep looking for this many seconds until the app exists
        #[arg(long, default_value_t = 0)]
        wait: u64,
    },

    /// Create an application from a JSON file
    Create {
        /// Path to the application JSON
        #[arg(long, short = 'f')]
        file: String,
    },

    /// Update an application from a JSON file (must include appId)
    Update {
        /// Path to the application JSON
        #[arg(long, short = 'f')]
        file: String,
    },

    /// Delete an application
    Delete {
        /// Application ID
        app_id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Recovery point subcommands
///
/// Every command names the application whose sync pair the recovery points
/// belong to.
#[derive(Subcommand, Debug)]
pub enum RecoveryPointCommands {
    /// List recovery points for an application
    List {
        /// Application name
        #[arg(long)]
        app: String,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Show a recovery point
    Get {
        /// Application name
        #[arg(long)]
        app: String,

        /// Recovery point ID
        recovery_point_id: String,
    },

    /// Show the most recent recovery point in a time window
    Latest {
        /// Application name
        #[arg(long)]
        app: String,

        #[command(flatten)]
        window: WindowArgs,

        /// Keep looking for this many seconds until one exists
        #[arg(long, default_value_t = 0)]
        wait: u64,
    },

    /// Protect a recovery point from expiry
    Protect {
        /// Application name
        #[arg(long)]
        app: String,

        /// Recovery point ID
        recovery_point_id: String,
    },

    /// List the resources staged in a recovery point
    Resources {
        /// Application name
        #[arg(long)]
        app: String,

        /// Recovery point ID
        recovery_point_id: String,
    },
}

/// Optional timestamp bounds, both inclusive
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WindowArgs {
    /// Earliest recovery point timestamp (RFC 3339)
    #[arg(long, value_parser = parse_timestamp)]
    pub start: Option<DateTime<Utc>>,

    /// Latest recovery point timestamp (RFC 3339)
    #[arg(long, value_parser = parse_timestamp)]
    pub end: Option<DateTime<Utc>>,
}
