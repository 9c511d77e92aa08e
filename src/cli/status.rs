//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use arpio::Result;
use arpio::client::ARPIO_API_URL;
use arpio::config::Config;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Arpio Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            Config::default()
        }
    };
    config.apply(&opts.overrides);

    println!();

    match config.account_id.as_deref() {
        Some(account_id) => println!("{} Account: {}", "✓".green(), account_id),
        None => println!("{} Account ID not configured", "✗".red()),
    }

    let key_configured = config.api_key_id.is_some() && config.api_key_secret.is_some();
    if key_configured {
        println!(
            "{} API key configured ({})",
            "✓".green(),
            config.api_key_id.as_deref().unwrap_or_default()
        );
    } else {
        println!("{} API key not configured", "✗".red());
    }

    if config.api_url() != ARPIO_API_URL {
        println!("{} Custom API URL: {}", "○".dimmed(), config.api_url().cyan());
    }

    if config.client_settings().is_err() {
        println!();
        println!("Run {} to finish configuration.", "arpio init".cyan());
    }

    println!();
    Ok(())
}
