//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use arpio::client::ArpioClient;
use arpio::config::Config;
use arpio::{AppApi, Result};

/// Run the init command
///
/// Prompts for the account and API key, checks them by listing applications,
/// then writes the config file. Values already set on the command line or in
/// the environment are offered as defaults.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to the Arpio CLI!".bold().green());
    println!("Let's set up your Arpio configuration.\n");

    let mut config = Config::load_or_default(opts.config_ref())?;
    config.apply(&opts.overrides);
    let theme = ColorfulTheme::default();

    let account_id: String = prompt_with_default(
        &theme,
        "Arpio account ID",
        config.account_id.as_deref(),
    )?;
    let api_key_id: String =
        prompt_with_default(&theme, "API key ID", config.api_key_id.as_deref())?;
    let api_key_secret: String = Password::with_theme(&theme)
        .with_prompt("API key secret")
        .interact()?;

    config.account_id = Some(account_id);
    config.api_key_id = Some(api_key_id);
    config.api_key_secret = Some(api_key_secret);

    println!("\n{}", "Checking credentials...".cyan());
    let client = ArpioClient::new(&config.client_settings()?)?;
    let apps = client.list_apps().await?;
    println!(
        "{} Connected. Found {} application(s).",
        "✓".green(),
        apps.len()
    );

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "arpio status".cyan());
    println!("  {} - List applications", "arpio app list".cyan());

    Ok(())
}

fn prompt_with_default(theme: &ColorfulTheme, prompt: &str, current: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(prompt);
    if let Some(current) = current {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}
