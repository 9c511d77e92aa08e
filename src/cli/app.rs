//! Application management commands

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::cli::context::{wait_policy, wait_spinner};
use crate::cli::{CommandContext, GlobalOptions};
use crate::models::AppDisplay;
use crate::output;
use arpio::client::{APP_POLL_PERIOD, App};
use arpio::{ApiError, AppApi, Result};

/// Run the app list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let apps = ctx.client.list_apps().await?;
    log::debug!("Fetched {} apps", apps.len());

    let display: Vec<AppDisplay> = apps.iter().map(AppDisplay::from).collect();
    output::print(&display, ctx.format)
}

/// Run the app get command
pub async fn get(opts: &GlobalOptions, app_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let app = ctx
        .client
        .get_app(app_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Application {} not found", app_id)))?;

    print_app(&app, &ctx)
}

/// Run the app find command, optionally waiting for the app to appear
pub async fn find(opts: &GlobalOptions, name: &str, wait: u64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let policy = wait_policy(wait, APP_POLL_PERIOD);

    let spinner = wait_spinner(&policy, format!("Waiting for app {:?}", name));
    let result = ctx.client.must_get_app_by_name(name, policy).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    print_app(&result?, &ctx)
}

/// Run the app create command
pub async fn create(opts: &GlobalOptions, file: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut app = read_app(file)?;
    if app.account_id.is_empty() {
        app.account_id = ctx.client.account_id().to_string();
    }

    let created = ctx.client.create_app(&app).await?;
    eprintln!(
        "{} Created application {}",
        "✓".green(),
        created.app_id.as_deref().unwrap_or_default().bold()
    );

    print_app(&created, &ctx)
}

/// Run the app update command
pub async fn update(opts: &GlobalOptions, file: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let app = read_app(file)?;
    let updated = ctx.client.update_app(&app).await?;
    eprintln!("{} Updated application {}", "✓".green(), updated.name.bold());

    print_app(&updated, &ctx)
}

/// Run the app delete command
pub async fn delete(opts: &GlobalOptions, app_id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete application {}?", app_id))
            .default(false)
            .interact()?;

        if !confirmed {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    ctx.client.delete_app(app_id).await?;
    eprintln!("{} Deleted application {}", "✓".green(), app_id.bold());

    Ok(())
}

fn print_app(app: &App, ctx: &CommandContext) -> Result<()> {
    output::print(&vec![AppDisplay::from(app)], ctx.format)
}

/// Read an application definition from a JSON file.
fn read_app(path: &str) -> Result<App> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
