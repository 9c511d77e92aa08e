//! Recovery point commands

use colored::Colorize;

use crate::cli::context::{wait_policy, wait_spinner};
use crate::cli::{CommandContext, GlobalOptions, WindowArgs};
use crate::models::{RecoveryPointDisplay, StagedResourceDisplay};
use crate::output;
use arpio::client::{RECOVERY_POINT_POLL_PERIOD, RecoveryPoint, SyncPair, TimestampWindow};
use arpio::{ApiError, RecoveryPointApi, Result};

impl From<&WindowArgs> for TimestampWindow {
    fn from(args: &WindowArgs) -> Self {
        TimestampWindow::new(args.start, args.end)
    }
}

/// Run the rp list command
pub async fn list(opts: &GlobalOptions, app: &str, window: &WindowArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let sync_pair = ctx.require_app(app).await?.sync_pair();

    let points = ctx
        .client
        .list_recovery_points(&sync_pair, &window.into())
        .await?;
    log::debug!("Fetched {} recovery points for {}", points.len(), sync_pair);

    let display: Vec<RecoveryPointDisplay> =
        points.iter().map(RecoveryPointDisplay::from).collect();
    output::print(&display, ctx.format)
}

/// Run the rp get command
pub async fn get(opts: &GlobalOptions, app: &str, recovery_point_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let sync_pair = ctx.require_app(app).await?.sync_pair();

    let point = require_recovery_point(&ctx, &sync_pair, recovery_point_id).await?;
    print_recovery_point(&point, &ctx)
}

/// Run the rp latest command, optionally waiting for a recovery point
pub async fn latest(opts: &GlobalOptions, app: &str, window: &WindowArgs, wait: u64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let sync_pair = ctx.require_app(app).await?.sync_pair();
    let policy = wait_policy(wait, RECOVERY_POINT_POLL_PERIOD);

    let spinner = wait_spinner(&policy, format!("Waiting for a recovery point of {:?}", app));
    let result = ctx
        .client
        .must_find_latest_recovery_point(&sync_pair, &window.into(), policy)
        .await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    print_recovery_point(&result?, &ctx)
}

/// Run the rp protect command
pub async fn protect(opts: &GlobalOptions, app: &str, recovery_point_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let sync_pair = ctx.require_app(app).await?.sync_pair();

    let point = require_recovery_point(&ctx, &sync_pair, recovery_point_id).await?;
    if point.protected {
        eprintln!(
            "{} Recovery point {} is already protected",
            "○".dimmed(),
            recovery_point_id
        );
    }

    let protected = ctx.client.protect_recovery_point(&sync_pair, &point).await?;
    if !point.protected {
        eprintln!(
            "{} Protected recovery point {}",
            "✓".green(),
            recovery_point_id.bold()
        );
    }

    print_recovery_point(&protected, &ctx)
}

/// Run the rp resources command
pub async fn resources(opts: &GlobalOptions, app: &str, recovery_point_id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let sync_pair = ctx.require_app(app).await?.sync_pair();

    let resources = ctx
        .client
        .list_recovery_point_resources(&sync_pair, recovery_point_id)
        .await?;
    log::debug!(
        "Recovery point {} has {} staged resources",
        recovery_point_id,
        resources.len()
    );

    let display: Vec<StagedResourceDisplay> =
        resources.iter().map(StagedResourceDisplay::from).collect();
    output::print(&display, ctx.format)
}

async fn require_recovery_point(
    ctx: &CommandContext,
    sync_pair: &SyncPair,
    recovery_point_id: &str,
) -> Result<RecoveryPoint> {
    ctx.client
        .get_recovery_point(sync_pair, recovery_point_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Recovery point {} not found", recovery_point_id)).into()
        })
}

fn print_recovery_point(point: &RecoveryPoint, ctx: &CommandContext) -> Result<()> {
    output::print(&vec![RecoveryPointDisplay::from(point)], ctx.format)
}
