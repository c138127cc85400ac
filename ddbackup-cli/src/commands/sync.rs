//! pull / push / delete

use anyhow::{Context, Result};
use ddbackup_config::BackupConfig;
use ddbackup_http::DatadogClient;
use ddbackup_sync::{default_adapters, SyncEngine, SyncOptions, SyncReport};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Pull,
    Push { skip_pull: bool },
    Delete,
}

impl SyncAction {
    fn label(&self) -> &'static str {
        match self {
            SyncAction::Pull => "pull",
            SyncAction::Push { .. } => "push",
            SyncAction::Delete => "delete",
        }
    }
}

/// Wire config, client, adapters and engine together.
///
/// Fails before any remote call when keys or directories are missing, or
/// when `kinds` names an unknown kind.
pub fn build_engine(
    config: &BackupConfig,
    options: SyncOptions,
    kinds: &[String],
) -> Result<SyncEngine> {
    let client = DatadogClient::from_config(config).context("Failed to create API client")?;
    let mut engine = SyncEngine::new(options, default_adapters(Arc::new(client)))
        .context("Failed to set up sync engine")?;
    engine
        .retain_kinds(kinds)
        .context("Failed to select kinds")?;
    Ok(engine)
}

pub async fn execute(engine: &SyncEngine, action: SyncAction) -> Result<SyncReport> {
    info!(
        "Starting {} for {}{}",
        action.label(),
        engine.kinds().join(", "),
        if engine.options().dry_run {
            " (dry run)"
        } else {
            ""
        }
    );

    let report = match action {
        SyncAction::Pull => engine.pull_all().await,
        SyncAction::Push { skip_pull: true } => engine.push_all().await,
        SyncAction::Push { skip_pull: false } => engine.push_then_pull().await,
        SyncAction::Delete => engine.delete_all().await,
    }
    .with_context(|| format!("{} failed", action.label()))?;

    info!("Finished {}: {}", action.label(), report);
    Ok(report)
}

pub async fn handle_sync(
    config: &BackupConfig,
    options: SyncOptions,
    kinds: &[String],
    action: SyncAction,
) -> Result<()> {
    let engine = build_engine(config, options, kinds)?;
    let report = execute(&engine, action).await?;
    println!("{}: {}", action.label(), report);
    Ok(())
}
