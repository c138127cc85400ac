//! Effective configuration: file, then `DDBACKUP_*` env, then CLI flags

use anyhow::{bail, Context, Result};
use ddbackup_config::{BackupConfig, ConfigLoader, Validatable};
use ddbackup_sync::SyncOptions;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::Cli;

/// Load the configuration file (if any) with environment overrides applied.
///
/// Runs before tracing is installed, so an explicit path that does not
/// exist is an error rather than a logged fallback.
pub fn load_config(config_path: Option<&Path>) -> Result<BackupConfig> {
    let loader = ConfigLoader::new();

    match config_path {
        Some(path) => {
            if !path.exists() {
                bail!("Configuration file not found: {:?}", path);
            }
            info!("Loading configuration from: {:?}", path);
            loader
                .from_file(path)
                .with_context(|| format!("Failed to load configuration from {:?}", path))
        }
        None => {
            debug!("No configuration file specified. Loading from environment or defaults.");
            loader
                .from_env()
                .context("Failed to load configuration from environment")
        }
    }
}

/// Apply command line flags on top of `config` and re-validate
pub fn apply_cli_overrides(mut config: BackupConfig, cli: &Cli) -> Result<BackupConfig> {
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(key) = &cli.api_key {
        config.api.api_key = Some(key.clone());
    }
    if let Some(key) = &cli.app_key {
        config.api.app_key = Some(key.clone());
    }
    if let Some(level) = &cli.log_level {
        // Filter directives like `ddbackup_sync=debug` are left to the subscriber
        if let Ok(level) = level.parse() {
            config.logging.level = level;
        }
    }
    if let Some(dir) = &cli.config_dir {
        config.sync.config_dir = dir.clone();
    }
    if let Some(dir) = &cli.backup_dir {
        config.sync.backup_dir = dir.clone();
    }
    if cli.no_backup {
        config.sync.backup = false;
    }

    config
        .validate_all()
        .context("Invalid configuration after applying command line flags")?;
    Ok(config)
}

/// Engine options for one run
pub fn sync_options(config: &BackupConfig, dry_run: bool, override_remote: bool) -> SyncOptions {
    SyncOptions {
        override_remote,
        dry_run,
        do_backup: config.sync.backup,
        config_dir: config.sync.config_dir.clone(),
        backup_dir: config.sync.backup_dir.clone(),
    }
}
