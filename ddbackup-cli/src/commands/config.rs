//! config show / validate / generate

use anyhow::{anyhow, Context, Result};
use ddbackup_config::BackupConfig;
use std::fs;
use std::path::Path;
use tracing::{error, info};

use crate::settings::load_config;

/// Render the effective configuration with keys masked
pub fn render_config(config: &BackupConfig, format: &str) -> Result<String> {
    let redacted = config.redacted();

    match format.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml::to_string(&redacted).context("Failed to serialize to YAML"),
        "json" => serde_json::to_string_pretty(&redacted).context("Failed to serialize to JSON"),
        _ => Err(anyhow!(
            "Unknown output format: {}. Valid formats: yaml, json",
            format
        )),
    }
}

pub fn handle_config_show(config: &BackupConfig, format: &str) -> Result<()> {
    info!("Showing configuration (format: {})", format);
    println!("{}", render_config(config, format)?);
    Ok(())
}

pub fn handle_config_validate(config_file: &Path) -> Result<()> {
    info!("Validating configuration file: {:?}", config_file);

    match load_config(Some(config_file)) {
        Ok(_) => {
            println!("Configuration file is valid");
            info!("Configuration validation passed");
            Ok(())
        }
        Err(e) => {
            println!("Configuration validation failed: {:#}", e);
            error!("Configuration validation failed: {:#}", e);
            Err(e)
        }
    }
}

pub fn handle_config_generate(output: &Path, force: bool) -> Result<()> {
    info!("Generating sample configuration at: {:?}", output);

    if output.exists() && !force {
        return Err(anyhow!(
            "Output file already exists: {:?}. Use --force to overwrite.",
            output
        ));
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }

    fs::write(output, BackupConfig::generate_sample())
        .with_context(|| format!("Failed to write {:?}", output))?;

    println!("Sample configuration written to {:?}", output);
    Ok(())
}
