//! tracing-subscriber setup

use anyhow::{anyhow, Result};
use ddbackup_config::{LogFormat, LoggingConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Pick the filter: `--log-level`, then `RUST_LOG`, then the configured level
pub fn build_filter(cli_level: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    match cli_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| {
            eprintln!("Invalid log level '{}', falling back to 'info'", level);
            EnvFilter::new("info")
        }),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.as_str())),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for
/// `config show`.
pub fn init_tracing(cli_level: Option<&str>, config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(cli_level, config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    debug!("Tracing initialized ({:?} format)", config.format);
    Ok(())
}
