//! CLI argument parsing definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ddbackup", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Set the log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Log every decision but change nothing locally or remotely
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Do not back up kind files before a pull overwrites them
    #[arg(long, global = true)]
    pub no_backup: bool,

    /// Directory holding the per-kind YAML files
    #[arg(long, value_name = "PATH", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Directory receiving timestamped backups
    #[arg(long, value_name = "PATH", global = true)]
    pub backup_dir: Option<PathBuf>,

    /// Restrict the run to a kind (monitors, dashboards, downtimes); repeatable
    #[arg(long = "kind", value_name = "KIND", global = true)]
    pub kinds: Vec<String>,

    /// API key
    #[arg(long, env = "DD_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Application key
    #[arg(long, env = "DD_APP_KEY", hide_env_values = true, global = true)]
    pub app_key: Option<String>,

    /// Base URL of the REST API
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Overwrite local files with what exists remotely
    Pull,

    /// Create local elements that do not exist remotely, then pull
    Push {
        /// Replace remote objects that share an id with a local element
        #[arg(long)]
        override_remote: bool,

        /// Do not pull after pushing
        #[arg(long)]
        skip_pull: bool,
    },

    /// Delete every element listed in the local files from the remote
    Delete,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        config_cmd: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration with keys masked
    Show {
        /// Output format: yaml, json
        #[arg(long, value_name = "FORMAT", default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        #[arg(long, value_name = "PATH")]
        config_file: PathBuf,
    },

    /// Write a sample configuration file
    Generate {
        /// Output file path
        #[arg(long, value_name = "PATH")]
        output: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}
