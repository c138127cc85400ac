use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::debug;

use ddbackup_cli::cli::{Cli, Commands, ConfigCommands};
use ddbackup_cli::commands::{
    handle_config_generate, handle_config_show, handle_config_validate, handle_sync, SyncAction,
};
use ddbackup_cli::logging::init_tracing;
use ddbackup_cli::settings::{apply_cli_overrides, load_config, sync_options};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let config = apply_cli_overrides(config, &cli)?;

    init_tracing(cli.log_level.as_deref(), &config.logging)?;
    debug!("Effective sync settings: {:?}", config.sync);

    let (action, override_remote) = match &cli.command {
        Some(Commands::Pull) => (SyncAction::Pull, false),
        Some(Commands::Push {
            override_remote,
            skip_pull,
        }) => (
            SyncAction::Push {
                skip_pull: *skip_pull,
            },
            *override_remote,
        ),
        Some(Commands::Delete) => (SyncAction::Delete, false),
        Some(Commands::Config { config_cmd }) => {
            return match config_cmd {
                ConfigCommands::Show { format } => handle_config_show(&config, format),
                ConfigCommands::Validate { config_file } => handle_config_validate(config_file),
                ConfigCommands::Generate { output, force } => {
                    handle_config_generate(output, *force)
                }
            };
        }
        None => {
            let mut cmd = Cli::command();
            cmd.print_help().context("Failed to print help")?;
            println!();
            return Ok(());
        }
    };

    let options = sync_options(&config, cli.dry_run, override_remote);

    handle_sync(&config, options, &cli.kinds, action).await
}
