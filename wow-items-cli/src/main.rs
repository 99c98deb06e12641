//! wow-items CLI
//!
//! Command-line interface for exporting game item data to CSV.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let settings_path = cli
        .config
        .unwrap_or_else(wow_items_export::settings::settings_path);

    let result = match cli.command {
        Commands::Export {
            source,
            output,
            slug,
        } => commands::export::run_export(&settings_path, source, output, slug.choice()),
        Commands::Inspect { path, slug, limit } => {
            commands::inspect::run_inspect(&settings_path, path, slug.choice(), limit)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings_path),
            ConfigAction::Path => {
                commands::config::run_config_path(&settings_path);
                Ok(())
            }
            ConfigAction::Init { force } => {
                commands::config::run_config_init(&settings_path, force)
            }
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

