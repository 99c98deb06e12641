use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use wow_items_export::settings::{ConfigOverrides, Settings};

use crate::CliError;

use super::load_config;

/// Show the resolved export settings and their sources.
pub(crate) fn run_config_show(settings_path: &Path) -> Result<(), CliError> {
    let resolved = load_config(settings_path, &ConfigOverrides::default())?;
    let config = &resolved.config;

    log::info!(
        "{}",
        "Export Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  Settings file: {}{}",
        settings_path.display(),
        if settings_path.exists() {
            ""
        } else {
            " (not found)"
        },
    );
    crate::log_blank();
    log::info!(
        "  Output path:   {} ({})",
        config.output_path.display(),
        resolved.output_source,
    );
    log::info!(
        "  Slug column:   {} ({})",
        if config.include_slug() { "yes" } else { "no" },
        resolved.slug_source,
    );
    log::info!(
        "  Columns:       {}",
        config.columns.titles().collect::<Vec<_>>().join(", "),
    );

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(settings_path: &Path) {
    println!("{}", settings_path.display());
}

/// Write a default settings file.
pub(crate) fn run_config_init(settings_path: &Path, force: bool) -> Result<(), CliError> {
    if settings_path.exists() && !force {
        log::warn!("Settings file already exists at {}", settings_path.display());
        log::info!("Re-run with --force to overwrite it.");
        return Ok(());
    }

    Settings::write_default(settings_path).map_err(|e| CliError::config(e.to_string()))?;
    log::info!(
        "{} Wrote default settings to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings_path.display(),
    );

    Ok(())
}
