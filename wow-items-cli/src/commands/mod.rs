pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod inspect;

use std::path::Path;

use wow_items_export::settings::{ConfigOverrides, ResolvedConfig, Settings, resolve_config};

use crate::CliError;

/// Load the settings file and resolve it against command-line overrides.
pub(crate) fn load_config(
    settings_path: &Path,
    overrides: &ConfigOverrides,
) -> Result<ResolvedConfig, CliError> {
    let settings = Settings::load(settings_path)
        .map_err(|e| CliError::config(format!("Failed to load settings: {}", e)))?;
    resolve_config(overrides, &settings).map_err(|e| CliError::config(e.to_string()))
}
