use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use wow_items_core::{FileSource, ItemSource};
use wow_items_export::settings::ConfigOverrides;

use crate::CliError;

use super::load_config;

/// Export every item in `source` to CSV.
pub(crate) fn run_export(
    settings_path: &Path,
    source: PathBuf,
    output: Option<PathBuf>,
    include_slug: Option<bool>,
) -> Result<(), CliError> {
    let overrides = ConfigOverrides {
        output_path: output,
        include_slug,
    };
    let resolved = load_config(settings_path, &overrides)?;
    let config = resolved.config;

    let source = FileSource::open(&source).map_err(|e| CliError::item_source(e.to_string()))?;
    let items = source
        .items()
        .map_err(|e| CliError::item_source(e.to_string()))?;

    log::info!(
        "Exporting {} items from {}{}",
        items.len(),
        source.name(),
        if config.include_slug() {
            " (with name_slug)"
        } else {
            ""
        },
    );

    wow_items_export::export(&items, &config).map_err(|e| CliError::export(e.to_string()))?;

    log::info!(
        "{} Data written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        config
            .output_path
            .display()
            .if_supports_color(Stdout, |t| t.bold()),
    );

    Ok(())
}
