use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use wow_items_export::Column;
use wow_items_export::settings::ConfigOverrides;

use crate::CliError;

use super::load_config;

/// Parse an exported CSV and print its row count and first rows.
pub(crate) fn run_inspect(
    settings_path: &Path,
    path: PathBuf,
    include_slug: Option<bool>,
    limit: usize,
) -> Result<(), CliError> {
    let overrides = ConfigOverrides {
        output_path: Some(path.clone()),
        include_slug,
    };
    let columns = load_config(settings_path, &overrides)?.config.columns;

    let records = wow_items_export::read_records(&path, &columns)
        .map_err(|e| CliError::export(e.to_string()))?;

    log::info!(
        "{}",
        path.display().if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Columns: {}", columns.titles().collect::<Vec<_>>().join(", "));
    log::info!("  Rows:    {}", records.len());

    if records.is_empty() || limit == 0 {
        return Ok(());
    }

    crate::log_blank();
    for record in records.iter().take(limit) {
        let slug = record
            .get(Column::NameSlug)
            .map(|s| format!(" [{}]", s))
            .unwrap_or_default();
        log::info!(
            "  {:>7}  {}{}  {} / {} / {}",
            record.id.if_supports_color(Stdout, |t| t.cyan()),
            record.name,
            slug,
            record.quality,
            record.class,
            record.slot,
        );
    }
    if records.len() > limit {
        log::info!("  ... and {} more", records.len() - limit);
    }

    Ok(())
}
