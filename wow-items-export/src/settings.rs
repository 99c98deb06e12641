//! Export settings: `~/.config/wow-items/settings.toml` plus overrides.
//!
//! Each value is resolved through a priority chain:
//!
//! 1. Command-line override
//! 2. Environment variable (`WOW_ITEMS_OUTPUT`, `WOW_ITEMS_SLUG`)
//! 3. `[export]` table in `settings.toml`
//! 4. Built-in default (`out.csv`, no slug column)
//!
//! ```toml
//! [export]
//! output_path = "out.csv"
//! include_slug = true
//!
//! [export.titles]
//! id = "wow_item_id"
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnSpec};
use crate::error::SettingsError;
use crate::export::{DEFAULT_OUTPUT_PATH, ExportConfig};

pub const OUTPUT_ENV: &str = "WOW_ITEMS_OUTPUT";
pub const SLUG_ENV: &str = "WOW_ITEMS_SLUG";

/// Canonical path to the settings file: `~/.config/wow-items/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("wow-items").join("settings.toml")
}

/// Parsed contents of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub output_path: Option<PathBuf>,
    pub include_slug: Option<bool>,
    /// Header title overrides keyed by column id (e.g., `id = "wow_item_id"`).
    #[serde(default)]
    pub titles: BTreeMap<String, String>,
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    /// Parse settings TOML. `origin` is only used in error messages.
    pub fn parse(contents: &str, origin: &str) -> Result<Self, SettingsError> {
        toml::from_str(contents).map_err(|e| SettingsError::Parse {
            path: origin.to_string(),
            source: e,
        })
    }

    /// Write a starter settings file holding the built-in defaults.
    ///
    /// Writes to a temporary sibling first and renames it into place.
    pub fn write_default(path: &Path) -> Result<(), SettingsError> {
        let defaults = Settings {
            export: ExportSettings {
                output_path: Some(PathBuf::from(DEFAULT_OUTPUT_PATH)),
                include_slug: Some(false),
                titles: BTreeMap::new(),
            },
        };
        let serialized = toml::to_string_pretty(&defaults)?;

        let io_err = |e: std::io::Error| SettingsError::Io {
            path: path.display().to_string(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized).map_err(io_err)?;
        std::fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }
}

/// Values given on the command line, which win over everything else.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub output_path: Option<PathBuf>,
    pub include_slug: Option<bool>,
}

/// Where a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    CommandLine,
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// An [`ExportConfig`] together with the provenance of its values.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: ExportConfig,
    pub output_source: ValueSource,
    pub slug_source: ValueSource,
}

/// Resolve the export config using the process environment.
pub fn resolve_config(
    overrides: &ConfigOverrides,
    settings: &Settings,
) -> Result<ResolvedConfig, SettingsError> {
    resolve_config_with(overrides, settings, |name| std::env::var(name).ok())
}

/// Resolve the export config, reading environment variables through `env`.
pub fn resolve_config_with<F>(
    overrides: &ConfigOverrides,
    settings: &Settings,
    env: F,
) -> Result<ResolvedConfig, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let (output_path, output_source) = if let Some(p) = &overrides.output_path {
        (p.clone(), ValueSource::CommandLine)
    } else if let Some(p) = env(OUTPUT_ENV).filter(|v| !v.is_empty()) {
        (PathBuf::from(p), ValueSource::EnvVar(OUTPUT_ENV))
    } else if let Some(p) = &settings.export.output_path {
        (p.clone(), ValueSource::ConfigFile)
    } else {
        (PathBuf::from(DEFAULT_OUTPUT_PATH), ValueSource::Default)
    };

    let (include_slug, slug_source) = if let Some(b) = overrides.include_slug {
        (b, ValueSource::CommandLine)
    } else if let Some(v) = env(SLUG_ENV).filter(|v| !v.is_empty()) {
        let b = parse_bool(&v).ok_or(SettingsError::InvalidEnv {
            name: SLUG_ENV,
            value: v.clone(),
        })?;
        (b, ValueSource::EnvVar(SLUG_ENV))
    } else if let Some(b) = settings.export.include_slug {
        (b, ValueSource::ConfigFile)
    } else {
        (false, ValueSource::Default)
    };

    let columns = apply_titles(ColumnSpec::standard(include_slug), &settings.export.titles)?;

    Ok(ResolvedConfig {
        config: ExportConfig::new(output_path, include_slug).with_columns(columns),
        output_source,
        slug_source,
    })
}

fn apply_titles(
    mut spec: ColumnSpec,
    titles: &BTreeMap<String, String>,
) -> Result<ColumnSpec, SettingsError> {
    for (key, title) in titles {
        let column: Column = key
            .parse()
            .map_err(|_| SettingsError::UnknownColumn(key.clone()))?;
        spec = spec.with_title(column, title.clone());
    }
    if let Some(title) = spec.duplicate_title() {
        return Err(SettingsError::DuplicateTitle(title.to_string()));
    }
    Ok(spec)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
