//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wow-items")]
#[command(about = "Export game item data to CSV", long_about = None)]
pub(crate) struct Cli {
    /// Settings file to use instead of ~/.config/wow-items/settings.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Whether to include the `name_slug` column.
#[derive(Args, Clone, Copy)]
pub(crate) struct SlugArgs {
    /// Add a name_slug column with the slugified item name
    #[arg(long, overrides_with = "no_slug")]
    pub slug: bool,

    /// Leave out the name_slug column, even if enabled in settings
    #[arg(long, overrides_with = "slug")]
    pub no_slug: bool,
}

impl SlugArgs {
    /// `None` when neither flag was given, so settings decide.
    pub fn choice(&self) -> Option<bool> {
        if self.slug {
            Some(true)
        } else if self.no_slug {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Export items from a JSON or YAML item dump to CSV
    Export {
        /// Item dump to read (.json, .yaml, .yml)
        #[arg(short, long)]
        source: PathBuf,

        /// CSV file to write (default: out.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        slug: SlugArgs,
    },

    /// Read an exported CSV back and summarize it
    Inspect {
        /// CSV file produced by `export`
        path: PathBuf,

        #[command(flatten)]
        slug: SlugArgs,

        /// Number of rows to print
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },

    /// Manage export settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each value came from
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}
