//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::{DEFAULT_DATA_DIR, DEFAULT_PAGE_SIZE};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "bikestats")]
#[command(about = "Explore US bike-share trip data by city, month and weekday", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// City to analyze (chicago, new_york_city, washington)
    #[arg(short, long, global = true)]
    pub(crate) city: Option<String>,

    /// Month name to filter by, or "all"
    #[arg(short, long, global = true, default_value = "all")]
    pub(crate) month: String,

    /// Weekday name to filter by, or "all"
    #[arg(short, long, global = true, default_value = "all")]
    pub(crate) day: String,

    /// Directory holding the city CSV files
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging (load, filter and timing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    #[arg(skip)]
    pub(crate) page_size: Option<usize>,
}

impl Cli {
    /// Fill the data directory from the environment when not given on the command line
    pub(crate) fn with_env_data_dir(mut self, env_dir: Option<PathBuf>) -> Self {
        if self.data_dir.is_none() {
            self.data_dir = env_dir.filter(|d| !d.as_os_str().is_empty());
        }
        self
    }

    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        // Only override color if CLI is at default
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.data_dir.is_none() {
            self.data_dir = config.data_dir.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }
        if self.page_size.is_none() {
            self.page_size = config.page_size.filter(|&n| n > 0);
        }

        self
    }

    pub(crate) fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    pub(crate) fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
