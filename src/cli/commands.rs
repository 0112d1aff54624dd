//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Show trip statistics for a city (default)
    Stats,
    /// Page through the raw trip rows
    Raw {
        /// Rows to skip before the page
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Rows per page (defaults to 5, or page_size from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// List supported cities
    Cities,
    /// Prompt for city, month and day, then explore interactively
    Interactive,
}

impl Commands {
    /// Check if this command needs a --city argument
    pub(crate) fn needs_city(self) -> bool {
        matches!(self, Commands::Stats | Commands::Raw { .. })
    }
}

/// Resolve an absent subcommand to the default
pub(crate) fn parse_command(cmd: Option<Commands>) -> Commands {
    cmd.unwrap_or(Commands::Stats)
}
