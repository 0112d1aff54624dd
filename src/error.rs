use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Unknown city \"{input}\" (run `bikestats cities` for the supported list)")]
    UnknownCity { input: String },

    #[error("Malformed record at row {row} (line {line}), column \"{column}\": {reason}")]
    MalformedRecord {
        row: usize,
        line: u64,
        column: &'static str,
        reason: String,
    },

    #[error("Missing required column \"{column}\" in {source_name} data")]
    MissingColumn {
        column: &'static str,
        source_name: String,
    },

    #[error("Invalid {kind} filter \"{input}\"")]
    InvalidFilter { kind: &'static str, input: String },

    #[error("No trips match the selected filters")]
    EmptyDataset,

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("Total trip duration of {trips} trips exceeds the supported range")]
    DurationOverflow { trips: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },
}
