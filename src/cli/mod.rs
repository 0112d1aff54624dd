pub(crate) mod args;
pub(crate) mod commands;
pub(crate) mod prompt;

pub(crate) use args::Cli;
pub(crate) use commands::{Commands, parse_command};
