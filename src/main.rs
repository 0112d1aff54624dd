mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod stats;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use cli::{Cli, parse_command};
use config::Config;
use consts::DATA_DIR_ENV;
use output::NumberFormat;

/// stderr logging; `--debug` wins over `RUST_LOG`, which wins over the `warn` default
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load();
    let cli = cli
        .with_env_data_dir(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .with_config(&config);

    let command = parse_command(cli.command);
    if command.needs_city() && cli.city.is_none() {
        eprintln!("error: --city is required (run `bikestats cities` for the supported list)");
        std::process::exit(2);
    }

    let result = NumberFormat::from_locale(cli.locale.as_deref())
        .and_then(|number_format| app::run(&cli, command, number_format));

    if let Err(e) = result {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
