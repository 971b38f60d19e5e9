mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::Config;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref());

    match cli.command {
        Command::Format { kind, magnitude } => {
            commands::format::run(&config, kind.as_deref(), magnitude)
        }
        Command::Parse { kind, value } => commands::parse::run(&config, kind.as_deref(), &value),
        Command::Mask { kind, raw, cursor } => {
            commands::mask::run(&config, kind.as_deref(), &raw, cursor)
        }
        Command::Kinds => commands::kinds::run(),
        Command::Export {
            input,
            format,
            output,
        } => commands::export::run(
            &input,
            format.unwrap_or(config.export_format),
            output.as_deref(),
        ),
    }
}

const DEFAULT_LOG_DIRECTIVES: &str = "trackfield=info,trackfield_core=info";

/// `RUST_LOG` wins when set and valid; otherwise log both crates at info
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}
