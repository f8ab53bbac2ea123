use adote_cli::config::Config;
use anyhow::Result;
use clap::Parser;
use log::info;
use std::fs::File;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("adote-cli.log")?;
    let logger = build_logger(log_file);
    log::set_max_level(logger.filter());
    log::set_boxed_logger(Box::new(logger))?;

    let cli = Cli::parse();
    info!("Starting adote-cli");

    let mut config = Config::load()?;
    cli::commands::dispatch(cli.command, &mut config).await
}

/// Logger configured from `RUST_LOG`; `.env` must already be loaded
fn build_logger(log_file: File) -> env_logger::Logger {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .build()
}
