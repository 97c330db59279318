//! Ragdesk CLI
//!
//! Knowledge base ingestion and retrieval-augmented chat from the terminal.

use anyhow::Result;
use clap::Parser;
use ragdesk_core::error::exit_codes;
use ragdesk_core::{Config, RagDeskError};

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<RagDeskError>()
            .map(RagDeskError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let format = cli.format;

    match cli.command {
        Commands::Validate(args) => commands::validate::run(args, format),
        Commands::Ingest(args) => commands::ingest::run(args, &Config::load()?, format).await,
        Commands::Retrieve(args) => commands::retrieve::run(args, &Config::load()?, format).await,
        Commands::Ask(args) => commands::ask::run(args, &Config::load()?, format).await,
        Commands::Chat(args) => commands::chat::run(args, &Config::load()?).await,
        Commands::Config(args) => commands::config::run(args, format),
    }
}
