//! Washledger command-line client.
//!
//! Records car-wash jobs and prints the revenue split between the owner and
//! the employee pool.

mod cli;
mod commands;
mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use washledger_core::ledger::LedgerService;
use washledger_core::storage::{OpendalRecordStore, StorageConfig};
use washledger_shared::{AppConfig, AppError};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load()
        .map_err(AppError::from)
        .context("failed to load configuration")?;
    if let Some(variant) = cli.variant {
        config.ledger.variant = variant.into();
    }

    let store = OpendalRecordStore::from_config(StorageConfig::from_app_config(&config))
        .map_err(AppError::from)
        .context("failed to open record storage")?;
    debug!(
        provider = store.provider_name(),
        root = %config.storage.root,
        variant = %config.ledger.variant,
        "record store ready"
    );

    let service = LedgerService::new(store);
    commands::execute(cli.command, &service, &config).await?;

    Ok(())
}
