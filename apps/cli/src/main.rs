//! # contacts
//!
//! Command-line front end for the contacts store.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  env (CONTACTS_*) ──► AppConfig ──► DbConfig ──► Database               │
//! │                                                     │                   │
//! │  argv ──► Cli ──► commands::run(db.contacts()) ◄────┘                   │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                  JSON on stdout, logs on stderr                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod commands;
mod config;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use contacts_db::Database;

use crate::commands::Cli;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(db) = cli.db.clone() {
        config.db_path = db;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    info!(path = %config.db_path, "Configuration loaded");

    let db = Database::new(config.db_config())
        .await
        .with_context(|| format!("opening database {}", config.db_path))?;

    let result = commands::run(&db.contacts(), cli.command).await;
    db.close().await;

    match result {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            Err(e.into())
        }
    }
}
