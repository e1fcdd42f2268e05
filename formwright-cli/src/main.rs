//! Formwright command-line form builder.
//!
//! Usage:
//!   formwright add email "Work email" --required
//!   formwright set <field-id> ada@example.com
//!   formwright submit --endpoint https://hooks.example.com/intake
//!
//! The form is autosaved to a SQLite file after every change.

use anyhow::{Context, Result};
use clap::Parser;
use formwright_cli::{Cli, CliConfig, run};
use formwright_engine::FormEngine;
use formwright_storage::{MemoryStorage, SchemaStorage, SqliteStorage};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    let storage: Box<dyn SchemaStorage> = if cli.dry_run {
        debug!("Dry run, using in-memory storage");
        Box::new(MemoryStorage::new())
    } else {
        let sqlite = SqliteStorage::open(&config.db_path)
            .with_context(|| format!("Failed to open {}", config.db_path.display()))?;
        Box::new(sqlite)
    };

    let mut engine = FormEngine::open(config.engine.clone(), storage);
    let output = run(&mut engine, &config.submit, cli.command).await?;
    println!("{output}");
    Ok(())
}
