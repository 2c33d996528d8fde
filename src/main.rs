use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::output::*;
pub use services::table::ClassTable;
pub use services::{classifier, pipeline};

fn default_log_filter() -> &'static str {
    "cardclass=info"
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = services::storage::load_config(cli.config.as_deref())?;

    let mut table = ClassTable::builtin()?;
    table.merge(&config.classes)?;
    tracing::debug!(entries = table.len(), "classification table ready");

    if handle_lookup_commands(&cli, &table)? {
        return Ok(());
    }
    handle_normalize_commands(&cli, &config.layout, &table)?;
    Ok(())
}
