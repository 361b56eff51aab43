//! sitesearch CLI - search a static site's index from the terminal
//!
//! Loads the same `search-index.json` the site's search box uses and runs the
//! same scoring and ranking against it.

mod cli;
mod commands;
mod error;
mod site_config;
#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::resolve_context;
use crate::commands::completions::run_completions;
use crate::commands::interactive::run_interactive;
use crate::commands::search::run_search;
use crate::commands::stats::run_stats;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sitesearch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let context = resolve_context(cli.site.as_deref(), &cli.page, cli.config.as_deref())?;

    match cli.command {
        Commands::Search { query, json, html } => run_search(&query, json, html, &context).await?,
        Commands::Interactive => run_interactive(&context).await?,
        Commands::Stats { json } => run_stats(json, &context).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
