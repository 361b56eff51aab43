use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "sitesearch")]
#[command(about = "Search a static site's pre-built index from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site root directory or base URL (overrides config and SITESEARCH_SITE)
    #[arg(long, global = true, value_name = "DIR|URL")]
    pub site: Option<String>,

    /// Path of the page hosting the search box, relative to the site root
    #[arg(long, global = true, value_name = "PATH", default_value = "index.html")]
    pub page: String,

    /// Optional path to a JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the site index
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
        /// Output as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,
        /// Output the results panel markup
        #[arg(long)]
        html: bool,
    },
    /// Drive a search box from stdin, one input or command per line
    Interactive,
    /// Show index statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
