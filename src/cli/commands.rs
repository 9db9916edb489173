//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Haiku pagination header tool
#[derive(Parser, Debug)]
#[command(name = "haiku-pagination")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sanitized X-Pagination header for a collection
    Header {
        /// Total number of items in the collection
        #[arg(long)]
        total_count: i64,

        /// Page number (defaults from config)
        #[arg(long)]
        page: Option<i64>,

        /// Items per page (defaults from config)
        #[arg(long)]
        page_size: Option<i64>,
    },

    /// Print pagination metadata for a collection
    Metadata {
        /// Total number of items in the collection
        #[arg(long)]
        total_count: i64,

        /// Page number (defaults from config)
        #[arg(long)]
        page: Option<i64>,

        /// Items per page (defaults from config)
        #[arg(long)]
        page_size: Option<i64>,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Validate a pagination configuration file
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Multi-line XML output
    Xml,
}
