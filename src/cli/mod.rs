//! CLI module
//!
//! Command-line interface for pagination header building.
//!
//! # Commands
//!
//! - `header` - Print the sanitized X-Pagination header for a collection
//! - `metadata` - Print pagination metadata as JSON or XML
//! - `validate` - Validate a pagination configuration file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
