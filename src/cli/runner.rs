//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::pagination::{PageParams, PaginationMetadata};
use crate::xml;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Header {
                total_count,
                page,
                page_size,
            } => self.header(*total_count, *page, *page_size),
            Commands::Metadata {
                total_count,
                page,
                page_size,
                format,
            } => self.metadata(*total_count, *page, *page_size, *format),
            Commands::Validate => self.validate(),
        }
    }

    /// Load the pagination config, falling back to defaults
    fn load_config(&self) -> Result<PaginationConfig> {
        match &self.cli.config {
            Some(path) => PaginationConfig::load(path),
            None => Ok(PaginationConfig::default()),
        }
    }

    /// Compute metadata from CLI arguments and config defaults
    fn compute(
        &self,
        total_count: i64,
        page: Option<i64>,
        page_size: Option<i64>,
        config: &PaginationConfig,
    ) -> Result<PaginationMetadata> {
        let params = PageParams { page, page_size };
        params.resolve(config)?.metadata(total_count)
    }

    fn header(&self, total_count: i64, page: Option<i64>, page_size: Option<i64>) -> Result<()> {
        let config = self.load_config()?;
        let metadata = self.compute(total_count, page, page_size, &config)?;
        let value = xml::to_header_value(&metadata)?;
        println!("{}: {}", config.header_name, value);
        Ok(())
    }

    fn metadata(
        &self,
        total_count: i64,
        page: Option<i64>,
        page_size: Option<i64>,
        format: OutputFormat,
    ) -> Result<()> {
        let config = self.load_config()?;
        let metadata = self.compute(total_count, page, page_size, &config)?;

        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metadata)?),
            OutputFormat::Xml => println!("{}", xml::to_xml(&metadata)?),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("validate requires --config"))?;
        let config = PaginationConfig::load(path)?;
        println!(
            "OK: default_page_size={}, max_page_size={}, header={}",
            config.default_page_size, config.max_page_size, config.header_name
        );
        Ok(())
    }
}
