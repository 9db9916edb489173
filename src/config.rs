//! Pagination configuration
//!
//! Defaults and limits applied to incoming page parameters, loadable from
//! YAML. Every field has a default so an empty document is a valid config.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for list-endpoint pagination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Items per page when the request does not specify one
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,

    /// Upper bound applied to requested page sizes
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,

    /// Page number when the request does not specify one
    #[serde(default = "default_page")]
    pub default_page: u64,

    /// Response header carrying the pagination metadata
    #[serde(default = "default_header_name")]
    pub header_name: String,
}

fn default_page_size() -> u64 {
    10
}

fn default_max_page_size() -> u64 {
    100
}

fn default_page() -> u64 {
    1
}

fn default_header_name() -> String {
    crate::header::X_PAGINATION.to_string()
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            default_page: default_page(),
            header_name: default_header_name(),
        }
    }
}

impl PaginationConfig {
    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Check the config for internally inconsistent values
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::invalid_config_value(
                "default_page_size",
                "must be positive",
            ));
        }
        if self.max_page_size == 0 {
            return Err(Error::invalid_config_value(
                "max_page_size",
                "must be positive",
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(Error::invalid_config_value(
                "default_page_size",
                format!(
                    "exceeds max_page_size ({} > {})",
                    self.default_page_size, self.max_page_size
                ),
            ));
        }
        if self.default_page == 0 {
            return Err(Error::invalid_config_value(
                "default_page",
                "must be positive",
            ));
        }
        if self.header_name.trim().is_empty() {
            return Err(Error::invalid_config_value(
                "header_name",
                "must not be empty",
            ));
        }
        Ok(())
    }
}
