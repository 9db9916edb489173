//! Error types for haiku-pagination
//!
//! This module defines the error hierarchy for the crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for haiku-pagination
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Invalid Argument Errors
    // ============================================================================
    /// Negative total count supplied by the caller
    #[error("total count must be non-negative, got {value}")]
    InvalidTotalCount {
        /// The rejected count
        value: i64,
    },

    /// Zero or negative page size supplied by the caller
    #[error("page size must be positive, got {value}")]
    InvalidPageSize {
        /// The rejected size
        value: i64,
    },

    /// Zero or negative page number supplied by the caller
    #[error("page number must be positive, got {value}")]
    InvalidPage {
        /// The rejected page number
        value: i64,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// General configuration failure
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A config field holds an unusable value
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Offending config field
        field: String,
        /// Why the value is unusable
        message: String,
    },

    /// Config YAML could not be parsed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    /// Metadata could not be encoded as or decoded from XML
    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Metadata could not be encoded as JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Underlying filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file path does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was looked up
        path: String,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error is a rejected caller argument
    ///
    /// Callers map these to a 4xx response; everything else is a server-side
    /// failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidTotalCount { .. }
                | Error::InvalidPageSize { .. }
                | Error::InvalidPage { .. }
        )
    }
}

/// Result type alias for haiku-pagination
pub type Result<T> = std::result::Result<T, Error>;
