// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Haiku Pagination
//!
//! Pagination metadata computation and wire-safe header encoding for the
//! Haiku API.
//!
//! ## Features
//!
//! - **Metadata Computation**: total pages as the ceiling of count over page
//!   size, with strict input validation
//! - **XML Encoding**: stable `TotalCount`/`PageSize`/`CurrentPage`/`TotalPages`
//!   element order via quick-xml
//! - **Header Sanitization**: CR/LF stripping so the value fits one header line
//! - **Configurable Defaults**: YAML-loadable page-size defaults and limits
//!
//! ## Quick Start
//!
//! ```rust
//! use haiku_pagination::{build_pagination_header, X_PAGINATION};
//!
//! let value = build_pagination_header(95, 10, 3).unwrap();
//! assert!(!value.contains('\n'));
//!
//! // attach to the response as a single-line header
//! let _header = (X_PAGINATION, value);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! counts ──> pagination::PaginationMetadata ──> xml::to_xml ──> xml::sanitize
//!                      (validate + ceil)         (multi-line)    (one line)
//!                              └────── header::build_pagination_header ──────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Pagination metadata and page parameters
pub mod pagination;

/// XML serialization and header sanitization
pub mod xml;

/// Pagination header building
pub mod header;

/// Pagination defaults and limits
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PaginationConfig;
pub use error::{Error, Result};
pub use header::{build_pagination_header, X_PAGINATION};
pub use pagination::{PageParams, PaginationMetadata, ResolvedPageParams};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
