//! Pagination module
//!
//! Computes page-window metadata for list endpoints.
//!
//! # Overview
//!
//! [`PaginationMetadata`] is the transient value object describing a page
//! window (total items, page size, current page, total pages). Request-side
//! [`PageParams`] resolve against a [`PaginationConfig`] before the metadata
//! is computed.
//!
//! [`PaginationConfig`]: crate::config::PaginationConfig

mod types;

pub use types::{PageParams, PaginationMetadata, ResolvedPageParams};
