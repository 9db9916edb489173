//! Pagination types
//!
//! Defines the metadata value object and the request-side page parameters.

use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Pagination Metadata
// ============================================================================

/// Summary of a page window over a larger collection
///
/// Built fresh per request and discarded after serialization; it has no
/// identity and no lifecycle beyond construction and use. Field names and
/// order are part of the wire contract (`TotalCount`, `PageSize`,
/// `CurrentPage`, `TotalPages`) and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "PaginationMetadata", rename_all = "PascalCase")]
pub struct PaginationMetadata {
    /// Total number of items in the collection
    pub total_count: u64,
    /// Number of items per page
    pub page_size: u64,
    /// Current page number (1-based)
    pub current_page: u64,
    /// Total number of pages (derived)
    pub total_pages: u64,
}

impl PaginationMetadata {
    /// Compute pagination metadata for a page window
    ///
    /// `total_pages` is the ceiling of `total_count / page_size`, so an empty
    /// collection has zero pages. Inputs are taken signed so that negative
    /// values arriving from query strings or CLI flags are rejected here
    /// rather than wrapping.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error when `total_count < 0`,
    /// `page_size <= 0`, or `current_page <= 0`.
    pub fn new(total_count: i64, page_size: i64, current_page: i64) -> Result<Self> {
        if total_count < 0 {
            return Err(Error::InvalidTotalCount { value: total_count });
        }
        if page_size <= 0 {
            return Err(Error::InvalidPageSize { value: page_size });
        }
        if current_page <= 0 {
            return Err(Error::InvalidPage {
                value: current_page,
            });
        }

        let total_count = total_count as u64;
        let page_size = page_size as u64;
        let total_pages = total_count.div_ceil(page_size);

        tracing::debug!(
            total_count,
            page_size,
            current_page,
            total_pages,
            "computed pagination metadata"
        );

        Ok(Self {
            total_count,
            page_size,
            current_page: current_page as u64,
            total_pages,
        })
    }

    /// Check if a page precedes the current one
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Check if a page follows the current one
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Number of items to skip to reach the current page
    ///
    /// Saturates at `u64::MAX` for page windows too large to address.
    pub fn offset(&self) -> u64 {
        (self.current_page - 1).saturating_mul(self.page_size)
    }
}

// ============================================================================
// Page Parameters
// ============================================================================

/// Raw page parameters as they arrive on a list request
///
/// Both fields are optional; [`PageParams::resolve`] fills in configured
/// defaults and clamps the page size.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageParams {
    /// Requested page number (1-based)
    #[serde(default)]
    pub page: Option<i64>,
    /// Requested items per page
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PageParams {
    /// Create params with an explicit page and page size
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Apply defaults and limits from configuration
    ///
    /// Absent values fall back to the configured defaults. An explicit page
    /// size larger than the configured maximum is clamped down; explicit
    /// non-positive values are rejected.
    pub fn resolve(&self, config: &PaginationConfig) -> Result<ResolvedPageParams> {
        let page = match self.page {
            None => config.default_page,
            Some(p) if p <= 0 => return Err(Error::InvalidPage { value: p }),
            Some(p) => p as u64,
        };

        let page_size = match self.page_size {
            None => config.default_page_size,
            Some(s) if s <= 0 => return Err(Error::InvalidPageSize { value: s }),
            Some(s) => (s as u64).min(config.max_page_size),
        };

        Ok(ResolvedPageParams { page, page_size })
    }
}

/// Page parameters after defaulting and clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPageParams {
    /// Page number (1-based)
    pub page: u64,
    /// Items per page
    pub page_size: u64,
}

impl ResolvedPageParams {
    /// Compute metadata for a collection of `total_count` items
    pub fn metadata(&self, total_count: i64) -> Result<PaginationMetadata> {
        PaginationMetadata::new(total_count, self.page_size as i64, self.page as i64)
    }
}
