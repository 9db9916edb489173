//! Pagination header building
//!
//! The single entry point callers use to turn collection counts into the
//! `X-Pagination` header value: compute the metadata, encode it as XML,
//! strip line breaks. The two underlying steps stay independently usable in
//! [`pagination`](crate::pagination) and [`xml`](crate::xml).

use crate::error::Result;
use crate::pagination::PaginationMetadata;
use crate::xml;

/// Default name of the response header carrying pagination metadata
pub const X_PAGINATION: &str = "X-Pagination";

/// Build a wire-safe pagination header value
///
/// Validates the inputs, computes `total_pages`, and returns the sanitized
/// single-line XML encoding.
///
/// # Errors
///
/// Propagates invalid-argument errors from metadata construction and any
/// XML serialization failure.
pub fn build_pagination_header(
    total_count: i64,
    page_size: i64,
    current_page: i64,
) -> Result<String> {
    let metadata = PaginationMetadata::new(total_count, page_size, current_page)?;
    xml::to_header_value(&metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_build_pagination_header() {
        let value = build_pagination_header(95, 10, 3).unwrap();
        assert!(!value.contains('\n'));
        assert!(!value.contains('\r'));
        assert!(value.contains("<TotalCount>95</TotalCount>"));
        assert!(value.contains("<PageSize>10</PageSize>"));
        assert!(value.contains("<CurrentPage>3</CurrentPage>"));
        assert!(value.contains("<TotalPages>10</TotalPages>"));
    }

    #[test]
    fn test_build_pagination_header_empty_collection() {
        let value = build_pagination_header(0, 10, 1).unwrap();
        assert!(value.contains("<TotalCount>0</TotalCount>"));
        assert!(value.contains("<TotalPages>0</TotalPages>"));
    }

    #[test]
    fn test_build_pagination_header_rejects_bad_input() {
        assert!(matches!(
            build_pagination_header(95, 0, 1).unwrap_err(),
            Error::InvalidPageSize { value: 0 }
        ));
        assert!(matches!(
            build_pagination_header(-1, 10, 1).unwrap_err(),
            Error::InvalidTotalCount { value: -1 }
        ));
        assert!(matches!(
            build_pagination_header(95, 10, -2).unwrap_err(),
            Error::InvalidPage { value: -2 }
        ));
    }
}
