//! Integration tests for the pagination header pipeline
//!
//! Tests the full flow: request page params → config resolution → metadata →
//! XML encoding → sanitized header value.

use haiku_pagination::{
    build_pagination_header, xml, Error, PageParams, PaginationConfig, PaginationMetadata,
    X_PAGINATION,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use test_case::test_case;

// ============================================================================
// Metadata Computation
// ============================================================================

#[test_case(95, 10, 3, 10; "partial last page")]
#[test_case(0, 10, 1, 0; "empty collection")]
#[test_case(100, 10, 1, 10; "exact division")]
#[test_case(1, 100, 1, 1; "single item")]
#[test_case(9, 10, 1, 1; "under one page")]
fn total_pages(total_count: i64, page_size: i64, current_page: i64, expected: u64) {
    let meta = PaginationMetadata::new(total_count, page_size, current_page).unwrap();
    assert_eq!(meta.total_pages, expected);
}

#[test]
fn invalid_arguments_are_rejected_end_to_end() {
    for (total_count, page_size, page) in [(95, 0, 1), (95, -1, 1), (-1, 10, 1), (95, 10, 0)] {
        let err = build_pagination_header(total_count, page_size, page).unwrap_err();
        assert!(err.is_invalid_argument(), "expected invalid argument: {err}");
    }
}

// ============================================================================
// Header Pipeline
// ============================================================================

#[test]
fn header_value_matches_spec_example() {
    let value = build_pagination_header(95, 10, 3).unwrap();

    // One line, stable field order, values intact
    assert!(!value.contains('\r') && !value.contains('\n'));
    let expected_order = [
        "<PaginationMetadata>",
        "<TotalCount>95</TotalCount>",
        "<PageSize>10</PageSize>",
        "<CurrentPage>3</CurrentPage>",
        "<TotalPages>10</TotalPages>",
        "</PaginationMetadata>",
    ];
    let mut last = 0;
    for fragment in expected_order {
        let pos = value[last..]
            .find(fragment)
            .unwrap_or_else(|| panic!("missing {fragment} after byte {last} in {value}"));
        last += pos + fragment.len();
    }
}

#[test]
fn multi_line_xml_round_trips_before_sanitization() {
    let meta = PaginationMetadata::new(42, 7, 2).unwrap();
    let raw = xml::to_xml(&meta).unwrap();
    assert!(raw.contains('\n'));
    assert_eq!(xml::from_xml(&raw).unwrap(), meta);
}

#[test]
fn sanitization_is_idempotent() {
    let meta = PaginationMetadata::new(42, 7, 2).unwrap();
    let once = xml::to_header_value(&meta).unwrap();
    assert_eq!(xml::sanitize(&once), once);
}

// ============================================================================
// Config-Driven Flow
// ============================================================================

#[test]
fn params_resolve_against_loaded_config() {
    let yaml = "default_page_size: 20\nmax_page_size: 50\nheader_name: X-Haiku-Pagination\n";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = PaginationConfig::load(file.path()).unwrap();
    assert_eq!(config.header_name, "X-Haiku-Pagination");

    // Defaults applied
    let resolved = PageParams::default().resolve(&config).unwrap();
    assert_eq!(resolved.page_size, 20);

    // Oversized request clamped to max
    let resolved = PageParams::new(2, 500).resolve(&config).unwrap();
    assert_eq!(resolved.page_size, 50);

    let meta = resolved.metadata(95).unwrap();
    assert_eq!(meta.total_pages, 2);
    assert_eq!(meta.current_page, 2);
    assert!(meta.has_previous());
    assert!(!meta.has_next());
}

#[test]
fn default_config_uses_standard_header_name() {
    let config = PaginationConfig::default();
    assert_eq!(config.header_name, X_PAGINATION);
}

#[test]
fn invalid_config_file_fails_validation() {
    let yaml = "default_page_size: 200\nmax_page_size: 100\n";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let err = PaginationConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }));
}
