//! XML encoding of pagination metadata
//!
//! The serializer emits the indented, multi-line form; [`sanitize`] strips
//! line breaks so the result fits in a single HTTP header line.

use crate::error::Result;
use crate::pagination::PaginationMetadata;
use quick_xml::se::Serializer;
use serde::Serialize;

/// Serialize metadata to indented, multi-line XML
///
/// Element order follows the wire contract: `TotalCount`, `PageSize`,
/// `CurrentPage`, `TotalPages`. This form round-trips through
/// [`from_xml`] before sanitization.
pub fn to_xml(metadata: &PaginationMetadata) -> Result<String> {
    let mut buffer = String::new();
    let mut serializer = Serializer::new(&mut buffer);
    serializer.indent(' ', 2);
    metadata.serialize(serializer)?;
    Ok(buffer)
}

/// Parse metadata back out of its XML form
pub fn from_xml(xml: &str) -> Result<PaginationMetadata> {
    Ok(quick_xml::de::from_str(xml)?)
}

/// Remove every carriage return and line feed
///
/// Idempotent; the output is safe to place in a single HTTP header line.
pub fn sanitize(xml: &str) -> String {
    xml.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

/// Serialize metadata to a single-line header value
pub fn to_header_value(metadata: &PaginationMetadata) -> Result<String> {
    let xml = to_xml(metadata)?;
    let value = sanitize(&xml);
    tracing::debug!(len = value.len(), "built pagination header value");
    Ok(value)
}
