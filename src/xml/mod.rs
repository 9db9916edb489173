//! XML serialization for pagination metadata
//!
//! Two pure steps: encode the metadata as XML, then strip line breaks so the
//! string is safe to carry in a single HTTP header field.

mod writer;

pub use writer::{from_xml, sanitize, to_header_value, to_xml};
