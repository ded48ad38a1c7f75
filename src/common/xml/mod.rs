//! XML text helpers.

mod escape;

pub use escape::{escape_xml, first_invalid_xml_char, is_xml_char, unescape_xml};
