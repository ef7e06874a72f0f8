//! XML helpers for building WordprocessingML parts.

pub mod escape;

pub use escape::{escape_xml, is_xml_char};
