//! OOXML (Office Open XML) support, limited to WordprocessingML.
//!
//! - [`opc`]: the ZIP container, relationship parts and well-known names
//! - [`docx`]: reading paragraphs and tables, writing paragraphs, runs, styles and numbering

pub mod docx;
pub mod error;
pub mod opc;

pub use error::{OoxmlError, Result};
