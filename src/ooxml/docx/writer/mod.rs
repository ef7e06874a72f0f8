//! Mutable document writer components for DOCX.
//!
//! This module provides the writer API for creating Word documents.

pub mod doc;
pub mod numbering;
pub(crate) mod package;
pub mod paragraph;
pub mod run;
pub mod style;

pub use doc::MutableDocument;
pub use numbering::{ListKind, NumberingDefinition};
pub use paragraph::MutableParagraph;
pub use run::MutableRun;
pub use style::{MutableStyle, StyleType, generate_styles_xml};
