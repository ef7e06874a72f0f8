//! Document parts for Word documents.

pub mod document_part;

pub use document_part::{Body, DocumentPart};
