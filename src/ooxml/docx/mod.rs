//! Word (.docx) document support.
//!
//! Reading goes through [`Package`] and [`Document`], which expose the body-level
//! paragraphs and tables of the main document part. Writing goes through
//! [`writer::MutableDocument`].

pub mod document;
pub mod package;
pub mod paragraph;
pub mod parts;
pub mod table;
pub mod writer;

pub use document::Document;
pub use package::Package;
pub use paragraph::{Paragraph, Run};
pub use table::{Cell, Row, Table, VMergeState};
pub use writer::MutableDocument;
