//! Markdown to Word conversion.
//!
//! Understands a line-oriented Markdown subset: ATX headings (`#` to `######`), fenced
//! code markers, `-`/`*` bullets, `1.` numbered items and `**bold**` spans. Everything
//! else becomes a plain paragraph. There is no nesting, and code block content is
//! converted like ordinary text.
//!
//! # Architecture
//!
//! - [`line`]: classifies one line into a [`LineKind`]
//! - [`bold`]: splits a line into plain and bold [`TextRun`]s
//! - [`convert`]: drives a [`DocumentBuilder`] from the classified lines
//! - [`config`]: file locations and fixed style names
//!
//! # Examples
//!
//! ```rust,no_run
//! use mdocx::markdown::{ConvertOptions, convert_file};
//!
//! let options = ConvertOptions::new().with_input("README.md").with_output("README.docx");
//! convert_file(&options)?;
//! # Ok::<(), mdocx::markdown::ConvertError>(())
//! ```

pub mod bold;
pub mod config;
pub mod convert;
pub mod line;

pub use bold::{TextRun, split_bold};
pub use config::{BULLET_STYLE, ConvertOptions, DEFAULT_INPUT, DEFAULT_OUTPUT, NUMBERED_STYLE};
pub use convert::{
    ConvertError, DocumentBuilder, convert_file, convert_lines, convert_str, markdown_to_docx,
    markdown_to_document, write_line,
};
pub use line::{LineKind, MAX_HEADING_LEVEL, classify};
