//! mdocx - Markdown to Word conversion and Word text extraction
//!
//! This library provides two small pipelines over the Office Open XML word-processing
//! format:
//!
//! # Features
//!
//! - **Markdown to DOCX**: Headings, bullet and numbered items, `**bold**` spans and plain
//!   paragraphs, written with Word's built-in styles
//! - **DOCX to text**: Body paragraphs followed by table rows flattened to `A | B` lines
//! - **Batch extraction**: Per-file status reporting that never stops on a bad file
//! - **OOXML layer**: A minimal writer and reader for WordprocessingML packages
//!
//! # Example - Converting Markdown
//!
//! ```no_run
//! use mdocx::markdown::markdown_to_docx;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! markdown_to_docx("README.md", "README.docx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a DOCX file
//!
//! ```no_run
//! use mdocx::ooxml::docx::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("document.docx")?;
//! let doc = pkg.document()?;
//!
//! for para in doc.paragraphs() {
//!     println!("Paragraph: {}", para.text());
//! }
//! println!("{} tables", doc.tables().len());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Extracting text
//!
//! ```no_run
//! use mdocx::extract::{BatchConfig, run_batch};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BatchConfig::new(["plan.docx", "notes.docx"]);
//! let report = run_batch(&config, &mut std::io::stdout())?;
//! println!("{} extracted", report.extracted_count());
//! # Ok(())
//! # }
//! ```

/// Shared utilities
pub mod common;

/// Markdown to Word conversion
pub mod markdown;

/// Word to plain text extraction
pub mod extract;

/// OOXML (Office Open XML) package reading and writing
pub mod ooxml;
