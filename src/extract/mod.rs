//! Plain-text extraction from Word documents.
//!
//! Paragraphs come first, in document order, followed by every table row. Paragraphs
//! with only whitespace are dropped. A table row becomes its trimmed, non-empty cell
//! texts joined with `" | "`; rows with no text are dropped.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mdocx::extract::extract_file;
//!
//! let lines = extract_file("report.docx", "report.txt")?;
//! println!("wrote {lines} lines");
//! # Ok::<(), mdocx::extract::ExtractError>(())
//! ```

pub mod batch;

pub use batch::{BatchConfig, BatchReport, DEFAULT_FILES, FileOutcome, output_path_for, run_batch};

use crate::ooxml::docx::{Document, Package};
use crate::ooxml::error::OoxmlError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Separator between the cells of a flattened table row.
pub const CELL_SEPARATOR: &str = " | ";

/// Errors from extracting a single document.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input is not a readable Word document
    #[error(transparent)]
    Document(#[from] OoxmlError),

    /// Writing the text file failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A batch configuration file could not be loaded
    #[error("invalid batch configuration: {0}")]
    Config(String),
}

/// Read access to the text of a document.
pub trait DocumentReader {
    /// Text of each body paragraph, in document order.
    fn paragraph_texts(&self) -> Vec<String>;

    /// Cell texts of each table row, tables in document order.
    fn table_rows(&self) -> Vec<Vec<String>>;
}

impl DocumentReader for Document {
    fn paragraph_texts(&self) -> Vec<String> {
        self.paragraphs().iter().map(|p| p.text()).collect()
    }

    fn table_rows(&self) -> Vec<Vec<String>> {
        self.tables()
            .iter()
            .flat_map(|table| table.rows())
            .map(|row| row.cells().iter().map(|cell| cell.text()).collect())
            .collect()
    }
}

/// Flatten one table row, or `None` when no cell has text.
pub fn flatten_row<S: AsRef<str>>(cells: &[S]) -> Option<String> {
    let parts: Vec<&str> = cells
        .iter()
        .map(|cell| cell.as_ref().trim())
        .filter(|text| !text.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(CELL_SEPARATOR))
}

/// Collect the output lines of a document.
pub fn extract_lines<R: DocumentReader + ?Sized>(reader: &R) -> Vec<String> {
    let mut lines: Vec<String> = reader
        .paragraph_texts()
        .into_iter()
        .filter(|text| !text.trim().is_empty())
        .collect();
    lines.extend(reader.table_rows().iter().filter_map(|row| flatten_row(row.as_slice())));
    lines
}

/// The text file content for a document: lines joined with `'\n'`, no trailing newline.
pub fn render_text<R: DocumentReader + ?Sized>(reader: &R) -> String {
    extract_lines(reader).join("\n")
}

/// Extract `input` into the text file `output`, returning the number of lines written.
///
/// The output file is replaced if it exists.
pub fn extract_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize, ExtractError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    if !input.exists() {
        return Err(ExtractError::NotFound(input.to_path_buf()));
    }

    let doc = Package::open(input)?.document()?;
    let lines = extract_lines(&doc);

    std::fs::write(output, lines.join("\n")).map_err(|source| ExtractError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        lines = lines.len(),
        "extracted text"
    );
    Ok(lines.len())
}
