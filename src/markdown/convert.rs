//! Markdown to Word conversion.
use crate::markdown::bold::split_bold;
use crate::markdown::config::{BULLET_STYLE, ConvertOptions, NUMBERED_STYLE};
use crate::markdown::line::{LineKind, classify};
use crate::ooxml::docx::writer::MutableDocument;
use crate::ooxml::error::{OoxmlError, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from converting a Markdown file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading the Markdown or writing the `.docx` failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Building the Word package failed
    #[error(transparent)]
    Document(#[from] OoxmlError),
}

/// Sink for the write instructions produced from classified lines.
pub trait DocumentBuilder {
    /// Append a heading paragraph.
    fn add_heading(&mut self, text: &str, level: u8) -> Result<()>;

    /// Append a paragraph, optionally with a named paragraph style.
    ///
    /// Empty text appends a paragraph without runs.
    fn add_paragraph(&mut self, text: &str, style: Option<&str>);

    /// Append a run to the last paragraph.
    fn add_run(&mut self, text: &str, bold: bool);
}

impl DocumentBuilder for MutableDocument {
    fn add_heading(&mut self, text: &str, level: u8) -> Result<()> {
        MutableDocument::add_heading(self, text, level).map(|_| ())
    }

    fn add_paragraph(&mut self, text: &str, style: Option<&str>) {
        let para = self.add_paragraph_with_text(text);
        if let Some(style) = style {
            para.set_style(style);
        }
    }

    fn add_run(&mut self, text: &str, bold: bool) {
        let para = match self.last_paragraph_mut() {
            Some(para) => para,
            None => MutableDocument::add_paragraph(self),
        };
        para.add_run_with_text(text).bold(bold);
    }
}

/// Emit the write instructions for one classified line.
pub fn write_line<B: DocumentBuilder + ?Sized>(kind: LineKind<'_>, builder: &mut B) -> Result<()> {
    match kind {
        LineKind::Heading { level, text } => builder.add_heading(text, level)?,
        LineKind::CodeFence => {},
        LineKind::BulletItem(text) => builder.add_paragraph(text, Some(BULLET_STYLE)),
        LineKind::NumberedItem(text) => builder.add_paragraph(text, Some(NUMBERED_STYLE)),
        LineKind::BoldParagraph(line) => {
            builder.add_paragraph("", None);
            for run in split_bold(line) {
                builder.add_run(run.text, run.bold);
            }
        },
        LineKind::PlainParagraph(text) => builder.add_paragraph(text, None),
        LineKind::Blank => builder.add_paragraph("", None),
    }
    Ok(())
}

/// Convert a sequence of lines into builder calls.
pub fn convert_lines<'a, I, B>(lines: I, builder: &mut B) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
    B: DocumentBuilder + ?Sized,
{
    for (index, line) in lines.into_iter().enumerate() {
        let kind = classify(line);
        tracing::trace!(line = index + 1, ?kind, "classified line");
        write_line(kind, builder)?;
    }
    Ok(())
}

/// Convert Markdown text into builder calls.
///
/// The text is split on `'\n'` only, so a trailing newline yields a final blank line.
///
/// # Examples
///
/// ```rust
/// use mdocx::markdown::convert_str;
/// use mdocx::ooxml::docx::writer::MutableDocument;
///
/// let mut doc = MutableDocument::new();
/// convert_str("# Title\n\nSome **bold** text", &mut doc)?;
/// assert_eq!(doc.paragraph_count(), 3);
/// # Ok::<(), mdocx::ooxml::OoxmlError>(())
/// ```
pub fn convert_str<B: DocumentBuilder + ?Sized>(markdown: &str, builder: &mut B) -> Result<()> {
    convert_lines(markdown.split('\n'), builder)
}

/// Build a Word document from Markdown text.
pub fn markdown_to_document(markdown: &str) -> Result<MutableDocument> {
    let mut doc = MutableDocument::new();
    convert_str(markdown, &mut doc)?;
    Ok(doc)
}

/// Convert the Markdown file `input` into the Word file `output`.
///
/// The output file is replaced if it exists. Nothing is written when the input cannot
/// be read.
pub fn markdown_to_docx(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> std::result::Result<(), ConvertError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let markdown = std::fs::read_to_string(input).map_err(|source| ConvertError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let doc = markdown_to_document(&markdown)?;
    let bytes = doc.to_bytes()?;

    std::fs::write(output, bytes).map_err(|source| ConvertError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        paragraphs = doc.paragraph_count(),
        "converted markdown"
    );
    Ok(())
}

/// Run the conversion described by `options`.
pub fn convert_file(options: &ConvertOptions) -> std::result::Result<(), ConvertError> {
    markdown_to_docx(&options.input, &options.output)
}
