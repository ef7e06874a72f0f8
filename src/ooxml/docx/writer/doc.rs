/// Document writer implementation for DOCX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::package::write_package;
use super::paragraph::MutableParagraph;

/// A mutable Word document for writing.
///
/// Paragraphs are appended in document order; `save` packages them together with the
/// built-in styles and numbering into a `.docx` file.
///
/// # Examples
///
/// ```rust,no_run
/// use mdocx::ooxml::docx::writer::MutableDocument;
///
/// let mut doc = MutableDocument::new();
/// doc.add_heading("Overview", 1)?;
/// doc.add_paragraph_with_text("Plain text.");
/// let para = doc.add_paragraph();
/// para.add_run_with_text("Important").bold(true);
/// doc.save("overview.docx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct MutableDocument {
    /// Body paragraphs in document order
    paragraphs: Vec<MutableParagraph>,
}

impl MutableDocument {
    /// Create a new empty mutable document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new empty paragraph to the end of the document.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.paragraphs.push(MutableParagraph::new());
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Add a paragraph with text.
    ///
    /// Empty text produces a paragraph without runs.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        if !text.is_empty() {
            para.add_run_with_text(text);
        }
        para
    }

    /// Add a heading paragraph.
    ///
    /// Level 0 uses the "Title" style, levels 1-9 use "Heading N".
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<&mut MutableParagraph> {
        if level > 9 {
            return Err(OoxmlError::InvalidFormat(format!(
                "Heading level must be 0-9, got {}",
                level
            )));
        }
        let style = if level == 0 {
            "Title".to_string()
        } else {
            format!("Heading {}", level)
        };
        let para = self.add_paragraph_with_text(text);
        para.set_style(&style);
        Ok(para)
    }

    /// Get the last paragraph, if any.
    pub fn last_paragraph_mut(&mut self) -> Option<&mut MutableParagraph> {
        self.paragraphs.last_mut()
    }

    /// Get the number of paragraphs in the document.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get the paragraphs in document order.
    pub fn paragraphs(&self) -> &[MutableParagraph] {
        &self.paragraphs
    }

    /// Serialize the main document part (`word/document.xml`).
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.paragraphs.len() * 128);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespace::WML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;
        xml.push_str("<w:body>");

        for para in &self.paragraphs {
            para.to_xml(&mut xml)?;
        }

        // US Letter with 1" margins; sectPr must be the last child of the body
        xml.push_str(r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#);
        xml.push_str(r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>"#);
        xml.push_str("</w:sectPr>");

        xml.push_str("</w:body></w:document>");
        Ok(xml)
    }

    /// Serialize the whole package to `.docx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        write_package(self)
    }

    /// Save the document to a `.docx` file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            paragraphs = self.paragraphs.len(),
            "saved document"
        );
        Ok(())
    }
}
