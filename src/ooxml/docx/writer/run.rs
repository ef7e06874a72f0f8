/// Run types and implementation for DOCX documents.
use crate::common::xml::{escape_xml, is_xml_char};
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

/// A mutable run.
///
/// Runs hold a span of text with uniform character formatting.
#[derive(Debug, Clone, Default)]
pub struct MutableRun {
    /// Text content
    pub(crate) text: String,
    /// Run properties
    pub(crate) properties: RunProperties,
}

impl MutableRun {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Make the text bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = Some(bold);
        self
    }

    /// Whether the run is explicitly bold.
    pub fn is_bold(&self) -> bool {
        self.properties.bold == Some(true)
    }

    /// Serialize the run.
    ///
    /// Fails with [`OoxmlError::InvalidFormat`] when the text holds a character XML 1.0
    /// cannot represent, such as a control character.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        if let Some(c) = self.text.chars().find(|&c| !is_xml_char(c)) {
            return Err(OoxmlError::InvalidFormat(format!(
                "character U+{:04X} is not allowed in document text",
                c as u32
            )));
        }

        xml.push_str("<w:r>");

        if self.properties.bold == Some(true) {
            xml.push_str("<w:rPr><w:b/></w:rPr>");
        }

        // An empty run carries no <w:t>; Word treats it as zero-length text.
        if !self.text.is_empty() {
            write!(
                xml,
                "<w:t xml:space=\"preserve\">{}</w:t>",
                escape_xml(&self.text)
            )?;
        }

        xml.push_str("</w:r>");
        Ok(())
    }
}

/// Run properties. Only switched-on toggles are serialized.
#[derive(Debug, Clone, Default)]
pub(crate) struct RunProperties {
    pub(crate) bold: Option<bool>,
}
