/// Paragraph types and implementation for DOCX documents.
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::run::MutableRun;
use super::style::style_id_from_name;

/// A mutable paragraph in a document.
#[derive(Debug, Clone, Default)]
pub struct MutableParagraph {
    /// Runs in this paragraph, in order
    pub(crate) runs: Vec<MutableRun>,
    /// Paragraph style ID (e.g. "Heading1", "ListBullet")
    pub(crate) style: Option<String>,
}

impl MutableParagraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut MutableRun {
        self.runs.push(MutableRun::new());
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut MutableRun {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Set the paragraph style by its UI name ("List Bullet", "Heading 2").
    ///
    /// Built-in Word styles use the name with spaces removed as their style ID.
    pub fn set_style(&mut self, style_name: &str) {
        self.style = Some(style_id_from_name(style_name));
    }

    /// Get the paragraph style ID, if any.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Get the runs of this paragraph.
    pub fn runs(&self) -> &[MutableRun] {
        &self.runs
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text()).collect()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");

        if let Some(ref style) = self.style {
            write!(
                xml,
                "<w:pPr><w:pStyle w:val=\"{}\"/></w:pPr>",
                escape_xml(style)
            )?;
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}
