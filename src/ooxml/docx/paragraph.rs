/// Paragraph and Run structures read from a Word document.
use smallvec::SmallVec;

/// A run of text with uniform formatting inside a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    pub(crate) text: String,
    pub(crate) bold: bool,
}

impl Run {
    /// Create a run from its parts.
    pub fn new(text: impl Into<String>, bold: bool) -> Self {
        Self {
            text: text.into(),
            bold,
        }
    }

    /// Text of this run, with tabs and line breaks rendered as `\t` and `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the run is bold through direct formatting (`<w:b/>`).
    ///
    /// Bold inherited from a style is not reflected here.
    pub fn bold(&self) -> bool {
        self.bold
    }
}

/// A paragraph in a Word document.
///
/// Represents a `<w:p>` element. Only runs that are direct children of the paragraph
/// or of a `<w:hyperlink>` inside it contribute text, which matches what Word shows
/// as the paragraph's own content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub(crate) runs: SmallVec<[Run; 4]>,
    pub(crate) style: Option<String>,
}

impl Paragraph {
    /// Get the paragraph text (all runs concatenated).
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.runs.iter().map(|r| r.text.len()).sum());
        for run in &self.runs {
            text.push_str(&run.text);
        }
        text
    }

    /// Get the runs of this paragraph.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Get the paragraph style ID (`<w:pStyle w:val="..."/>`), if any.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_paragraph_text_concatenates_runs() {
        let para = Paragraph {
            runs: smallvec![
                Run::new("This is ", false),
                Run::new("bold", true),
                Run::new(" and plain.", false),
            ],
            style: None,
        };
        assert_eq!(para.text(), "This is bold and plain.");
        assert!(para.runs()[1].bold());
        assert_eq!(para.style(), None);
    }

    #[test]
    fn test_empty_paragraph() {
        let para = Paragraph::default();
        assert_eq!(para.text(), "");
        assert!(para.runs().is_empty());
    }
}
