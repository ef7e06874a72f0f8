//! Options for Markdown to Word conversion.
use std::path::{Path, PathBuf};

/// Markdown file converted when no input is given.
pub const DEFAULT_INPUT: &str = "COMPLETE_APPLICATION_DOCUMENTATION.md";

/// Word file written when no output is given.
pub const DEFAULT_OUTPUT: &str = "COMPLETE_APPLICATION_DOCUMENTATION.docx";

/// Paragraph style for `- ` and `* ` list items.
pub const BULLET_STYLE: &str = "List Bullet";

/// Paragraph style for `1. ` list items.
pub const NUMBERED_STYLE: &str = "List Number";

/// Input and output locations for a conversion.
///
/// # Examples
///
/// ```rust
/// use mdocx::markdown::ConvertOptions;
///
/// // Create with defaults
/// let options = ConvertOptions::default();
/// assert_eq!(options.output.to_str(), Some("COMPLETE_APPLICATION_DOCUMENTATION.docx"));
///
/// // Or derive the output from the input
/// let options = ConvertOptions::for_input("notes.md");
/// assert_eq!(options.output.to_str(), Some("notes.docx"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Markdown file to read
    pub input: PathBuf,
    /// Word file to write (overwritten if it exists)
    pub output: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ConvertOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reading `input` and writing a `.docx` beside it.
    pub fn for_input(input: impl AsRef<Path>) -> Self {
        let input = input.as_ref().to_path_buf();
        Self {
            output: input.with_extension("docx"),
            input,
        }
    }

    /// Set the Markdown file to read.
    #[inline]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Set the Word file to write.
    #[inline]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = ConvertOptions::new().with_input("a.md").with_output("out/b.docx");
        assert_eq!(options.input, PathBuf::from("a.md"));
        assert_eq!(options.output, PathBuf::from("out/b.docx"));
    }

    #[test]
    fn test_for_input_replaces_extension() {
        let options = ConvertOptions::for_input("docs/guide.markdown");
        assert_eq!(options.output, PathBuf::from("docs/guide.docx"));

        let options = ConvertOptions::for_input("README");
        assert_eq!(options.output, PathBuf::from("README.docx"));
    }
}
