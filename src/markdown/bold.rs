//! Splitting of `**bold**` spans into runs.
use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

// Non-greedy: "**a** and **b**" is two spans, not one
static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*.*?\*\*").expect("Failed to build bold span regex"));

const MARKER: &str = "**";

/// A piece of paragraph text with uniform weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub bold: bool,
}

impl<'a> TextRun<'a> {
    #[inline]
    pub fn plain(text: &'a str) -> Self {
        Self { text, bold: false }
    }

    #[inline]
    pub fn bold(text: &'a str) -> Self {
        Self { text, bold: true }
    }

    /// A fragment of the split line: delimited spans lose their markers.
    fn from_fragment(fragment: &'a str) -> Self {
        if fragment.len() >= 2 * MARKER.len()
            && let Some(inner) = fragment
                .strip_prefix(MARKER)
                .and_then(|rest| rest.strip_suffix(MARKER))
        {
            return Self::bold(inner);
        }
        Self::plain(fragment)
    }
}

/// Split a line into alternating plain and bold runs.
///
/// The line is cut around every `**...**` span. The text before, between and after the
/// spans is kept even when empty, so a line with `n` spans always yields `2n + 1` runs.
/// Unpaired `**` markers stay in the plain text.
///
/// # Examples
///
/// ```rust
/// use mdocx::markdown::{TextRun, split_bold};
///
/// let runs = split_bold("This is **bold** and plain.");
/// assert_eq!(
///     runs.as_slice(),
///     &[TextRun::plain("This is "), TextRun::bold("bold"), TextRun::plain(" and plain.")]
/// );
/// ```
pub fn split_bold(line: &str) -> SmallVec<[TextRun<'_>; 4]> {
    let mut runs = SmallVec::new();
    let mut last = 0;

    for span in BOLD_SPAN.find_iter(line) {
        runs.push(TextRun::from_fragment(&line[last..span.start()]));
        runs.push(TextRun::from_fragment(span.as_str()));
        last = span.end();
    }
    runs.push(TextRun::from_fragment(&line[last..]));

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_span() {
        let runs = split_bold("This is **bold** and plain.");
        assert_eq!(
            runs.as_slice(),
            &[
                TextRun::plain("This is "),
                TextRun::bold("bold"),
                TextRun::plain(" and plain.")
            ]
        );
    }

    #[test]
    fn test_empty_fragments_kept() {
        let runs = split_bold("**a****b**");
        assert_eq!(
            runs.as_slice(),
            &[
                TextRun::plain(""),
                TextRun::bold("a"),
                TextRun::plain(""),
                TextRun::bold("b"),
                TextRun::plain("")
            ]
        );
    }

    #[test]
    fn test_empty_bold_span() {
        let runs = split_bold("x****y");
        assert_eq!(
            runs.as_slice(),
            &[TextRun::plain("x"), TextRun::bold(""), TextRun::plain("y")]
        );
    }

    #[test]
    fn test_unpaired_marker_is_literal() {
        let runs = split_bold("**a** then **b");
        assert_eq!(
            runs.as_slice(),
            &[TextRun::plain(""), TextRun::bold("a"), TextRun::plain(" then **b")]
        );

        assert_eq!(split_bold("a ** b").as_slice(), &[TextRun::plain("a ** b")]);
        assert_eq!(split_bold("***").as_slice(), &[TextRun::plain("***")]);
    }

    #[test]
    fn test_no_markers() {
        assert_eq!(split_bold("plain").as_slice(), &[TextRun::plain("plain")]);
    }

    proptest! {
        #[test]
        fn prop_paired_markers_concatenate(
            pairs in proptest::collection::vec(("[a-z ]{0,8}", "[a-z ]{0,8}"), 0..5),
            tail in "[a-z ]{0,8}",
        ) {
            let mut line = String::new();
            let mut expected = String::new();
            for (plain, bold) in &pairs {
                line.push_str(plain);
                line.push_str("**");
                line.push_str(bold);
                line.push_str("**");
                expected.push_str(plain);
                expected.push_str(bold);
            }
            line.push_str(&tail);
            expected.push_str(&tail);

            let runs = split_bold(&line);
            prop_assert_eq!(runs.len(), 2 * pairs.len() + 1);

            let joined: String = runs.iter().map(|r| r.text).collect();
            prop_assert_eq!(joined, expected);

            let bold: Vec<&str> = runs.iter().filter(|r| r.bold).map(|r| r.text).collect();
            let wanted: Vec<&str> = pairs.iter().map(|(_, b)| b.as_str()).collect();
            prop_assert_eq!(bold, wanted);
        }
    }
}
