//! Line classification for the Markdown subset understood by the converter.
//!
//! Each input line maps to exactly one [`LineKind`]. Rules are tried in order and the
//! first match wins:
//!
//! 1. blank (only whitespace)
//! 2. heading (`#` to `######` followed by a space, at column 0)
//! 3. code fence (three backticks after optional indentation)
//! 4. bullet item (`- ` or `* ` after optional indentation)
//! 5. numbered item (digits, `.`, one whitespace character)
//! 6. paragraph containing `**`
//! 7. plain paragraph
//!
//! Lines between two code fences are classified like any other line.
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s").expect("Failed to build numbered list regex"));

/// Deepest heading level recognised.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Classification of one right-trimmed source line.
///
/// Text slices borrow from the line passed to [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: u8, text: &'a str },
    /// Opening or closing ```` ``` ````; writes nothing.
    CodeFence,
    BulletItem(&'a str),
    NumberedItem(&'a str),
    /// Whole line, still carrying its `**` markers.
    BoldParagraph(&'a str),
    PlainParagraph(&'a str),
    Blank,
}

type Rule = for<'a> fn(&'a str) -> Option<LineKind<'a>>;

const RULES: &[Rule] = &[blank, heading, code_fence, bullet, numbered, bold];

/// Classify a single line.
///
/// Trailing whitespace is removed first. Never fails: anything not matched by a more
/// specific rule is a [`LineKind::PlainParagraph`].
///
/// # Examples
///
/// ```rust
/// use mdocx::markdown::{LineKind, classify};
///
/// assert_eq!(classify("## Title"), LineKind::Heading { level: 2, text: "Title" });
/// assert_eq!(classify("  - item one  "), LineKind::BulletItem("item one"));
/// assert_eq!(classify("12. twelfth"), LineKind::NumberedItem("twelfth"));
/// ```
pub fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim_end();
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(LineKind::PlainParagraph(line))
}

fn blank(line: &str) -> Option<LineKind<'_>> {
    line.trim_start().is_empty().then_some(LineKind::Blank)
}

fn heading(line: &str) -> Option<LineKind<'_>> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL as usize {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    Some(LineKind::Heading {
        level: hashes as u8,
        text,
    })
}

fn code_fence(line: &str) -> Option<LineKind<'_>> {
    line.trim_start().starts_with("```").then_some(LineKind::CodeFence)
}

fn bullet(line: &str) -> Option<LineKind<'_>> {
    let stripped = line.trim_start();
    stripped
        .strip_prefix("- ")
        .or_else(|| stripped.strip_prefix("* "))
        .map(LineKind::BulletItem)
}

fn numbered(line: &str) -> Option<LineKind<'_>> {
    let stripped = line.trim_start();
    NUMBERED_PREFIX
        .find(stripped)
        .map(|m| LineKind::NumberedItem(&stripped[m.end()..]))
}

fn bold(line: &str) -> Option<LineKind<'_>> {
    line.contains("**").then_some(LineKind::BoldParagraph(line))
}
