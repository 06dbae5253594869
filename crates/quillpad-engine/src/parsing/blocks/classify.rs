use crate::parsing::stash::Stash;

use super::kinds::{BlockQuote, Heading, ListItem, ListMarker};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Text slices borrow the trimmed
/// line with the block marker removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Heading { level: u8, text: &'a str },
    ListItem { marker: ListMarker, text: &'a str },
    BlockQuote { text: &'a str },
    /// Starts with a fragment rendered by the code extraction pass.
    Prebuilt { text: &'a str },
    Paragraph { text: &'a str },
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// The line is trimmed first. Openers are tried in a fixed order:
    /// heading, list item, blockquote, then code fragment; anything else is
    /// a paragraph.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim();
        if line.is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if let Some((marker, text)) = ListItem::parse(line) {
            return LineClass::ListItem { marker, text };
        }
        if let Some(text) = BlockQuote::parse(line) {
            return LineClass::BlockQuote { text };
        }
        if line.starts_with(Stash::BLOCK.0) {
            return LineClass::Prebuilt { text: line };
        }
        LineClass::Paragraph { text: line }
    }
}
