/// The marker that opened a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Dash,
    Asterisk,
    Plus,
    /// `N.` with any run of digits.
    Numbered,
}

/// List item block type. Items are flat: their text is never block-parsed.
pub struct ListItem;

impl ListItem {
    pub const DASH: u8 = b'-';
    pub const ASTERISK: u8 = b'*';
    pub const PLUS: u8 = b'+';
    pub const NUMBER_SUFFIX: u8 = b'.';

    /// Splits a trimmed line into its marker and item text.
    ///
    /// A bullet marker may be followed by a number marker (`- 1. text`);
    /// both are stripped.
    pub fn parse(line: &str) -> Option<(ListMarker, &str)> {
        let marker = match line.as_bytes().first()? {
            &Self::DASH => ListMarker::Dash,
            &Self::ASTERISK => ListMarker::Asterisk,
            &Self::PLUS => ListMarker::Plus,
            _ => return Some((ListMarker::Numbered, Self::strip_number(line)?)),
        };
        let text = super::after_required_whitespace(&line[1..])?;
        Some((marker, Self::strip_number(text).unwrap_or(text)))
    }

    /// Strips a leading `N.` marker and the whitespace after it.
    fn strip_number(text: &str) -> Option<&str> {
        let bytes = text.as_bytes();
        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 || bytes.get(digits) != Some(&Self::NUMBER_SUFFIX) {
            return None;
        }
        super::after_required_whitespace(&text[digits + 1..])
    }
}
