/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code. Quotes do not nest: a second `>` is quoted text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Splits a trimmed line into its quoted text.
    ///
    /// The prefix must be followed by whitespace; `>` alone or `>text` is not
    /// a blockquote.
    pub fn parse(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        super::after_required_whitespace(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_quote() {
        assert_eq!(BlockQuote::parse("hello"), None);
    }

    #[test]
    fn parse_single_quote() {
        assert_eq!(BlockQuote::parse("> hello"), Some("hello"));
    }

    #[test]
    fn parse_requires_whitespace() {
        assert_eq!(BlockQuote::parse(">hello"), None);
        assert_eq!(BlockQuote::parse(">"), None);
    }

    #[test]
    fn nested_marker_is_text() {
        assert_eq!(BlockQuote::parse("> > hello"), Some("> hello"));
    }
}
