use std::sync::OnceLock;

use regex::Regex;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": their content is escaped and no other inline
/// formatting happens inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    /// A backtick-delimited span that stays on one line and is not empty.
    pub fn pattern() -> &'static Regex {
        static CODE_SPAN: OnceLock<Regex> = OnceLock::new();
        CODE_SPAN.get_or_init(|| Regex::new(r"`([^`\n]+)`").expect("Invalid code span regex"))
    }

    /// Renders raw span content as an inline code container.
    pub fn render(raw: &str) -> String {
        format!("<code>{}</code>", html_escape::encode_text(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_escapes_content() {
        assert_eq!(CodeSpan::render("a<b>"), "<code>a&lt;b&gt;</code>");
    }

    #[test]
    fn pattern_stays_on_one_line() {
        assert!(CodeSpan::pattern().is_match("`x`"));
        assert!(!CodeSpan::pattern().is_match("`x\ny`"));
        assert!(!CodeSpan::pattern().is_match("``"));
    }
}
