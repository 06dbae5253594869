use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::kinds::CodeSpan;

/// Maximum excerpt length, in characters, before the ellipsis.
pub const EXCERPT_LENGTH: usize = 150;
pub const ELLIPSIS: &str = "...";

/// Derives a plain-text excerpt from article markup.
///
/// Heading markers, `*` emphasis markers and backticks are removed, links
/// collapse to their label, and the result is trimmed. Text longer than
/// [`EXCERPT_LENGTH`] characters is cut to exactly that many characters and
/// followed by [`ELLIPSIS`].
pub fn derive_excerpt(content: &str) -> String {
    static HEADING_MARKER: OnceLock<Regex> = OnceLock::new();
    static LINK: OnceLock<Regex> = OnceLock::new();
    let heading_marker = HEADING_MARKER
        .get_or_init(|| Regex::new(r"#{1,6}\s+").expect("Invalid heading marker regex"));
    let link = LINK
        .get_or_init(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("Invalid link regex"));

    let text = heading_marker.replace_all(content, "");
    let text = text.replace("**", "").replace(['*', CodeSpan::TICK], "");
    let text = link.replace_all(&text, "$1");
    let text = text.trim();

    match text.char_indices().nth(EXCERPT_LENGTH) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
