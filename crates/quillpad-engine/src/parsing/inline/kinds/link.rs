use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::stash::Stash;

/// `[label](url)` links, opened in a new browsing context.
pub struct Link;

impl Link {
    /// Label and target, each non-empty. The target may not contain a
    /// placeholder of a code fragment, which would otherwise be restored
    /// inside the attribute.
    pub fn pattern() -> &'static Regex {
        static LINK: OnceLock<Regex> = OnceLock::new();
        LINK.get_or_init(|| {
            let (block_open, _) = Stash::BLOCK;
            let (inline_open, _) = Stash::INLINE;
            Regex::new(&format!(
                r"\[([^\]]+)\]\(([^){}{}]+)\)",
                block_open, inline_open
            ))
            .expect("Invalid link regex")
        })
    }

    /// Renders an anchor around an already formatted label.
    ///
    /// `href` arrives text-escaped; only the attribute quote is left to encode.
    pub fn render(label_html: &str, href: &str) -> String {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener">{label_html}</a>"#,
            href.replace('"', "&quot;")
        )
    }
}
