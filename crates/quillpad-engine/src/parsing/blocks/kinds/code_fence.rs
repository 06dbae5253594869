use std::sync::OnceLock;

use regex::Regex;

/// Triple-backtick fenced code regions.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Shortest region between two fences, across any number of lines.
    pub fn pattern() -> &'static Regex {
        static FENCE: OnceLock<Regex> = OnceLock::new();
        FENCE.get_or_init(|| Regex::new(r"(?s)```(.*?)```").expect("Invalid code fence regex"))
    }

    /// Renders the raw text between two fences as a code block.
    ///
    /// Everything enclosed is code, including any text on the opening fence
    /// line.
    pub fn render(enclosed: &str) -> String {
        format!(
            "<pre><code>{}</code></pre>",
            html_escape::encode_text(enclosed.trim())
        )
    }
}
