use std::sync::OnceLock;

use regex::Regex;

/// Strong emphasis, spelled `**text**` or `__text__`.
pub struct Strong;

impl Strong {
    pub fn patterns() -> &'static [Regex; 2] {
        static STRONG: OnceLock<[Regex; 2]> = OnceLock::new();
        STRONG.get_or_init(|| {
            [
                Regex::new(r"\*\*(.+?)\*\*").expect("Invalid strong regex"),
                Regex::new(r"__(.+?)__").expect("Invalid strong regex"),
            ]
        })
    }

    pub const REPLACEMENT: &'static str = "<strong>$1</strong>";
}

/// Emphasis, spelled `*text*` or `_text_`.
pub struct Emphasis;

impl Emphasis {
    pub fn patterns() -> &'static [Regex; 2] {
        static EMPHASIS: OnceLock<[Regex; 2]> = OnceLock::new();
        EMPHASIS.get_or_init(|| {
            [
                Regex::new(r"\*(.+?)\*").expect("Invalid emphasis regex"),
                Regex::new(r"_(.+?)_").expect("Invalid emphasis regex"),
            ]
        })
    }

    pub const REPLACEMENT: &'static str = "<em>$1</em>";
}
