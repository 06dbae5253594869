use regex::Captures;

use crate::parsing::stash::Stash;

use super::kinds::{Emphasis, Link, Strong};

/// Formats links, strong emphasis and emphasis within one line.
///
/// The input must already be escaped for display; nothing is escaped here
/// apart from the quote character inside a link target. Unbalanced markers
/// are left as literal text. Spans never cross lines because the input is a
/// single line.
pub fn transform_inline(text: &str) -> String {
    let mut anchors = Stash::inline();

    let linked = Link::pattern().replace_all(text, |caps: &Captures<'_>| {
        let label = format_emphasis(&caps[1]);
        anchors.hold(Link::render(&label, &caps[2]))
    });

    let formatted = format_emphasis(&linked);
    anchors.restore(&formatted)
}

/// Applies the strong patterns and then the emphasis patterns.
fn format_emphasis(text: &str) -> String {
    let mut out = text.to_string();
    for pattern in Strong::patterns() {
        out = pattern.replace_all(&out, Strong::REPLACEMENT).into_owned();
    }
    for pattern in Emphasis::patterns() {
        out = pattern.replace_all(&out, Emphasis::REPLACEMENT).into_owned();
    }
    out
}
