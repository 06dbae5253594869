//! # Code Extraction
//!
//! The first pass over a document. Fenced code regions and then inline code
//! spans are rendered immediately and held in a [`Stash`], leaving only a
//! placeholder in the text. Block classification and inline formatting run
//! afterwards and never see code content, so markup inside code stays
//! literal.

use regex::Captures;

use super::{blocks::kinds::CodeFence, inline::kinds::CodeSpan, stash::Stash};

/// Renders all code in `markdown` into `fragments` and returns the remaining
/// text with placeholders in its place.
///
/// Fences are matched first, so backticks inside a fenced region never start
/// an inline code span. A fence without a closing partner is left as text.
pub fn extract_code(markdown: &str, fragments: &mut Stash) -> String {
    let fenced = CodeFence::pattern().replace_all(markdown, |caps: &Captures<'_>| {
        fragments.hold(CodeFence::render(&caps[1]))
    });

    CodeSpan::pattern()
        .replace_all(&fenced, |caps: &Captures<'_>| {
            fragments.hold(CodeSpan::render(&caps[1]))
        })
        .into_owned()
}
