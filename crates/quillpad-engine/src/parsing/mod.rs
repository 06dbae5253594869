//! # Markup Rendering
//!
//! Converts the lightweight article markup into an HTML fragment.
//!
//! ## Pipeline
//!
//! 1. **Code extraction** (`code`): fenced regions and inline code spans are
//!    rendered and replaced by placeholders
//! 2. **Block parsing** (`blocks`): lines are classified and assembled into
//!    blocks, prose going through inline formatting (`inline`)
//! 3. **Output**: blocks are joined with newlines, runs of blank lines are
//!    collapsed, and code fragments are restored
//!
//! Rendering never fails. Malformed markup degrades to literal text inside a
//! paragraph. Authored text outside code is always HTML-escaped before it is
//! formatted, and code content is escaped when it is rendered, so the output
//! carries no unescaped input.

pub mod blocks;
pub mod code;
pub mod inline;
pub mod stash;

use std::sync::OnceLock;

use regex::Regex;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};
use stash::Stash;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
    fragments: Stash,
}

impl ParsedDoc {
    /// Renders the document, one block per line.
    ///
    /// Three or more consecutive newlines between blocks collapse to two.
    /// Newlines inside code blocks are left alone.
    pub fn to_html(&self) -> String {
        static BLANK_RUN: OnceLock<Regex> = OnceLock::new();
        let blank_run =
            BLANK_RUN.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"));

        let joined = self
            .blocks
            .iter()
            .map(Block::render)
            .collect::<Vec<_>>()
            .join("\n");
        let collapsed = blank_run.replace_all(&joined, "\n\n");
        self.fragments.restore(&collapsed)
    }
}

pub fn parse_document(markdown: &str) -> ParsedDoc {
    let mut fragments = Stash::block();
    let text = code::extract_code(&stash::scrub(markdown), &mut fragments);

    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();
    for line in text.split('\n') {
        builder.push(classifier.classify(line));
    }

    ParsedDoc {
        blocks: builder.finish(),
        fragments,
    }
}

/// Convenience: parse and render in one step.
pub fn markdown_to_html(markdown: &str) -> String {
    parse_document(markdown).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_blank_and_paragraph_blocks() {
        let doc = parse_document("# Title\n\nSome *italic* and **bold** text.");

        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading {
                    level: 1,
                    html: "Title".to_string()
                },
                Block::Blank,
                Block::Paragraph {
                    html: "Some <em>italic</em> and <strong>bold</strong> text.".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_document() {
        let doc = parse_document("");
        assert_eq!(doc.blocks, vec![Block::Blank]);
        assert_eq!(doc.to_html(), "");
    }

    #[test]
    fn blank_runs_collapse_to_one_empty_line() {
        assert_eq!(markdown_to_html("a\n\n\n\n\nb"), "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn blank_lines_inside_code_survive() {
        assert_eq!(
            markdown_to_html("```\na\n\n\n\nb\n```"),
            "<pre><code>a\n\n\n\nb</code></pre>"
        );
    }

    #[test]
    fn forged_placeholder_is_neutralised() {
        let html = markdown_to_html("`x` \u{E000}0\u{E001}");
        assert_eq!(html, "<code>x</code> \u{FFFD}0\u{FFFD}");
    }
}
