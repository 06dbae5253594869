use crate::parsing::inline::transform_inline;

use super::{classify::LineClass, types::Block};

/// Cross-line state of the block builder.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ListState {
    Idle,
    /// Rendered items of a list that has not been closed yet.
    AccumulatingList(Vec<String>),
}

/// Turns classified lines into [`Block`]s.
///
/// The only state carried between lines is whether a list is open. A list
/// stays open across list items of any marker style and is closed by a blank
/// line, a heading, a blockquote, a paragraph, a code fragment line, or the
/// end of input.
pub struct BlockBuilder {
    state: ListState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: ListState::Idle,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: LineClass<'_>) {
        let block = match line {
            LineClass::ListItem { text, .. } => {
                let item = format_prose(text);
                if let ListState::AccumulatingList(items) = &mut self.state {
                    items.push(item);
                } else {
                    self.state = ListState::AccumulatingList(vec![item]);
                }
                return;
            }
            LineClass::Blank => Block::Blank,
            LineClass::Heading { level, text } => Block::Heading {
                level,
                html: format_prose(text),
            },
            LineClass::BlockQuote { text } => Block::BlockQuote {
                html: format_prose(text),
            },
            LineClass::Prebuilt { text } => Block::Prebuilt {
                html: html_escape::encode_text(text).into_owned(),
            },
            LineClass::Paragraph { text } => Block::Paragraph {
                html: format_prose(text),
            },
        };

        self.flush_list();
        self.out.push(block);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn flush_list(&mut self) {
        if let ListState::AccumulatingList(items) =
            std::mem::replace(&mut self.state, ListState::Idle)
        {
            self.out.push(Block::List { items });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Escapes authored text, then applies inline formatting.
///
/// Escaping introduces no inline markers, so formatting sees exactly the
/// markers the author wrote.
fn format_prose(text: &str) -> String {
    transform_inline(&html_escape::encode_text(text))
}
