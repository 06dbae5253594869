use super::kinds::Paragraph;

/// A finished block of output.
///
/// Text inside a block is already escaped and inline-formatted; it may still
/// carry placeholders for code fragments, which the document restores when it
/// renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Separator left by a blank input line.
    Blank,
    /// `<h1>`..`<h6>`.
    Heading { level: u8, html: String },
    /// One list, however many marker styles its items used.
    List { items: Vec<String> },
    BlockQuote { html: String },
    Paragraph { html: String },
    /// A line that begins with a code fragment. Emitted without wrapping.
    Prebuilt { html: String },
}

impl Block {
    /// Renders the block as a single HTML line (code fragments aside).
    pub fn render(&self) -> String {
        match self {
            Block::Blank => String::new(),
            Block::Heading { level, html } => format!("<h{level}>{html}</h{level}>"),
            Block::List { items } => {
                let items: String = items.iter().map(|item| format!("<li>{item}</li>")).collect();
                format!("<ul>{items}</ul>")
            }
            Block::BlockQuote { html } => format!("<blockquote>{html}</blockquote>"),
            Block::Paragraph { html } => format!("{}{html}{}", Paragraph::OPEN, Paragraph::CLOSE),
            Block::Prebuilt { html } => html.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_list_on_one_line() {
        let list = Block::List {
            items: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(list.render(), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn render_heading_level() {
        let heading = Block::Heading {
            level: 3,
            html: "Deep".to_string(),
        };
        assert_eq!(heading.render(), "<h3>Deep</h3>");
    }

    #[test]
    fn render_blank_is_empty() {
        assert_eq!(Block::Blank.render(), "");
    }
}
