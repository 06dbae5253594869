/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the default block when no other
/// block opener matches. Inline formatting is applied to paragraph content.
pub struct Paragraph;

impl Paragraph {
    pub const OPEN: &'static str = "<p>";
    pub const CLOSE: &'static str = "</p>";
}
