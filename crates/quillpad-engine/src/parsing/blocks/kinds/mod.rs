pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::{ListItem, ListMarker};
pub use paragraph::Paragraph;

/// Returns the text after a marker, which must be followed by whitespace.
///
/// Lines are trimmed before classification, so a marker with only whitespace
/// after it never reaches this point.
fn after_required_whitespace(rest: &str) -> Option<&str> {
    let text = rest.trim_start();
    if text.len() == rest.len() || text.is_empty() {
        None
    } else {
        Some(text)
    }
}
