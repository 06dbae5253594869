pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{EditorSession, EditorSurface, Preview, SaveOutcome};
pub use io::*;
pub use models::*;
pub use parsing::markdown_to_html;
pub use store::{ARTICLES_KEY, ArticleStore, Clock, PublishedPage, StoreError, SystemClock};
