//! # Inline Formatting
//!
//! Turns one line of escaped text into formatted HTML.
//!
//! ## Architecture
//!
//! Inline formatting is separate from block parsing and runs over the text of
//! prose blocks only (headings, list items, blockquotes, paragraphs). Code is
//! never formatted: code spans and fences are rendered by the code extraction
//! pass before any line is classified.
//!
//! Substitutions run in a fixed order, each one over the output of the last:
//!
//! 1. Links `[label](url)`
//! 2. Strong emphasis `**text**`, `__text__`
//! 3. Emphasis `*text*`, `_text_`
//!
//! Finished anchors are held in a [`Stash`](crate::parsing::stash::Stash) so
//! the emphasis patterns never match inside a link target.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types with owned delimiters and patterns
//! - **`transform`**: `transform_inline()` main entry point

pub mod kinds;
pub mod transform;

pub use transform::transform_inline;
