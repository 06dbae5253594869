//! # Block Parsing
//!
//! Line-oriented block parsing over text whose code has already been
//! extracted (see [`crate::parsing::code`]).
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each trimmed line is classified into
//!    a `LineClass` (blank, heading, list item, blockquote, code fragment,
//!    paragraph) from local facts only
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` runs a two-state
//!    machine (`Idle`, `AccumulatingList`) and emits `Block`s
//!
//! ## Modules
//!
//! - **`types`**: `Block` and its rendering
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, ListItem,
//!   BlockQuote, CodeFence, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks never nest: list item text is formatted as a flat string
//! - A change of list marker style does not end a list
//! - Fenced code is a raw zone: nothing inside it is classified or formatted

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::Block;
