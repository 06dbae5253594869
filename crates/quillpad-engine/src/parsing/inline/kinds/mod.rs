//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` delimited raw zone, rendered during code extraction
//! - **`Link`**: `[label](url)`
//! - **`Strong`** / **`Emphasis`**: `**`/`__` and `*`/`_` spans
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in the
//! transformer. The transformer only decides the order they run in.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::Link;
