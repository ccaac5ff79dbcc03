//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`DelimitedStyle`**: `**` bold, `*` italic, `` ` `` code
//! - **`Reference`**: link `[label](target)` and image `![label](target)` patterns
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in tokenizer code.

pub mod delimited;
pub mod reference;

pub use delimited::DelimitedStyle;
pub use reference::Reference;
