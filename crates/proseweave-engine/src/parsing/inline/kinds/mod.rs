//! # Inline Kinds
//!
//! Emphasis types that own their delimiters.
//!
//! - **`Strong`**: `MARKER = b"**"`, parsed into `TextRun::Bold`
//! - **`Emphasis`**: `MARKER = b'*'`, parsed into `TextRun::Italic`
//!
//! The parser calls these constants; it never hardcodes `*` or `**`.

pub mod emphasis;
pub mod strong;

pub use emphasis::Emphasis;
pub use strong::Strong;
