//! # Inline Parsing
//!
//! Cursor-based emphasis parsing for a single line of text.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over each line's
//! text after its block marker has been stripped.
//!
//! - `**text**` becomes `TextRun::Bold`
//! - `*text*` becomes `TextRun::Italic`
//! - everything else, including unmatched markers, is `TextRun::Plain`
//!
//! Matching is non-recursive: the interior of a recognized span is never
//! re-scanned, so nested emphasis is not representable.
//!
//! ## Modules
//!
//! - **`kinds`**: emphasis types with owned delimiters (Strong, Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
