//! # Document Model
//!
//! The in-memory tree the parsers populate and the editing layer mutates.
//!
//! - **`document`**: `Document`, `Block`, `HeadingLevel`
//! - **`runs`**: `TextRun`, `TextStyle` and helpers that keep run sequences
//!   normalized (no empty runs, no adjacent runs with the same style)

pub mod document;
pub mod runs;

pub use document::{Block, Document, HeadingLevel, InvalidHeadingLevel};
pub use runs::{TextRun, TextStyle};
