//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` (heading level, list item, blank, plain) with its marker
//!    stripped
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` merges consecutive
//!    list items and plain lines and emits `BlockNode`s as blocks close
//!
//! ## Modules
//!
//! - **`types`**: `LineKind`, `BlockNode`
//! - **`kinds`**: marker types owning their delimiters (Heading, ListItem)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every non-blank line lands in exactly one `BlockNode`
//! - Blank lines never produce a block
//! - Lists built from text are always unordered

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::{BlockNode, LineKind};
