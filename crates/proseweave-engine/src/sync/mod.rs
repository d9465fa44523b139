//! # External Value Sync
//!
//! Keeps an editing session consistent with a value owned by the host
//! (a form field, a file, a bound property) without feedback loops.
//!
//! The host pushes its current value in; the editor pushes markup out. A
//! value that is just our own output coming back is an echo and is ignored.
//! Anything else replaces the document wholesale and clears history.
//!
//! ## Modules
//!
//! - **`controller`**: `SyncController`, the echo/replace decision
//! - **`editor`**: `SyncedEditor`, a session plus controller plus change listeners

pub mod controller;
pub mod editor;

pub use controller::{SourceFormat, SyncController, SyncOptions, SyncOutcome, SyncSnapshot};
pub use editor::SyncedEditor;
