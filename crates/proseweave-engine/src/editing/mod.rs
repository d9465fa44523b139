/*!
 * # Editing Core Module
 *
 * Command-based editing over the document model.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Owner: `EditorState`
 * - One session owns the live `Document`, the `Selection` and the `History`
 * - Every mutation goes through `EditorState::apply` or
 *   `EditorState::replace_document`; both bump a monotonically increasing version
 *
 * ### 2. Command-Based Editing
 * - All edits are **Commands** (`Cmd` enum) compiled against a flat view of
 *   the document where every heading, paragraph and list item is one text unit
 * - Inline toggles rewrite the style of the selected chars; block toggles
 *   rewrite unit kinds and regroup list items into list blocks
 * - Commands with nothing to act on are no-ops and never touch history
 *
 * ### 3. Snapshot History
 * - Undo/redo keeps whole-document snapshots with the selection they were
 *   taken under, bounded by `EditorOptions::history_limit`
 * - A new edit clears the redo stack; replacing the document clears both
 *
 * ## Module Structure
 *
 * - **`commands`**: `Cmd` enum and command compilation
 * - **`format`**: `Format` and active-format queries for toolbars
 * - **`history`**: bounded undo/redo stacks
 * - **`patch`**: result of applying a command
 * - **`selection`**: `Position` and `Selection` in unit/char coordinates
 * - **`state`**: `EditorState`, the editing session
 * - **`units`**: flatten/assemble between blocks and text units
 *
 * ## Usage Pattern
 *
 * ```rust
 * use proseweave_engine::editing::*;
 *
 * let mut state = EditorState::from_text("Title\n\n- one\n- two");
 *
 * // caret in the first unit
 * state.set_selection(Selection::caret(Position::new(0, 0)));
 * let patch = state.apply(Cmd::ToggleHeading(proseweave_engine::model::HeadingLevel::H1));
 * assert_eq!(patch.markup, "<h1>Title</h1><ul><li>one</li><li>two</li></ul>");
 *
 * assert!(state.is_active(Format::Heading(proseweave_engine::model::HeadingLevel::H1)));
 * state.apply(Cmd::Undo);
 * assert_eq!(state.markup(), "<p>Title</p><ul><li>one</li><li>two</li></ul>");
 * ```
 */

pub mod commands;
pub mod format;
pub mod history;
pub mod patch;
pub mod selection;
pub mod state;
mod units;

pub use commands::Cmd;
pub use format::Format;
pub use history::{Entry, History};
pub use patch::Patch;
pub use selection::{Position, Selection};
pub use state::{EditorOptions, EditorState};
