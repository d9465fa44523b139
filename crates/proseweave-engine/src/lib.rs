pub mod editing;
pub mod markup;
pub mod model;
pub mod parsing;
pub mod sync;

// Re-export key types for easier usage
pub use editing::{Cmd, EditorOptions, EditorState, Format, Patch, Position, Selection};
pub use model::{Block, Document, HeadingLevel, TextRun, TextStyle};
pub use sync::{SyncController, SyncOutcome, SyncedEditor};
