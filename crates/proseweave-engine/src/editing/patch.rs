/// Result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Whether the document changed. Commands with nothing to do, and
    /// undo/redo on an empty stack, report `false`.
    pub changed: bool,
    pub version: u64,
    /// Markup of the document after the command.
    pub markup: String,
}
