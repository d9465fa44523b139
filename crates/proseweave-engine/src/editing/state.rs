use crate::editing::{
    Cmd, Patch,
    commands::compile_command,
    format::{self, Format},
    history::{Entry, History},
    selection::Selection,
};
use crate::model::Document;

/// Tunables for an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Maximum number of undo steps kept; the oldest is dropped first.
    pub history_limit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self { history_limit: 100 }
    }
}

/// One editing session: the live document, the selection and the undo/redo
/// history.
///
/// The session owns its document exclusively. Every mutation goes through
/// [`EditorState::apply`] (user commands) or [`EditorState::replace_document`]
/// (external replacement), and both bump `version`, so callers can tell
/// whether the document was touched by comparing versions.
///
/// ```rust
/// # use proseweave_engine::editing::{Cmd, EditorState, Selection};
/// let mut state = EditorState::from_text("Some *text*");
/// state.set_selection(Selection::all(state.document()));
///
/// let patch = state.apply(Cmd::ToggleBold);
/// assert!(patch.changed);
/// assert_eq!(patch.markup, "<p><strong>Some text</strong></p>");
///
/// state.apply(Cmd::Undo);
/// assert_eq!(state.markup(), "<p>Some <em>text</em></p>");
/// ```
#[derive(Debug, Clone)]
pub struct EditorState {
    document: Document,
    selection: Selection,
    history: History,
    version: u64,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self::with_options(document, EditorOptions::default())
    }

    pub fn with_options(document: Document, options: EditorOptions) -> Self {
        Self {
            // Start with cursor at end
            selection: Selection::end(&document),
            document,
            history: History::new(options.history_limit),
            version: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(Document::from_text(text))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Sets the selection, clamped to the document.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamp(&self.document);
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::all(&self.document);
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn markup(&self) -> String {
        self.document.to_markup()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn is_active(&self, format: Format) -> bool {
        format::is_active(&self.document, &self.selection, format)
    }

    /// Apply a command to the session.
    ///
    /// An edit that changes the document records the previous state for
    /// undo and clears redo. Commands with nothing to do leave history,
    /// version and document untouched.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let changed = match cmd {
            Cmd::Undo => self.undo(),
            Cmd::Redo => self.redo(),
            _ => match compile_command(&self.document, &self.selection, &cmd) {
                Some(next) if next != self.document => {
                    let before = std::mem::replace(&mut self.document, next);
                    self.history.record(Entry {
                        document: before,
                        selection: self.selection,
                    });
                    true
                }
                _ => false,
            },
        };

        if changed {
            self.version += 1;
            self.selection = self.selection.clamp(&self.document);
        }
        log::trace!(
            "apply {cmd:?}: changed={changed} version={} undo depth={}",
            self.version,
            self.history.undo_depth()
        );

        Patch {
            changed,
            version: self.version,
            markup: self.markup(),
        }
    }

    /// Replace the whole document, e.g. with freshly fetched content.
    ///
    /// History is cleared and the caret moves to the end.
    pub fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.history.clear();
        self.selection = Selection::end(&self.document);
        self.version += 1;
    }

    fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let current = self.current_entry();
        let entry = self.history.undo(current);
        self.restore(entry)
    }

    fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let current = self.current_entry();
        let entry = self.history.redo(current);
        self.restore(entry)
    }

    fn current_entry(&self) -> Entry {
        Entry {
            document: self.document.clone(),
            selection: self.selection,
        }
    }

    fn restore(&mut self, entry: Option<Entry>) -> bool {
        match entry {
            Some(Entry {
                document,
                selection,
            }) => {
                self.document = document;
                self.selection = selection;
                true
            }
            None => false,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Document::default())
    }
}
