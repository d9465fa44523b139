use crate::editing::{Cmd, EditorOptions, EditorState, Patch, Selection};

use super::controller::{SyncController, SyncOptions, SyncOutcome, SyncSnapshot};

type Listener = Box<dyn FnMut(&str)>;

/// An editing session bound to an external value.
///
/// Listeners registered with [`SyncedEditor::on_change`] receive the new
/// markup every time the document mutates, whether through a command or an
/// external replacement. Echoes never notify.
pub struct SyncedEditor {
    state: EditorState,
    sync: SyncController,
    listeners: Vec<Listener>,
}

impl SyncedEditor {
    pub fn new(editor: EditorOptions, sync: SyncOptions) -> Self {
        Self {
            state: EditorState::with_options(Default::default(), editor),
            sync: SyncController::with_options(sync),
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn snapshot(&self) -> &SyncSnapshot {
        self.sync.snapshot()
    }

    pub fn markup(&self) -> String {
        self.state.markup()
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.state.set_selection(selection);
    }

    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Feed the host's current value in.
    pub fn push_external(&mut self, value: &str) -> SyncOutcome {
        let outcome = self.sync.ingest(&mut self.state, value);
        if outcome == SyncOutcome::Replaced {
            let markup = self.state.markup();
            self.notify(&markup);
        }
        outcome
    }

    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let patch = self.state.apply(cmd);
        if patch.changed {
            self.sync.record_emitted(&patch.markup);
            self.notify(&patch.markup);
        }
        patch
    }

    fn notify(&mut self, markup: &str) {
        for listener in &mut self.listeners {
            listener(markup);
        }
    }
}

impl Default for SyncedEditor {
    fn default() -> Self {
        Self::new(EditorOptions::default(), SyncOptions::default())
    }
}

impl std::fmt::Debug for SyncedEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncedEditor")
            .field("state", &self.state)
            .field("sync", &self.sync)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(editor: &mut SyncedEditor) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        editor.on_change(move |markup| sink.borrow_mut().push(markup.to_string()));
        seen
    }

    #[test]
    fn replacement_notifies_listeners() {
        let mut editor = SyncedEditor::default();
        let seen = recording(&mut editor);
        assert_eq!(editor.push_external("hello"), SyncOutcome::Replaced);
        assert_eq!(*seen.borrow(), vec!["<p>hello</p>".to_string()]);
    }

    #[test]
    fn commands_notify_and_echo_back_is_ignored() {
        let mut editor = SyncedEditor::default();
        editor.push_external("word");
        let seen = recording(&mut editor);

        editor.set_selection(Selection::all(editor.state().document()));
        let patch = editor.apply(Cmd::ToggleUnderline);
        assert_eq!(*seen.borrow(), vec!["<p><u>word</u></p>".to_string()]);

        // host writes our output back
        let version = editor.state().version();
        assert_eq!(editor.push_external(&patch.markup), SyncOutcome::Echo);
        assert_eq!(editor.state().version(), version);
        assert!(editor.state().can_undo());
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn noop_command_does_not_notify() {
        let mut editor = SyncedEditor::default();
        editor.push_external("x");
        let seen = recording(&mut editor);
        // caret only
        assert!(!editor.apply(Cmd::ToggleBold).changed);
        assert!(!editor.apply(Cmd::Undo).changed);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn undo_notifies_with_restored_markup() {
        let mut editor = SyncedEditor::default();
        editor.push_external("x");
        let seen = recording(&mut editor);
        editor.set_selection(Selection::all(editor.state().document()));
        editor.apply(Cmd::ToggleBold);
        editor.apply(Cmd::Undo);
        assert_eq!(
            *seen.borrow(),
            vec!["<p><strong>x</strong></p>".to_string(), "<p>x</p>".to_string()]
        );
        assert_eq!(editor.snapshot().last_emitted.as_deref(), Some("<p>x</p>"));
    }
}
