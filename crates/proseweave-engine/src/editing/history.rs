use std::collections::VecDeque;

use crate::model::Document;

use super::selection::Selection;

/// A document snapshot together with the selection it was taken under.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub document: Document,
    pub selection: Selection,
}

/// Bounded undo/redo stacks of whole-document snapshots.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Entry>,
    redo: Vec<Entry>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Records the state before a new edit. Clears redo; drops the oldest
    /// entry once `limit` is exceeded.
    pub fn record(&mut self, before: Entry) {
        self.redo.clear();
        if self.limit == 0 {
            return;
        }
        if self.undo.len() == self.limit {
            self.undo.pop_front();
        }
        self.undo.push_back(before);
    }

    /// Swaps `current` for the most recent undo entry.
    pub fn undo(&mut self, current: Entry) -> Option<Entry> {
        let prev = self.undo.pop_back()?;
        self.redo.push(current);
        Some(prev)
    }

    /// Swaps `current` for the most recently undone entry.
    pub fn redo(&mut self, current: Entry) -> Option<Entry> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> Entry {
        Entry {
            document: Document::from_text(text),
            selection: Selection::default(),
        }
    }

    #[test]
    fn undo_redo_swap_entries() {
        let mut h = History::new(10);
        h.record(entry("a"));
        let back = h.undo(entry("b")).unwrap();
        assert_eq!(back, entry("a"));
        assert!(h.can_redo());
        let fwd = h.redo(entry("a")).unwrap();
        assert_eq!(fwd, entry("b"));
        assert!(!h.can_redo());
    }

    #[test]
    fn empty_stacks_return_none() {
        let mut h = History::new(10);
        assert!(h.undo(entry("x")).is_none());
        assert!(h.redo(entry("x")).is_none());
        assert!(!h.can_undo());
    }

    #[test]
    fn record_clears_redo() {
        let mut h = History::new(10);
        h.record(entry("a"));
        h.undo(entry("b"));
        h.record(entry("c"));
        assert!(!h.can_redo());
    }

    #[test]
    fn limit_drops_oldest() {
        let mut h = History::new(2);
        h.record(entry("1"));
        h.record(entry("2"));
        h.record(entry("3"));
        assert_eq!(h.undo_depth(), 2);
        assert_eq!(h.undo(entry("4")).unwrap(), entry("3"));
        assert_eq!(h.undo(entry("3")).unwrap(), entry("2"));
        assert!(h.undo(entry("2")).is_none());
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let mut h = History::new(0);
        h.record(entry("1"));
        assert!(!h.can_undo());
    }
}
