use crate::model::Document;

use super::units::unit_lengths;

/// A caret location: text unit index plus char offset inside that unit.
///
/// Units are headings, paragraphs and list items in reading order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub unit: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(unit: usize, offset: usize) -> Self {
        Self { unit, offset }
    }
}

/// The current selection; `anchor == head` is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    pub fn caret(at: Position) -> Self {
        Self { anchor: at, head: at }
    }

    /// Selects every char of `doc`.
    pub fn all(doc: &Document) -> Self {
        Self {
            anchor: Position::default(),
            head: end_of(doc),
        }
    }

    /// Caret after the last char of `doc`.
    pub fn end(doc: &Document) -> Self {
        Self::caret(end_of(doc))
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// `(start, end)` in document order regardless of direction.
    pub fn range(&self) -> (Position, Position) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    /// Pulls both ends inside `doc`, keeping direction.
    pub fn clamp(self, doc: &Document) -> Self {
        let lens = unit_lengths(doc);
        Self {
            anchor: clamp_position(self.anchor, &lens),
            head: clamp_position(self.head, &lens),
        }
    }
}

fn clamp_position(pos: Position, lens: &[usize]) -> Position {
    let Some(last) = lens.len().checked_sub(1) else {
        return Position::default();
    };
    let unit = pos.unit.min(last);
    Position {
        unit,
        offset: pos.offset.min(lens[unit]),
    }
}

fn end_of(doc: &Document) -> Position {
    let lens = unit_lengths(doc);
    match lens.last() {
        Some(len) => Position::new(lens.len() - 1, *len),
        None => Position::default(),
    }
}
