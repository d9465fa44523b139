//! Flat view of a document as editable text units.
//!
//! Every heading, paragraph and list item is one unit, in reading order.
//! Selections address units by index; block-level commands rewrite unit
//! kinds and [`assemble`] regroups list items into list blocks.

use crate::model::{
    Block, Document, HeadingLevel, TextStyle,
    runs::{self, TextRun, push_run},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnitKind {
    Heading(HeadingLevel),
    Paragraph,
    /// `list` identifies the list block; consecutive items sharing it are
    /// assembled into one block.
    ListItem { list: usize, ordered: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Unit {
    pub kind: UnitKind,
    pub runs: Vec<TextRun>,
}

impl Unit {
    pub fn len(&self) -> usize {
        runs::char_len(&self.runs)
    }

    pub fn list(&self) -> Option<(usize, bool)> {
        match self.kind {
            UnitKind::ListItem { list, ordered } => Some((list, ordered)),
            _ => None,
        }
    }
}

pub(crate) fn flatten(doc: &Document) -> Vec<Unit> {
    let mut units = vec![];
    for (index, block) in doc.blocks.iter().enumerate() {
        match block {
            Block::Heading { level, runs } => units.push(Unit {
                kind: UnitKind::Heading(*level),
                runs: runs.clone(),
            }),
            Block::Paragraph { runs } => units.push(Unit {
                kind: UnitKind::Paragraph,
                runs: runs.clone(),
            }),
            Block::List { ordered, items } => {
                units.extend(items.iter().map(|item| Unit {
                    kind: UnitKind::ListItem {
                        list: index,
                        ordered: *ordered,
                    },
                    runs: item.clone(),
                }))
            }
        }
    }
    units
}

pub(crate) fn assemble(units: Vec<Unit>) -> Document {
    let mut blocks = vec![];
    let mut open_list = None;
    for unit in units {
        match unit.kind {
            UnitKind::ListItem { list, ordered } => {
                if open_list == Some(list)
                    && let Some(Block::List { items, .. }) = blocks.last_mut()
                {
                    items.push(unit.runs);
                    continue;
                }
                open_list = Some(list);
                blocks.push(Block::List {
                    ordered,
                    items: vec![unit.runs],
                });
            }
            UnitKind::Heading(level) => {
                open_list = None;
                blocks.push(Block::Heading {
                    level,
                    runs: unit.runs,
                });
            }
            UnitKind::Paragraph => {
                open_list = None;
                blocks.push(Block::Paragraph { runs: unit.runs });
            }
        }
    }
    Document::new(blocks)
}

pub(crate) fn unit_lengths(doc: &Document) -> Vec<usize> {
    let mut lens = vec![];
    for block in &doc.blocks {
        match block {
            Block::Heading { runs, .. } | Block::Paragraph { runs } => lens.push(runs::char_len(runs)),
            Block::List { items, .. } => lens.extend(items.iter().map(|i| runs::char_len(i))),
        }
    }
    lens
}

/// One char per entry, tagged with its style.
pub(crate) fn explode(runs: &[TextRun]) -> Vec<(TextStyle, char)> {
    runs.iter()
        .flat_map(|r| {
            let style = r.style();
            r.text().chars().map(move |c| (style, c))
        })
        .collect()
}

/// Inverse of [`explode`]; the result is normalized.
pub(crate) fn implode(chars: &[(TextStyle, char)]) -> Vec<TextRun> {
    let mut out = vec![];
    for (style, c) in chars {
        push_run(&mut out, TextRun::new(*style, c.to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flatten_then_assemble_is_identity() {
        let doc = Document::from_text("# T\n\npara\n\n- a\n- b\n\n- c\n\nend");
        let units = flatten(&doc);
        assert_eq!(units.len(), 6);
        assert_eq!(assemble(units), doc);
    }

    #[test]
    fn separate_lists_stay_separate() {
        let doc = Document::from_text("- a\n\n- b");
        assert_eq!(assemble(flatten(&doc)).blocks.len(), 2);
    }

    #[test]
    fn unit_lengths_follow_reading_order() {
        let doc = Document::from_text("# Hé\n\n- ab\n- c\n\n**xyz**");
        assert_eq!(unit_lengths(&doc), vec![2, 2, 1, 3]);
    }

    #[test]
    fn explode_implode_normalizes() {
        let runs = vec![
            TextRun::Plain("ab".into()),
            TextRun::Bold("c".into()),
            TextRun::Plain("d".into()),
        ];
        let chars = explode(&runs);
        assert_eq!(chars.len(), 4);
        assert_eq!(implode(&chars), runs);
    }
}
