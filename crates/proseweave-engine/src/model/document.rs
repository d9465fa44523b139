use serde::{Deserialize, Serialize};

use super::runs::{self, TextRun};

/// Heading depth. Only three levels are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("heading level {0} is not supported (expected 1-3)")]
pub struct InvalidHeadingLevel(pub u8);

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 3] = [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3];

    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(InvalidHeadingLevel(other)),
        }
    }
}

/// A structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        runs: Vec<TextRun>,
    },
    Paragraph {
        runs: Vec<TextRun>,
    },
    /// Never constructed with zero items; an empty list is an omitted block.
    List {
        ordered: bool,
        items: Vec<Vec<TextRun>>,
    },
}

impl Block {
    fn normalized(self) -> Self {
        match self {
            Block::Heading { level, runs } => Block::Heading {
                level,
                runs: runs::normalize(runs),
            },
            Block::Paragraph { runs } => Block::Paragraph {
                runs: runs::normalize(runs),
            },
            Block::List { ordered, items } => Block::List {
                ordered,
                items: items.into_iter().map(runs::normalize).collect(),
            },
        }
    }
}

/// The parsed, editable document: blocks in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Runs the line-oriented text pipeline over `text`.
    pub fn from_text(text: &str) -> Self {
        crate::parsing::parse_document(text).into_document()
    }

    /// Reads markup in the subset produced by [`Document::to_markup`].
    pub fn from_markup(markup: &str) -> Self {
        crate::markup::parse_markup(markup)
    }

    pub fn to_markup(&self) -> String {
        crate::markup::to_markup(self)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Same document with every run sequence normalized and empty lists dropped.
    pub fn normalized(self) -> Self {
        let blocks = self
            .blocks
            .into_iter()
            .filter(|b| !matches!(b, Block::List { items, .. } if items.is_empty()))
            .map(Block::normalized)
            .collect();
        Self { blocks }
    }
}
