pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

use xi_rope::Rope;

use crate::model::Document;
use blocks::{BlockBuilder, BlockNode, LineClassifier};
use rope::lines_with_spans;

/// Output of the text pipeline: blocks with the source spans that fed them.
#[derive(Debug)]
pub struct ParsedDoc {
    pub nodes: Vec<BlockNode>,
}

impl ParsedDoc {
    pub fn into_document(self) -> Document {
        Document::new(self.nodes.into_iter().map(|n| n.block).collect())
    }
}

/// Classifies every line of `text`, assembles blocks and parses inline
/// emphasis. Never fails: unrecognized constructs degrade to plain text.
pub fn parse_document(text: &str) -> ParsedDoc {
    let rope = Rope::from(text);
    parse_rope(&rope)
}

pub fn parse_rope(rope: &Rope) -> ParsedDoc {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        nodes: builder.finish(),
    }
}
