use crate::model::{
    Block,
    runs::{TextRun, push_run},
};
use crate::parsing::{inline::parse_inline, rope::span::Span};

use super::{
    classify::LineClass,
    types::{BlockNode, LineKind},
};

/// Separator placed between the lines of a multi-line paragraph.
pub const LINE_BREAK: &str = "\n";

#[derive(Debug)]
enum LeafState {
    None,
    Paragraph {
        runs: Vec<TextRun>,
        span: Span,
        lines: usize,
    },
    List {
        items: Vec<Vec<TextRun>>,
        span: Span,
    },
}

/// Groups classified lines into blocks.
///
/// Phase 2 of block parsing: consecutive list items become one list,
/// consecutive plain lines one paragraph, and blank lines close whatever is
/// open without producing a block.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        match c.kind {
            LineKind::Blank => self.flush(),
            LineKind::Heading(level) => {
                self.flush();
                self.out.push(BlockNode {
                    block: Block::Heading {
                        level,
                        runs: parse_inline(&c.text),
                    },
                    span: c.line,
                    lines: 1,
                });
            }
            LineKind::ListItem => self.extend_list(c),
            LineKind::Plain => self.extend_paragraph(c),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush();
        self.out
    }

    fn extend_list(&mut self, c: &LineClass) {
        let runs = parse_inline(&c.text);
        if let LeafState::List { items, span } = &mut self.leaf {
            items.push(runs);
            *span = span.cover(c.line);
            return;
        }
        self.flush();
        self.leaf = LeafState::List {
            items: vec![runs],
            span: c.line,
        };
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        let line_runs = parse_inline(&c.text);
        if let LeafState::Paragraph { runs, span, lines } = &mut self.leaf {
            push_run(runs, TextRun::Plain(LINE_BREAK.to_string()));
            for run in line_runs {
                push_run(runs, run);
            }
            *span = span.cover(c.line);
            *lines += 1;
            return;
        }
        self.flush();
        self.leaf = LeafState::Paragraph {
            runs: line_runs,
            span: c.line,
            lines: 1,
        };
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { runs, span, lines } => self.out.push(BlockNode {
                block: Block::Paragraph { runs },
                span,
                lines,
            }),
            LeafState::List { items, span } => {
                let lines = items.len();
                self.out.push(BlockNode {
                    block: Block::List {
                        ordered: false,
                        items,
                    },
                    span,
                    lines,
                });
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;
    use crate::parsing::blocks::LineClassifier;
    use crate::parsing::rope::lines_with_spans;
    use pretty_assertions::assert_eq;
    use xi_rope::Rope;

    fn build(src: &str) -> Vec<BlockNode> {
        let rope = Rope::from(src);
        let mut builder = BlockBuilder::new();
        for lr in lines_with_spans(&rope) {
            builder.push(&LineClassifier.classify(&lr));
        }
        builder.finish()
    }

    fn blocks(src: &str) -> Vec<Block> {
        build(src).into_iter().map(|n| n.block).collect()
    }

    fn plain(s: &str) -> TextRun {
        TextRun::Plain(s.into())
    }

    #[test]
    fn consecutive_headings_stay_separate() {
        assert_eq!(
            blocks("# One\n## Two"),
            vec![
                Block::Heading {
                    level: HeadingLevel::H1,
                    runs: vec![plain("One")]
                },
                Block::Heading {
                    level: HeadingLevel::H2,
                    runs: vec![plain("Two")]
                },
            ]
        );
    }

    #[test]
    fn plain_lines_merge_with_line_break() {
        assert_eq!(
            blocks("first line\nsecond line"),
            vec![Block::Paragraph {
                runs: vec![plain("first line\nsecond line")]
            }]
        );
    }

    #[test]
    fn blank_line_splits_paragraphs() {
        assert_eq!(
            blocks("one\n\n\ntwo"),
            vec![
                Block::Paragraph {
                    runs: vec![plain("one")]
                },
                Block::Paragraph {
                    runs: vec![plain("two")]
                },
            ]
        );
    }

    #[test]
    fn list_items_merge_until_blank() {
        assert_eq!(
            blocks("- a\n- b\n\n- c"),
            vec![
                Block::List {
                    ordered: false,
                    items: vec![vec![plain("a")], vec![plain("b")]]
                },
                Block::List {
                    ordered: false,
                    items: vec![vec![plain("c")]]
                },
            ]
        );
    }

    #[test]
    fn plain_line_after_list_starts_paragraph() {
        assert_eq!(
            blocks("- a\ntext\n- b"),
            vec![
                Block::List {
                    ordered: false,
                    items: vec![vec![plain("a")]]
                },
                Block::Paragraph {
                    runs: vec![plain("text")]
                },
                Block::List {
                    ordered: false,
                    items: vec![vec![plain("b")]]
                },
            ]
        );
    }

    #[test]
    fn heading_interrupts_paragraph() {
        let nodes = build("text\n# Head\nmore");
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].span, Span::new(0, 5));
        assert_eq!(nodes[1].span, Span::new(5, 12));
        assert_eq!(nodes[2].span, Span::new(12, 16));
    }

    #[test]
    fn blank_input_produces_nothing() {
        assert!(build("").is_empty());
        assert!(build("\n   \n\t\n").is_empty());
    }

    #[test]
    fn node_line_counts() {
        let nodes = build("a\nb\nc\n\n- x\n- y\n# h");
        let counts: Vec<usize> = nodes.iter().map(|n| n.lines).collect();
        assert_eq!(counts, vec![3, 2, 1]);
    }

    #[test]
    fn paragraph_line_break_merges_with_styled_neighbours() {
        assert_eq!(
            blocks("**a**\n*b*"),
            vec![Block::Paragraph {
                runs: vec![
                    TextRun::Bold("a".into()),
                    plain("\n"),
                    TextRun::Italic("b".into()),
                ]
            }]
        );
    }
}
