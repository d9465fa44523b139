use xi_rope::Rope;

use crate::parsing::{blocks::BlockNode, rope::lines_with_spans};

/// Validates parser output invariants.
///
/// Asserts that:
/// - node spans are non-empty, within rope bounds, in order and disjoint
/// - every non-blank line lies inside exactly one node span
/// - blank lines never start or end a node
/// - node line counts add up to the number of non-blank lines
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(rope: &Rope, nodes: &[BlockNode]) {
    let n = rope.len();
    for pair in nodes.windows(2) {
        assert!(
            pair[0].span.end <= pair[1].span.start,
            "node spans overlap or are out of order: {:?} then {:?}",
            pair[0].span,
            pair[1].span
        );
    }
    for node in nodes {
        assert!(
            node.span.start <= node.span.end && node.span.end <= n,
            "node span out of bounds: {:?} (rope len: {})",
            node.span,
            n
        );
        assert!(
            !node.span.is_empty(),
            "node covers no source bytes: {:?}",
            node.span
        );
    }

    let mut non_blank = 0;
    for line in lines_with_spans(rope) {
        let owners = nodes.iter().filter(|b| b.span.contains(line.span)).count();
        if line.text.trim().is_empty() {
            assert!(
                nodes
                    .iter()
                    .all(|b| b.span.start != line.span.start && b.span.end != line.span.end),
                "blank line {:?} bounds a node",
                line.span
            );
            continue;
        }
        non_blank += 1;
        assert_eq!(
            owners, 1,
            "line {:?} ({:?}) covered by {owners} nodes",
            line.span, line.text
        );
    }

    let counted: usize = nodes.iter().map(|b| b.lines).sum();
    assert_eq!(
        counted, non_blank,
        "nodes account for {counted} lines, source has {non_blank} non-blank lines"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;
    use crate::parsing::{parse_rope, rope::Span};

    #[test]
    fn parser_output_passes() {
        let rope = Rope::from("# h\n\npara\nmore\n\n- a\n- b\n");
        check(&rope, &parse_rope(&rope).nodes);
    }

    #[test]
    #[should_panic(expected = "covers no source bytes")]
    fn empty_node_span_is_rejected() {
        let rope = Rope::from("x");
        let nodes = [BlockNode {
            block: Block::Paragraph { runs: vec![] },
            span: Span::new(0, 0),
            lines: 0,
        }];
        check(&rope, &nodes);
    }
}
