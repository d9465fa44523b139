use crate::parsing::rope::{lines::LineRef, span::Span};

use super::{
    kinds::{Heading, ListItem},
    types::LineKind,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    pub kind: LineKind,
    /// Line content with its block marker stripped.
    pub text: String,
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let (kind, text) = self.classify_str(&lr.text);
        LineClass {
            line: lr.span,
            kind,
            text: text.to_string(),
        }
    }

    /// Classifies raw line text (without its terminator).
    ///
    /// Precedence: heading, list item, blank, plain. First match wins.
    pub fn classify_str<'a>(&self, line: &'a str) -> (LineKind, &'a str) {
        if let Some((level, text)) = Heading::strip(line) {
            return (LineKind::Heading(level), text);
        }
        if let Some(text) = ListItem::strip(line) {
            return (LineKind::ListItem, text);
        }
        if line.trim().is_empty() {
            return (LineKind::Blank, line);
        }
        (LineKind::Plain, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", LineKind::Heading(HeadingLevel::H1), "Title")]
    #[case("### Three", LineKind::Heading(HeadingLevel::H3), "Three")]
    #[case("#### Four", LineKind::Plain, "#### Four")]
    #[case("- item", LineKind::ListItem, "item")]
    #[case("- # not a heading", LineKind::ListItem, "# not a heading")]
    #[case("", LineKind::Blank, "")]
    #[case("   \t", LineKind::Blank, "   \t")]
    #[case("just text", LineKind::Plain, "just text")]
    #[case("-dash", LineKind::Plain, "-dash")]
    #[case("**bold line**", LineKind::Plain, "**bold line**")]
    fn classify_lines(#[case] line: &str, #[case] kind: LineKind, #[case] text: &str) {
        assert_eq!(LineClassifier.classify_str(line), (kind, text));
    }

    #[test]
    fn classify_keeps_line_span() {
        let lr = LineRef {
            span: Span::new(10, 18),
            text: "## Head".into(),
        };
        let lc = LineClassifier.classify(&lr);
        assert_eq!(lc.line, Span::new(10, 18));
        assert_eq!(lc.kind, LineKind::Heading(HeadingLevel::H2));
        assert_eq!(lc.text, "Head");
    }
}
