use std::fmt::Write;

use crate::model::{Block, Document, TextRun};

/// Renders a document as one line per block (list items indented below
/// their list), with runs in `Debug` form so line breaks stay visible.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        match block {
            Block::Heading { level, runs } => {
                let _ = writeln!(out, "Heading({}): {}", level.as_u8(), runs_line(runs));
            }
            Block::Paragraph { runs } => {
                let _ = writeln!(out, "Paragraph: {}", runs_line(runs));
            }
            Block::List { ordered, items } => {
                let _ = writeln!(out, "List({}):", if *ordered { "ol" } else { "ul" });
                for item in items {
                    let _ = writeln!(out, "  - {}", runs_line(item));
                }
            }
        }
    }
    out
}

fn runs_line(runs: &[TextRun]) -> String {
    if runs.is_empty() {
        return "(empty)".to_string();
    }
    runs.iter()
        .map(|r| format!("{r:?}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;

    #[test]
    fn outline_lists_every_block() {
        let doc = Document::new(vec![
            Block::Heading {
                level: HeadingLevel::H2,
                runs: vec![TextRun::Plain("Hi".into())],
            },
            Block::Paragraph { runs: vec![] },
            Block::List {
                ordered: true,
                items: vec![vec![TextRun::Bold("x".into())]],
            },
        ]);
        insta::assert_snapshot!(outline(&doc), @r#"
        Heading(2): Plain("Hi")
        Paragraph: (empty)
        List(ol):
          - Bold("x")
        "#);
    }
}
