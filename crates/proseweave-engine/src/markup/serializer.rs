use crate::model::{Block, Document, TextRun};

use super::tags;

/// Renders a document to markup.
///
/// Elements are emitted back to back with no separating whitespace. Plain
/// text is escaped and line breaks inside runs become `<br>`.
pub fn to_markup(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, runs } => wrap(out, tags::heading(*level), |out| write_runs(out, runs)),
        Block::Paragraph { runs } => wrap(out, tags::PARAGRAPH, |out| write_runs(out, runs)),
        Block::List { ordered, items } => {
            let tag = if *ordered {
                tags::ORDERED_LIST
            } else {
                tags::BULLET_LIST
            };
            wrap(out, tag, |out| {
                for item in items {
                    wrap(out, tags::LIST_ITEM, |out| write_runs(out, item));
                }
            });
        }
    }
}

fn write_runs(out: &mut String, runs: &[TextRun]) {
    for run in runs {
        match tags::inline(run.style()) {
            Some(tag) => wrap(out, tag, |out| write_text(out, run.text())),
            None => write_text(out, run.text()),
        }
    }
}

fn write_text(out: &mut String, text: &str) {
    let mut lines = text.split('\n');
    if let Some(first) = lines.next() {
        html_escape::encode_text_to_string(first, out);
    }
    for line in lines {
        out.push('<');
        out.push_str(tags::LINE_BREAK);
        out.push('>');
        html_escape::encode_text_to_string(line, out);
    }
}

fn wrap(out: &mut String, tag: &str, body: impl FnOnce(&mut String)) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    body(out);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;

    fn plain(s: &str) -> TextRun {
        TextRun::Plain(s.into())
    }

    #[test]
    fn empty_document_is_empty_markup() {
        assert_eq!(to_markup(&Document::default()), "");
    }

    #[test]
    fn renders_each_block_kind() {
        let doc = Document::new(vec![
            Block::Heading {
                level: HeadingLevel::H3,
                runs: vec![plain("Head")],
            },
            Block::Paragraph {
                runs: vec![
                    plain("a "),
                    TextRun::Bold("b".into()),
                    TextRun::Italic("c".into()),
                    TextRun::Underline("d".into()),
                ],
            },
            Block::List {
                ordered: true,
                items: vec![vec![plain("one")], vec![]],
            },
        ]);
        insta::assert_snapshot!(
            to_markup(&doc),
            @"<h3>Head</h3><p>a <strong>b</strong><em>c</em><u>d</u></p><ol><li>one</li><li></li></ol>"
        );
    }

    #[test]
    fn escapes_structural_characters() {
        let doc = Document::new(vec![Block::Paragraph {
            runs: vec![plain("a < b && c > d"), TextRun::Bold("<script>".into())],
        }]);
        insta::assert_snapshot!(
            to_markup(&doc),
            @"<p>a &lt; b &amp;&amp; c &gt; d<strong>&lt;script&gt;</strong></p>"
        );
    }

    #[test]
    fn line_breaks_become_br() {
        let doc = Document::new(vec![Block::Paragraph {
            runs: vec![plain("one\ntwo"), TextRun::Italic("x\ny".into())],
        }]);
        assert_eq!(to_markup(&doc), "<p>one<br>two<em>x<br>y</em></p>");
    }

    #[test]
    fn serializing_twice_is_identical() {
        let doc = Document::from_text("# T\n\ntext **b**\n\n- i");
        assert_eq!(to_markup(&doc), to_markup(&doc));
    }
}
