use crate::model::{
    Block, Document, HeadingLevel, TextStyle,
    runs::{TextRun, push_run},
};

use super::tags;

/// Whether `s` reads as markup rather than line-oriented text: after leading
/// whitespace it opens with one of the elements the serializer emits.
pub fn looks_like_markup(s: &str) -> bool {
    let s = s.trim_start();
    let Some(rest) = s.strip_prefix('<') else {
        return false;
    };
    match scan_tag(rest) {
        Some((tag, _)) => !tag.closing && Element::from_name(&tag.name).is_some(),
        None => false,
    }
}

/// Reads markup back into a [`Document`].
///
/// Tolerant by construction: attributes are ignored, unknown elements are
/// skipped while their text is kept, entities are decoded, and text outside
/// any block becomes a paragraph. Nested inline elements resolve to the
/// innermost style since runs carry a single style.
pub fn parse_markup(markup: &str) -> Document {
    let mut reader = Reader::default();
    let mut rest = markup;

    while !rest.is_empty() {
        let Some(lt) = rest.find('<') else {
            reader.text(rest);
            break;
        };
        if lt > 0 {
            reader.text(&rest[..lt]);
        }
        match scan_tag(&rest[lt + 1..]) {
            Some((tag, consumed)) => {
                reader.tag(&tag);
                rest = &rest[lt + 1 + consumed..];
            }
            None => {
                reader.text("<");
                rest = &rest[lt + 1..];
            }
        }
    }

    reader.finish()
}

#[derive(Debug, PartialEq)]
struct Tag {
    name: String,
    closing: bool,
}

/// Parses a tag body following `<`. Returns the tag and the bytes consumed
/// up to and including `>`, or `None` if this is not a tag.
fn scan_tag(s: &str) -> Option<(Tag, usize)> {
    let (closing, body) = match s.strip_prefix('/') {
        Some(body) => (true, body),
        None => (false, s),
    };
    if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let end = s.find('>')?;
    let name_len = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    Some((
        Tag {
            name: body[..name_len].to_ascii_lowercase(),
            closing,
        },
        end + 1,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Element {
    Heading(HeadingLevel),
    Paragraph,
    List { ordered: bool },
    ListItem,
    Inline(TextStyle),
    LineBreak,
}

impl Element {
    fn from_name(name: &str) -> Option<Self> {
        let el = match name {
            "h1" => Element::Heading(HeadingLevel::H1),
            "h2" => Element::Heading(HeadingLevel::H2),
            // deeper headings have no counterpart in the model
            "h3" | "h4" | "h5" | "h6" => Element::Heading(HeadingLevel::H3),
            tags::PARAGRAPH => Element::Paragraph,
            tags::BULLET_LIST => Element::List { ordered: false },
            tags::ORDERED_LIST => Element::List { ordered: true },
            tags::LIST_ITEM => Element::ListItem,
            tags::LINE_BREAK => Element::LineBreak,
            "strong" | "b" => Element::Inline(TextStyle::Bold),
            "em" | "i" => Element::Inline(TextStyle::Italic),
            "u" => Element::Inline(TextStyle::Underline),
            _ => return None,
        };
        Some(el)
    }
}

#[derive(Debug)]
enum Leaf {
    Heading(HeadingLevel, Vec<TextRun>),
    Paragraph(Vec<TextRun>),
}

#[derive(Debug)]
struct OpenList {
    ordered: bool,
    items: Vec<Vec<TextRun>>,
    item: Option<Vec<TextRun>>,
    /// Nested list elements are flattened into this one.
    depth: usize,
}

#[derive(Debug, Default)]
struct Reader {
    blocks: Vec<Block>,
    leaf: Option<Leaf>,
    list: Option<OpenList>,
    styles: Vec<TextStyle>,
}

impl Reader {
    fn tag(&mut self, tag: &Tag) {
        let Some(element) = Element::from_name(&tag.name) else {
            return;
        };
        match (element, tag.closing) {
            (Element::Inline(style), false) => self.styles.push(style),
            (Element::Inline(style), true) => {
                if let Some(i) = self.styles.iter().rposition(|s| *s == style) {
                    self.styles.remove(i);
                }
            }
            (Element::LineBreak, false) => self.append("\n"),
            (Element::LineBreak, true) => {}
            // block elements inside a list item are part of the item
            (Element::Heading(_) | Element::Paragraph, _) if self.in_item() => {}
            (Element::Heading(level), false) => {
                self.close_all();
                self.leaf = Some(Leaf::Heading(level, vec![]));
            }
            (Element::Paragraph, false) => {
                self.close_all();
                self.leaf = Some(Leaf::Paragraph(vec![]));
            }
            (Element::Heading(_) | Element::Paragraph, true) => self.close_leaf(),
            (Element::List { ordered }, false) => match &mut self.list {
                Some(list) => list.depth += 1,
                None => {
                    self.close_leaf();
                    self.list = Some(OpenList {
                        ordered,
                        items: vec![],
                        item: None,
                        depth: 1,
                    });
                }
            },
            (Element::List { .. }, true) => {
                let outermost = self.list.as_mut().map(|list| {
                    list.depth -= 1;
                    list.depth == 0
                });
                if outermost == Some(true) {
                    self.close_list();
                }
            }
            (Element::ListItem, false) => {
                if self.list.is_none() {
                    self.close_leaf();
                    self.list = Some(OpenList {
                        ordered: false,
                        items: vec![],
                        item: None,
                        depth: 1,
                    });
                }
                if let Some(list) = &mut self.list {
                    if let Some(item) = list.item.take() {
                        list.items.push(item);
                    }
                    list.item = Some(vec![]);
                }
            }
            (Element::ListItem, true) => {
                if let Some(list) = &mut self.list
                    && let Some(item) = list.item.take()
                {
                    list.items.push(item);
                }
            }
        }
    }

    fn text(&mut self, raw: &str) {
        let decoded = html_escape::decode_html_entities(raw);
        let text = decoded.replace("\r\n", " ").replace(['\r', '\n'], " ");
        if text.trim().is_empty() && self.leaf.is_none() && !self.in_item() {
            return;
        }
        self.append(&text);
    }

    fn append(&mut self, text: &str) {
        let style = self.styles.last().copied().unwrap_or(TextStyle::Plain);
        let run = TextRun::new(style, text);
        if let Some(item) = self.list.as_mut().and_then(|l| l.item.as_mut()) {
            push_run(item, run);
            return;
        }
        // text between items ends the list
        self.close_list();
        let runs = match self
            .leaf
            .get_or_insert_with(|| Leaf::Paragraph(vec![]))
        {
            Leaf::Heading(_, runs) | Leaf::Paragraph(runs) => runs,
        };
        push_run(runs, run);
    }

    fn in_item(&self) -> bool {
        self.list.as_ref().is_some_and(|l| l.item.is_some())
    }

    fn close_leaf(&mut self) {
        match self.leaf.take() {
            Some(Leaf::Heading(level, runs)) => self.blocks.push(Block::Heading { level, runs }),
            Some(Leaf::Paragraph(runs)) => self.blocks.push(Block::Paragraph { runs }),
            None => {}
        }
    }

    fn close_list(&mut self) {
        if let Some(mut list) = self.list.take() {
            if let Some(item) = list.item.take() {
                list.items.push(item);
            }
            if !list.items.is_empty() {
                self.blocks.push(Block::List {
                    ordered: list.ordered,
                    items: list.items,
                });
            }
        }
    }

    fn close_all(&mut self) {
        self.close_leaf();
        self.close_list();
    }

    fn finish(mut self) -> Document {
        self.close_all();
        Document::new(self.blocks)
    }
}
