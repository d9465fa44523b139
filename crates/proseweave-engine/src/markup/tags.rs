use crate::model::{HeadingLevel, TextStyle};

pub const PARAGRAPH: &str = "p";
pub const BULLET_LIST: &str = "ul";
pub const ORDERED_LIST: &str = "ol";
pub const LIST_ITEM: &str = "li";
pub const LINE_BREAK: &str = "br";

pub fn heading(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
    }
}

/// Element for a styled run; plain text has none.
pub fn inline(style: TextStyle) -> Option<&'static str> {
    match style {
        TextStyle::Plain => None,
        TextStyle::Bold => Some("strong"),
        TextStyle::Italic => Some("em"),
        TextStyle::Underline => Some("u"),
    }
}
