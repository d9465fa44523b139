use crate::model::{Document, HeadingLevel, TextStyle};

use super::{
    commands::{selection_has_style, touched_units},
    selection::Selection,
    units::{Unit, UnitKind, explode, flatten},
};

/// Formats a toolbar can show as active for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Bold,
    Italic,
    Underline,
    Heading(HeadingLevel),
    BulletList,
    OrderedList,
}

/// Whether `format` applies to the whole selection.
///
/// For inline styles a caret reports the style of the char before it (or
/// after it at the start of a unit). Block formats require every touched
/// unit to match.
pub(crate) fn is_active(doc: &Document, sel: &Selection, format: Format) -> bool {
    let units = flatten(doc);
    match format {
        Format::Bold => style_active(&units, sel, TextStyle::Bold),
        Format::Italic => style_active(&units, sel, TextStyle::Italic),
        Format::Underline => style_active(&units, sel, TextStyle::Underline),
        Format::Heading(level) => all_touched(&units, sel, |k| k == UnitKind::Heading(level)),
        Format::BulletList => all_touched(&units, sel, |k| {
            matches!(k, UnitKind::ListItem { ordered: false, .. })
        }),
        Format::OrderedList => all_touched(&units, sel, |k| {
            matches!(k, UnitKind::ListItem { ordered: true, .. })
        }),
    }
}

fn style_active(units: &[Unit], sel: &Selection, style: TextStyle) -> bool {
    if !sel.is_collapsed() {
        return selection_has_style(units, sel, style);
    }
    let Some(unit) = units.get(sel.head.unit) else {
        return false;
    };
    let chars = explode(&unit.runs);
    let at = sel.head.offset.min(chars.len());
    let prev = if at > 0 { chars.get(at - 1) } else { chars.first() };
    prev.is_some_and(|(s, _)| *s == style)
}

fn all_touched(units: &[Unit], sel: &Selection, pred: impl Fn(UnitKind) -> bool) -> bool {
    let touched = touched_units(units, sel);
    !touched.is_empty() && units[touched].iter().all(|u| pred(u.kind))
}
