use crate::model::{Document, HeadingLevel, TextStyle};

use super::{
    selection::Selection,
    units::{Unit, UnitKind, assemble, explode, flatten, implode},
};

/// Commands that can be applied to an editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    ToggleHeading(HeadingLevel),
    ToggleList { ordered: bool },
    Undo,
    Redo,
}

/// Compile an editing command into the next document.
///
/// Returns `None` when the command has nothing to act on. History commands
/// are handled by the session and always return `None` here.
pub(crate) fn compile_command(doc: &Document, sel: &Selection, cmd: &Cmd) -> Option<Document> {
    let mut units = flatten(doc);
    let acted = match cmd {
        Cmd::ToggleBold => toggle_style(&mut units, sel, TextStyle::Bold),
        Cmd::ToggleItalic => toggle_style(&mut units, sel, TextStyle::Italic),
        Cmd::ToggleUnderline => toggle_style(&mut units, sel, TextStyle::Underline),
        Cmd::ToggleHeading(level) => toggle_heading(&mut units, sel, *level),
        Cmd::ToggleList { ordered } => toggle_list(&mut units, sel, *ordered),
        Cmd::Undo | Cmd::Redo => false,
    };
    acted.then(|| assemble(units))
}

/// Char range `[from, to)` selected inside each unit the selection touches.
pub(crate) fn char_ranges(units: &[Unit], sel: &Selection) -> Vec<(usize, usize, usize)> {
    let (start, end) = sel.range();
    (start.unit..=end.unit)
        .filter_map(|u| {
            let len = units.get(u)?.len();
            let from = if u == start.unit { start.offset.min(len) } else { 0 };
            let to = if u == end.unit { end.offset.min(len) } else { len };
            Some((u, from, to.max(from)))
        })
        .collect()
}

/// Indices of the units the selection touches, caret included.
pub(crate) fn touched_units(units: &[Unit], sel: &Selection) -> std::ops::Range<usize> {
    let (start, end) = sel.range();
    let last = (end.unit + 1).min(units.len());
    start.unit.min(last)..last
}

/// Whether every selected char already carries `style`. False when nothing
/// is selected.
pub(crate) fn selection_has_style(units: &[Unit], sel: &Selection, style: TextStyle) -> bool {
    let mut any = false;
    for (u, from, to) in char_ranges(units, sel) {
        let chars = explode(&units[u].runs);
        for (s, _) in &chars[from..to] {
            if *s != style {
                return false;
            }
            any = true;
        }
    }
    any
}

fn toggle_style(units: &mut [Unit], sel: &Selection, style: TextStyle) -> bool {
    if sel.is_collapsed() {
        return false;
    }
    let ranges = char_ranges(units, sel);
    if ranges.iter().all(|(_, from, to)| from == to) {
        return false;
    }
    let target = if selection_has_style(units, sel, style) {
        TextStyle::Plain
    } else {
        style
    };
    for (u, from, to) in ranges {
        let mut chars = explode(&units[u].runs);
        for (s, _) in &mut chars[from..to] {
            *s = target;
        }
        units[u].runs = implode(&chars);
    }
    true
}

fn toggle_heading(units: &mut [Unit], sel: &Selection, level: HeadingLevel) -> bool {
    let touched = touched_units(units, sel);
    if touched.is_empty() {
        return false;
    }
    let all_at_level = units[touched.clone()]
        .iter()
        .all(|u| u.kind == UnitKind::Heading(level));
    let kind = if all_at_level {
        UnitKind::Paragraph
    } else {
        UnitKind::Heading(level)
    };
    for unit in &mut units[touched] {
        unit.kind = kind;
    }
    true
}

fn toggle_list(units: &mut [Unit], sel: &Selection, ordered: bool) -> bool {
    let touched = touched_units(units, sel);
    if touched.is_empty() {
        return false;
    }
    let kinds: Vec<Option<(usize, bool)>> = units[touched.clone()].iter().map(Unit::list).collect();

    // already items of the requested kind: lift out of the list
    if kinds.iter().all(|k| matches!(k, Some((_, o)) if *o == ordered)) {
        for unit in &mut units[touched] {
            unit.kind = UnitKind::Paragraph;
        }
        return true;
    }

    // items of the other kind: switch their whole lists
    if kinds.iter().all(|k| matches!(k, Some((_, o)) if *o != ordered)) {
        let lists: Vec<usize> = kinds.iter().flatten().map(|(id, _)| *id).collect();
        for unit in units.iter_mut() {
            if let UnitKind::ListItem { list, .. } = unit.kind
                && lists.contains(&list)
            {
                unit.kind = UnitKind::ListItem { list, ordered };
            }
        }
        return true;
    }

    // anything else: wrap into one list, joining same-kind neighbours
    let joins = |u: Option<&Unit>| match u.and_then(Unit::list) {
        Some((id, o)) if o == ordered => Some(id),
        _ => None,
    };
    let fresh = units.iter().filter_map(Unit::list).map(|(id, _)| id + 1).max().unwrap_or(0);
    let before = touched.start.checked_sub(1).and_then(|i| units.get(i));
    let id = joins(before).unwrap_or(fresh);
    let after = joins(units.get(touched.end));

    for unit in &mut units[touched] {
        unit.kind = UnitKind::ListItem { list: id, ordered };
    }
    if let Some(next) = after
        && next != id
    {
        for unit in units.iter_mut() {
            if let UnitKind::ListItem { list, .. } = unit.kind
                && list == next
            {
                unit.kind = UnitKind::ListItem { list: id, ordered };
            }
        }
    }
    true
}
