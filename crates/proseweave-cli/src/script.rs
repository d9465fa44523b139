//! Command scripts: one editing step per line.
//!
//! ```text
//! select 0:0 1:4
//! bold
//! h2
//! undo
//! ```
//!
//! Blank lines and lines starting with `//` are ignored.

use anyhow::{Context, Result, anyhow, bail};
use proseweave_engine::{
    editing::{Cmd, Position, Selection},
    model::HeadingLevel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Select(Selection),
    SelectAll,
    Apply(Cmd),
}

pub fn parse_script(script: &str) -> Result<Vec<Step>> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with("//")
        })
        .map(|(i, line)| parse_step(line.trim()).with_context(|| format!("script line {}", i + 1)))
        .collect()
}

fn parse_step(line: &str) -> Result<Step> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        bail!("empty command");
    };
    let step = match name {
        "select" => {
            let anchor = parse_position(words.next())?;
            let head = match words.next() {
                Some(word) => parse_position(Some(word))?,
                None => anchor,
            };
            Step::Select(Selection::new(anchor, head))
        }
        "all" => Step::SelectAll,
        "bold" => Step::Apply(Cmd::ToggleBold),
        "italic" => Step::Apply(Cmd::ToggleItalic),
        "underline" => Step::Apply(Cmd::ToggleUnderline),
        "h1" => Step::Apply(Cmd::ToggleHeading(HeadingLevel::H1)),
        "h2" => Step::Apply(Cmd::ToggleHeading(HeadingLevel::H2)),
        "h3" => Step::Apply(Cmd::ToggleHeading(HeadingLevel::H3)),
        "bullet" => Step::Apply(Cmd::ToggleList { ordered: false }),
        "ordered" => Step::Apply(Cmd::ToggleList { ordered: true }),
        "undo" => Step::Apply(Cmd::Undo),
        "redo" => Step::Apply(Cmd::Redo),
        other => bail!("unknown command '{other}'"),
    };
    if let Some(extra) = words.next() {
        bail!("unexpected argument '{extra}' after '{name}'");
    }
    Ok(step)
}

/// `unit:offset`, both zero-based.
fn parse_position(word: Option<&str>) -> Result<Position> {
    let word = word.ok_or_else(|| anyhow!("select needs a position like 0:3"))?;
    let (unit, offset) = word
        .split_once(':')
        .ok_or_else(|| anyhow!("position '{word}' is not unit:offset"))?;
    Ok(Position::new(
        unit.parse().with_context(|| format!("bad unit in '{word}'"))?,
        offset
            .parse()
            .with_context(|| format!("bad offset in '{word}'"))?,
    ))
}
