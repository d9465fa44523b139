use serde::{Deserialize, Serialize};

/// The single inline style a run carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextStyle {
    Plain,
    Bold,
    Italic,
    /// Only ever produced by the command layer or by `<u>` markup.
    Underline,
}

/// A leaf span of inline text carrying at most one style.
///
/// Runs never nest: bold-inside-italic is not representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextRun {
    Plain(String),
    Bold(String),
    Italic(String),
    Underline(String),
}

impl TextRun {
    pub fn new(style: TextStyle, text: impl Into<String>) -> Self {
        let text = text.into();
        match style {
            TextStyle::Plain => TextRun::Plain(text),
            TextStyle::Bold => TextRun::Bold(text),
            TextStyle::Italic => TextRun::Italic(text),
            TextStyle::Underline => TextRun::Underline(text),
        }
    }

    pub fn style(&self) -> TextStyle {
        match self {
            TextRun::Plain(_) => TextStyle::Plain,
            TextRun::Bold(_) => TextStyle::Bold,
            TextRun::Italic(_) => TextStyle::Italic,
            TextRun::Underline(_) => TextStyle::Underline,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TextRun::Plain(t) | TextRun::Bold(t) | TextRun::Italic(t) | TextRun::Underline(t) => t,
        }
    }

    fn text_mut(&mut self) -> &mut String {
        match self {
            TextRun::Plain(t) | TextRun::Bold(t) | TextRun::Italic(t) | TextRun::Underline(t) => t,
        }
    }

    /// Length in chars (not bytes); selections address text by char offset.
    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }
}

/// Appends `run` to `runs`, dropping it when empty and merging it into the
/// previous run when both share a style.
pub fn push_run(runs: &mut Vec<TextRun>, run: TextRun) {
    if run.text().is_empty() {
        return;
    }
    if let Some(last) = runs.last_mut()
        && last.style() == run.style()
    {
        last.text_mut().push_str(run.text());
        return;
    }
    runs.push(run);
}

/// Rebuilds a run sequence so it holds no empty runs and no two adjacent runs
/// share a style.
pub fn normalize(runs: Vec<TextRun>) -> Vec<TextRun> {
    let mut out = Vec::with_capacity(runs.len());
    for run in runs {
        push_run(&mut out, run);
    }
    out
}

/// Concatenated text of a run sequence with all styling dropped.
pub fn plain_text(runs: &[TextRun]) -> String {
    runs.iter().map(TextRun::text).collect()
}

/// Total length of a run sequence in chars.
pub fn char_len(runs: &[TextRun]) -> usize {
    runs.iter().map(TextRun::char_len).sum()
}
