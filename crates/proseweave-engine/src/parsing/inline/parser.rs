use crate::model::runs::{TextRun, push_run};

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Strong},
};

/// Parses a line's text into a sequence of [`TextRun`]s.
///
/// Strong markers are checked before single-star emphasis at each position.
/// Once a span is recognized its interior is taken verbatim: `**a *b* c**`
/// is one bold run containing the stars.
///
/// Unmatched markers are literal text. The returned runs always cover the
/// whole input and are normalized (adjacent plain text is merged).
pub fn parse_inline(s: &str) -> Vec<TextRun> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        if let Some(run) = try_parse_strong(&mut cur).or_else(|| try_parse_emphasis(&mut cur)) {
            push_run(&mut out, TextRun::Plain(s[text_start..start].to_string()));
            push_run(&mut out, run);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    push_run(&mut out, TextRun::Plain(s[text_start..].to_string()));
    out
}

/// Attempts `**interior**` at the current position.
///
/// The closer is the first `**` after at least one interior char. On failure
/// the cursor is left untouched.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<TextRun> {
    if !cur.starts_with(Strong::MARKER) {
        return None;
    }
    let inner_start = cur.pos() + Strong::MARKER.len();

    let mut scan = cur.clone();
    scan.seek(inner_start + 1);
    while !scan.eof() {
        let at = scan.pos();
        if scan.starts_with(Strong::MARKER) {
            let run = TextRun::Bold(cur.s[inner_start..at].to_string());
            cur.seek(at + Strong::MARKER.len());
            return Some(run);
        }
        scan.bump();
    }
    None
}

/// Attempts `*interior*` at the current position.
///
/// Stars adjacent to another star belong to strong markers and are neither
/// openers nor closers here.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<TextRun> {
    if cur.peek() != Some(Emphasis::MARKER) || is_double(cur, cur.pos()) {
        return None;
    }
    let inner_start = cur.pos() + 1;

    let mut scan = cur.clone();
    scan.seek(inner_start + 1);
    while !scan.eof() {
        let at = scan.pos();
        if scan.peek() == Some(Emphasis::MARKER) && !is_double(&scan, at) {
            let run = TextRun::Italic(cur.s[inner_start..at].to_string());
            cur.seek(at + 1);
            return Some(run);
        }
        scan.bump();
    }
    None
}

fn is_double(cur: &Cursor<'_>, at: usize) -> bool {
    let star = Some(Emphasis::MARKER);
    cur.byte_at(at + 1) == star || (at > 0 && cur.byte_at(at - 1) == star)
}
