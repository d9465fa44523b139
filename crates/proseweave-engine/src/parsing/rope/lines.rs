use xi_rope::Rope;

use super::span::Span;

/// A single source line with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the newline if present).
    pub span: Span,
    /// The line text with its trailing `\n` / `\r\n` removed. A lone `\r`
    /// left inside the line reads as a space.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so spans account for newline bytes; the terminator is
/// stripped from `text` afterwards.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        let text = line.trim_end_matches(['\r', '\n']).replace('\r', " ");
        LineRef {
            span: Span { start, end: offset },
            text,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(s: &str) -> Vec<(Span, String)> {
        let rope = Rope::from(s);
        lines_with_spans(&rope).map(|l| (l.span, l.text)).collect()
    }

    #[test]
    fn spans_include_newlines() {
        assert_eq!(
            collect("ab\ncd"),
            vec![(Span::new(0, 3), "ab".into()), (Span::new(3, 5), "cd".into())]
        );
    }

    #[test]
    fn lone_carriage_return_reads_as_space() {
        assert_eq!(
            collect("a\rb\r\nc"),
            vec![(Span::new(0, 5), "a b".into()), (Span::new(5, 6), "c".into())]
        );
    }

    #[test]
    fn crlf_is_stripped_from_text() {
        assert_eq!(
            collect("x\r\n\r\ny"),
            vec![
                (Span::new(0, 3), "x".into()),
                (Span::new(3, 5), String::new()),
                (Span::new(5, 6), "y".into()),
            ]
        );
    }

    #[test]
    fn empty_rope_has_no_lines() {
        assert!(collect("").is_empty());
    }
}
