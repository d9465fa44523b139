/// A byte cursor over a single line of inline content.
///
/// Delimiters are ASCII, so every position the parser slices at (a marker or
/// either end of the input) is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.i)
    }

    pub fn byte_at(&self, i: usize) -> Option<u8> {
        self.s.as_bytes().get(i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Moves to an absolute byte index.
    pub fn seek(&mut self, i: usize) {
        self.i = i.min(self.s.len());
    }
}
