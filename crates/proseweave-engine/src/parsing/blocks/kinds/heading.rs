use crate::model::HeadingLevel;

/// ATX-style heading marker: one to three `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_DEPTH: usize = 3;

    /// Splits a heading line into its level and text.
    ///
    /// Returns `None` for four or more `#`, or when the hashes are not
    /// followed by a space (`#tag` is plain text).
    pub fn strip(line: &str) -> Option<(HeadingLevel, &str)> {
        let depth = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if depth == 0 || depth > Self::MAX_DEPTH {
            return None;
        }
        let text = line[depth..].strip_prefix(' ')?;
        let level = HeadingLevel::try_from(depth as u8).ok()?;
        Some((level, text))
    }
}
