/// Unordered list item marker. Ordered markers (`1.`) are not recognized in
/// text input.
pub struct ListItem;

impl ListItem {
    pub const MARKER: &'static str = "- ";

    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}
