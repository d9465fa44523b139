/// Single-star emphasis (`*text*`), rendered as italic.
///
/// A star that touches another star belongs to a strong marker and never
/// opens or closes emphasis.
pub struct Emphasis;

impl Emphasis {
    pub const MARKER: u8 = b'*';
}
