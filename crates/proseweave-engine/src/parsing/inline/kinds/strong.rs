/// Strong emphasis (`**text**`), rendered as bold.
pub struct Strong;

impl Strong {
    pub const MARKER: &'static [u8] = b"**";
}
