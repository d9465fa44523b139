use crate::model::{Block, HeadingLevel};
use crate::parsing::rope::span::Span;

/// What a single source line is, judged without surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading(HeadingLevel),
    ListItem,
    Blank,
    Plain,
}

/// A block produced by the builder together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockNode {
    pub block: Block,
    /// Byte span covering every source line that fed this block.
    pub span: Span,
    /// Number of source lines merged into this block.
    pub lines: usize,
}
