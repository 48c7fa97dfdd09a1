//! Block segmentation and classification.
//!
//! A document is split on blank lines (`\n\n`). Each piece is classified by
//! its leading characters only; a paragraph that happens to begin with `#`
//! or `-` is classified as a heading or list.

/// Structural kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    CodeFence,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// A classified slice of the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockKind,
}

impl<'a> Block<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            kind: block_kind(text),
        }
    }
}

/// Split a document into classified blocks, in document order
pub fn markdown_to_blocks(markdown: &str) -> Vec<Block<'_>> {
    markdown
        .split("\n\n")
        .map(trim_one_newline)
        .filter(|piece| !piece.is_empty())
        .map(Block::new)
        .collect()
}

fn trim_one_newline(piece: &str) -> &str {
    let piece = piece.strip_prefix('\n').unwrap_or(piece);
    piece.strip_suffix('\n').unwrap_or(piece)
}

/// Classify a block by its prefix. First match wins.
pub fn block_kind(block: &str) -> BlockKind {
    if block.starts_with('#') {
        BlockKind::Heading
    } else if block.starts_with("```") {
        BlockKind::CodeFence
    } else if block.starts_with('>') {
        BlockKind::Quote
    } else if block.starts_with('-') {
        BlockKind::UnorderedList
    } else if block.starts_with("1.") {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}
