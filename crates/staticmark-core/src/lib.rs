//! staticmark-core - Markdown to HTML node tree conversion
//!
//! This crate turns a constrained Markdown dialect into a tree of HTML nodes
//! and serializes that tree to an HTML string. It is used by `staticmark`
//! to render every page of a static site.
//!
//! # Architecture
//!
//! ```text
//!                   ┌─────────┐    ┌──────────┐    ┌───────────┐
//! Markdown String ─▶│ Blocks  │───▶│ Builder  │───▶│ HTML Node │──▶ HTML String
//!                   └─────────┘    └──────────┘    └───────────┘
//!                                       │ ▲
//!                                       ▼ │
//!                              ┌──────────────────┐
//!                              │ Inline Fragments │
//!                              └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use staticmark_core::{convert_document, extract_title};
//!
//! let markdown = "# Hi\n\nThis is **bold**.";
//!
//! let root = convert_document(markdown).unwrap();
//! assert_eq!(
//!     root.to_html().unwrap(),
//!     "<div><h1>Hi</h1><p>This is <b>bold</b>.</p></div>"
//! );
//! assert_eq!(extract_title(markdown).unwrap(), "Hi");
//! ```

mod block;
mod builder;
mod convert;
mod inline;
mod node;
mod options;
mod title;

pub use block::{block_kind, markdown_to_blocks, Block, BlockKind};
pub use builder::{convert_document, convert_document_with, Converter};
pub use convert::{fragment_to_node, text_to_children};
pub use inline::{
    split_delimiter, split_images, split_links, text_to_fragments, FragmentKind, TextFragment,
};
pub use node::{Attributes, HtmlNode};
pub use options::{LineBreaks, Options, UnmatchedDelimiter};
pub use title::extract_title;

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Structure error: {0}")]
    Structure(String),

    #[error("Malformed span: {0}")]
    MalformedSpan(String),

    #[error("No title found: document has no heading line")]
    NoTitle,

    #[error("Unmatched delimiter `{delimiter}` in: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    #[error("Invariant violation: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
