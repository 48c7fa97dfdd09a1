//! Configuration options for Markdown conversion

/// What to do with a delimiter that has no closing partner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmatchedDelimiter {
    /// Keep the unpaired delimiter and the text after it as plain text
    #[default]
    Literal,
    /// Fail the conversion with [`crate::Error::UnmatchedDelimiter`]
    Strict,
}

/// How newlines inside a plain text run are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreaks {
    /// Emit newlines verbatim
    #[default]
    Preserve,
    /// Replace each newline with a single space
    Space,
}

/// Options for Markdown conversion
#[derive(Debug, Clone)]
pub struct Options {
    /// Handling of unpaired `**`, `_` and `` ` `` markers
    pub unmatched_delimiter: UnmatchedDelimiter,

    /// Rendering of newlines in plain text
    pub line_breaks: LineBreaks,

    /// Tag of the root container node
    pub root_tag: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unmatched_delimiter: UnmatchedDelimiter::Literal,
            line_breaks: LineBreaks::Preserve,
            root_tag: "div".to_string(),
        }
    }
}
