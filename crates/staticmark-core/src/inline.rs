//! Inline span tokenization.
//!
//! A text run starts out as a single plain fragment. A fixed sequence of
//! passes then splits plain fragments apart: first on the `**`, `_` and
//! `` ` `` delimiters, then on image markup, then on link markup. Fragments
//! produced by an earlier pass are never looked at again, so pass order
//! decides precedence.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::{Options, UnmatchedDelimiter};
use crate::{Error, Result};

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("image pattern is valid"));

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("link pattern is valid"));

/// Kind of an inline text fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Plain,
    Bold,
    Italic,
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

/// One typed run of inline text.
///
/// For links `content` is the anchor text, for images it is the alt text;
/// both carry a `url`. Other kinds have no url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub content: String,
    pub kind: FragmentKind,
    pub url: Option<String>,
}

impl TextFragment {
    pub fn new(content: &str, kind: FragmentKind) -> Self {
        Self {
            content: content.to_string(),
            kind,
            url: None,
        }
    }

    pub fn plain(content: &str) -> Self {
        Self::new(content, FragmentKind::Plain)
    }

    pub fn link(content: &str, url: &str) -> Self {
        Self {
            content: content.to_string(),
            kind: FragmentKind::Link,
            url: Some(url.to_string()),
        }
    }

    pub fn image(alt: &str, url: &str) -> Self {
        Self {
            content: alt.to_string(),
            kind: FragmentKind::Image,
            url: Some(url.to_string()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == FragmentKind::Plain
    }
}

/// A single tokenization step over the fragment list
#[derive(Debug, Clone, Copy)]
enum Pass {
    Delimiter(&'static str, FragmentKind),
    Images,
    Links,
}

/// Passes in application order. Images must run before links so that the
/// `!` of `![alt](url)` is consumed with the image.
const PASSES: [Pass; 5] = [
    Pass::Delimiter("**", FragmentKind::Bold),
    Pass::Delimiter("_", FragmentKind::Italic),
    Pass::Delimiter("`", FragmentKind::Code),
    Pass::Images,
    Pass::Links,
];

/// Tokenize a text run into typed fragments
pub fn text_to_fragments(text: &str, options: &Options) -> Result<Vec<TextFragment>> {
    let mut fragments = vec![TextFragment::plain(text)];

    for pass in PASSES {
        fragments = match pass {
            Pass::Delimiter(delimiter, kind) => {
                split_delimiter(fragments, delimiter, kind, options.unmatched_delimiter)?
            }
            Pass::Images => split_images(fragments)?,
            Pass::Links => split_links(fragments)?,
        };
    }

    log::trace!("tokenized {} bytes into {} fragments", text.len(), fragments.len());
    Ok(fragments)
}

/// Split every plain fragment on `delimiter`.
///
/// Parts at even positions stay plain, parts at odd positions become `kind`.
/// Empty parts are dropped. An odd number of delimiters leaves the last one
/// without a partner; see [`UnmatchedDelimiter`] for how that is handled.
pub fn split_delimiter(
    fragments: Vec<TextFragment>,
    delimiter: &str,
    kind: FragmentKind,
    unmatched: UnmatchedDelimiter,
) -> Result<Vec<TextFragment>> {
    let mut result = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if !fragment.is_plain() {
            result.push(fragment);
            continue;
        }

        let mut parts: Vec<String> = fragment.content.split(delimiter).map(str::to_string).collect();

        if parts.len() % 2 == 0 {
            match unmatched {
                UnmatchedDelimiter::Strict => {
                    return Err(Error::UnmatchedDelimiter {
                        delimiter: delimiter.to_string(),
                        text: fragment.content,
                    });
                }
                UnmatchedDelimiter::Literal => {
                    // Fold the trailing part back into the preceding plain part.
                    if let Some(tail) = parts.pop() {
                        if let Some(last) = parts.last_mut() {
                            last.push_str(delimiter);
                            last.push_str(&tail);
                        }
                    }
                }
            }
        }

        for (index, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if index % 2 == 0 { FragmentKind::Plain } else { kind };
            result.push(TextFragment::new(part, part_kind));
        }
    }

    Ok(result)
}

/// Split plain fragments on `![alt](url)` markup
pub fn split_images(fragments: Vec<TextFragment>) -> Result<Vec<TextFragment>> {
    split_pattern(fragments, &IMAGE_PATTERN, TextFragment::image)
}

/// Split plain fragments on `[text](url)` markup
pub fn split_links(fragments: Vec<TextFragment>) -> Result<Vec<TextFragment>> {
    split_pattern(fragments, &LINK_PATTERN, TextFragment::link)
}

fn split_pattern(
    fragments: Vec<TextFragment>,
    pattern: &Regex,
    make: fn(&str, &str) -> TextFragment,
) -> Result<Vec<TextFragment>> {
    let mut result = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if !fragment.is_plain() {
            result.push(fragment);
            continue;
        }

        let text = fragment.content.as_str();
        let mut last = 0;

        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
                let matched = caps.get(0).map(|m| m.as_str()).unwrap_or(text);
                return Err(Error::MalformedSpan(matched.to_string()));
            };

            if whole.start() > last {
                result.push(TextFragment::plain(&text[last..whole.start()]));
            }
            result.push(make(label.as_str(), url.as_str()));
            last = whole.end();
        }

        if last < text.len() {
            result.push(TextFragment::plain(&text[last..]));
        }
    }

    Ok(result)
}
