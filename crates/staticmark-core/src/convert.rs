//! Convert inline fragments to HTML leaf nodes

use crate::inline::{text_to_fragments, FragmentKind, TextFragment};
use crate::node::HtmlNode;
use crate::options::{LineBreaks, Options};
use crate::{Error, Result};

/// Convert one fragment to its HTML leaf
pub fn fragment_to_node(fragment: &TextFragment, options: &Options) -> Result<HtmlNode> {
    let content = fragment.content.as_str();

    let node = match fragment.kind {
        FragmentKind::Plain => match options.line_breaks {
            LineBreaks::Preserve => HtmlNode::text(content),
            LineBreaks::Space => HtmlNode::text(&content.replace('\n', " ")),
        },
        FragmentKind::Bold => HtmlNode::leaf("b", content),
        FragmentKind::Italic => HtmlNode::leaf("i", content),
        FragmentKind::Code => HtmlNode::leaf("code", content),
        FragmentKind::Link => {
            let url = require_url(fragment)?;
            HtmlNode::leaf_with_attrs("a", Some(content), vec![("href", url)])
        }
        FragmentKind::Image => {
            let url = require_url(fragment)?;
            HtmlNode::leaf_with_attrs("img", None, vec![("src", url), ("alt", content)])
        }
    };

    Ok(node)
}

fn require_url(fragment: &TextFragment) -> Result<&str> {
    fragment.url.as_deref().ok_or_else(|| {
        Error::Invariant(format!(
            "{:?} fragment `{}` has no url",
            fragment.kind, fragment.content
        ))
    })
}

/// Tokenize a text run and convert every fragment to a node
pub fn text_to_children(text: &str, options: &Options) -> Result<Vec<HtmlNode>> {
    text_to_fragments(text, options)?
        .iter()
        .map(|fragment| fragment_to_node(fragment, options))
        .collect()
}
