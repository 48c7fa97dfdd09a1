//! HTML node tree and serialization.
//!
//! A node is either a leaf (an optional tag around a text value) or a parent
//! (a tag around an ordered list of child nodes). Attributes keep insertion
//! order so the rendered output is deterministic.

use indexmap::IndexMap;

use crate::{Error, Result};

/// Ordered attribute map (`key="value"` pairs render in insertion order)
pub type Attributes = IndexMap<String, String>;

/// A node of the rendered HTML tree
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// A text run (no tag) or a self-contained element such as `<b>text</b>`
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },

    /// An element whose content is the serialization of its children
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Create an untagged text leaf, emitted verbatim
    pub fn text(value: &str) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.to_string()),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf without attributes
    pub fn leaf(tag: &str, value: &str) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf with attributes in the given order
    pub fn leaf_with_attrs(tag: &str, value: Option<&str>, attrs: Vec<(&str, &str)>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.map(str::to_string),
            attributes: collect_attrs(attrs),
        }
    }

    /// Create a parent node
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Create a parent node with attributes in the given order
    pub fn parent_with_attrs(tag: &str, children: Vec<HtmlNode>, attrs: Vec<(&str, &str)>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attributes: collect_attrs(attrs),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf { .. })
    }

    /// Tag name, `None` for plain text leaves
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Text value of a leaf
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// Children of a parent (empty for leaves)
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Serialize this node and its descendants to an HTML string.
    ///
    /// Fails with [`Error::Structure`] if any parent in the tree has an empty
    /// tag or no children.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::with_capacity(256);
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value.as_deref().unwrap_or("");
                match tag {
                    Some(tag) => {
                        open_tag(tag, attributes, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                    None => out.push_str(value),
                }
            }

            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(Error::Structure("parent node must have a tag".to_string()));
                }
                if children.is_empty() {
                    return Err(Error::Structure(format!("<{}> must have children", tag)));
                }
                open_tag(tag, attributes, out);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if !attributes.is_empty() {
        out.push(' ');
        out.push_str(&attributes_string(attributes));
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Render attributes as space-joined `key="value"` pairs
fn attributes_string(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_leaf() {
        let node = HtmlNode::text("Hello World");
        assert_eq!(node.to_html().unwrap(), "Hello World");
        assert!(node.is_leaf());
        assert_eq!(node.tag(), None);
    }

    #[test]
    fn test_tagged_leaf() {
        let node = HtmlNode::leaf("p", "This is a paragraph of text.");
        assert_eq!(node.to_html().unwrap(), "<p>This is a paragraph of text.</p>");
    }

    #[test]
    fn test_leaf_attributes_keep_insertion_order() {
        let node = HtmlNode::leaf_with_attrs(
            "a",
            Some("Click me!"),
            vec![("href", "https://www.google.com"), ("target", "_blank")],
        );
        assert_eq!(
            node.to_html().unwrap(),
            "<a href=\"https://www.google.com\" target=\"_blank\">Click me!</a>"
        );
        assert_eq!(node.attr("target"), Some("_blank"));
    }

    #[test]
    fn test_leaf_without_value() {
        let img = HtmlNode::leaf_with_attrs("img", None, vec![("src", "cat.png"), ("alt", "A cat")]);
        assert_eq!(img.to_html().unwrap(), "<img src=\"cat.png\" alt=\"A cat\"></img>");
    }

    #[test]
    fn test_parent_with_mixed_children() {
        let node = HtmlNode::parent(
            "p",
            vec![
                HtmlNode::leaf("b", "Bold text"),
                HtmlNode::text("Normal text"),
                HtmlNode::leaf("i", "italic text"),
                HtmlNode::text("Normal text"),
            ],
        );
        assert_eq!(
            node.to_html().unwrap(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_nested_parents() {
        let grandchild = HtmlNode::leaf("b", "grandchild");
        let child = HtmlNode::parent("span", vec![grandchild]);
        let parent = HtmlNode::parent_with_attrs("div", vec![child], vec![("class", "wrap")]);
        assert_eq!(
            parent.to_html().unwrap(),
            "<div class=\"wrap\"><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn test_parent_without_children_fails() {
        let node = HtmlNode::parent("ul", vec![]);
        assert!(matches!(node.to_html(), Err(Error::Structure(_))));
    }

    #[test]
    fn test_parent_without_tag_fails() {
        let node = HtmlNode::parent("", vec![HtmlNode::text("x")]);
        assert!(matches!(node.to_html(), Err(Error::Structure(_))));
    }

    #[test]
    fn test_structure_error_deep_in_tree() {
        let empty = HtmlNode::parent("li", vec![]);
        let root = HtmlNode::parent("div", vec![HtmlNode::parent("ol", vec![empty])]);
        assert!(matches!(root.to_html(), Err(Error::Structure(_))));
    }
}
