//! Build the HTML node tree for a whole document.
//!
//! Every block becomes one parent node under a single root container.
//! Inline markup inside headings, quotes, list items and paragraphs goes
//! through the inline tokenizer; code fence content is kept literal.

use crate::block::{markdown_to_blocks, Block, BlockKind};
use crate::convert::text_to_children;
use crate::node::HtmlNode;
use crate::options::Options;
use crate::Result;

/// Convert a Markdown document to its root HTML node with default options
pub fn convert_document(markdown: &str) -> Result<HtmlNode> {
    convert_document_with(markdown, &Options::default())
}

/// Convert a Markdown document to its root HTML node
pub fn convert_document_with(markdown: &str, options: &Options) -> Result<HtmlNode> {
    Converter::with_options(options.clone()).convert(markdown)
}

/// Reusable document converter
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Convert a document to its root node
    pub fn convert(&self, markdown: &str) -> Result<HtmlNode> {
        let blocks = markdown_to_blocks(markdown);
        log::debug!("segmented document into {} blocks", blocks.len());

        let children = blocks
            .iter()
            .map(|block| self.block_to_node(block))
            .collect::<Result<Vec<_>>>()?;

        Ok(HtmlNode::parent(&self.options.root_tag, children))
    }

    /// Convert a document straight to an HTML string
    pub fn convert_to_html(&self, markdown: &str) -> Result<String> {
        self.convert(markdown)?.to_html()
    }

    /// Convert one classified block to its parent node
    pub fn block_to_node(&self, block: &Block) -> Result<HtmlNode> {
        log::trace!("building {:?} block", block.kind);

        match block.kind {
            BlockKind::Heading => self.heading(block.text),
            BlockKind::CodeFence => Ok(code_fence(block.text)),
            BlockKind::Quote => self.quote(block.text),
            BlockKind::UnorderedList => self.unordered_list(block.text),
            BlockKind::OrderedList => self.ordered_list(block.text),
            BlockKind::Paragraph => Ok(HtmlNode::parent("p", self.children(block.text)?)),
        }
    }

    fn children(&self, text: &str) -> Result<Vec<HtmlNode>> {
        text_to_children(text, &self.options)
    }

    fn heading(&self, block: &str) -> Result<HtmlNode> {
        let level = heading_level(block);
        let rest = block.trim_start_matches('#');
        let content = rest.strip_prefix(' ').unwrap_or(rest).trim();
        Ok(HtmlNode::parent(&format!("h{}", level), self.children(content)?))
    }

    fn quote(&self, block: &str) -> Result<HtmlNode> {
        let joined = block
            .lines()
            .map(|line| line.trim_start_matches(|c: char| c == '>' || c == ' ').trim())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(HtmlNode::parent("blockquote", self.children(&joined)?))
    }

    fn unordered_list(&self, block: &str) -> Result<HtmlNode> {
        let items = block
            .lines()
            .filter_map(|line| line.strip_prefix("- "))
            .map(|item| self.list_item(item.trim()))
            .collect::<Result<Vec<_>>>()?;
        Ok(HtmlNode::parent("ul", items))
    }

    fn ordered_list(&self, block: &str) -> Result<HtmlNode> {
        let mut items = Vec::new();
        for line in block.lines() {
            match line.split_once(". ") {
                Some((_, item)) => items.push(self.list_item(item.trim())?),
                // Lines without a number marker still become items
                None if !line.trim().is_empty() => items.push(self.list_item(line.trim())?),
                None => {}
            }
        }
        Ok(HtmlNode::parent("ol", items))
    }

    fn list_item(&self, text: &str) -> Result<HtmlNode> {
        Ok(HtmlNode::parent("li", self.children(text)?))
    }
}

/// Number of leading `#` characters
fn heading_level(block: &str) -> usize {
    block.chars().take_while(|&c| c == '#').count()
}

fn code_fence(block: &str) -> HtmlNode {
    let code = block.trim_matches('`').trim_start_matches('\n');
    let code = HtmlNode::parent("code", vec![HtmlNode::text(code)]);
    HtmlNode::parent("pre", vec![code])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn to_html(markdown: &str) -> String {
        convert_document(markdown).unwrap().to_html().unwrap()
    }

    #[test]
    fn test_heading_and_paragraph() {
        let root = convert_document("# Hi\n\nThis is **bold**.").unwrap();
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].tag(), Some("h1"));
        assert_eq!(root.children()[1].children().len(), 3);
        assert_eq!(
            root.to_html().unwrap(),
            "<div><h1>Hi</h1><p>This is <b>bold</b>.</p></div>"
        );
    }

    #[test]
    fn test_heading_levels() {
        let root = convert_document("### Title").unwrap();
        let heading = &root.children()[0];
        assert_eq!(heading.tag(), Some("h3"));
        assert_eq!(heading.children(), &[HtmlNode::text("Title")][..]);
        assert_eq!(to_html("###### Deep _one_"), "<div><h6>Deep <i>one</i></h6></div>");
    }

    #[test]
    fn test_heading_level_is_not_capped() {
        assert_eq!(to_html("####### seven"), "<div><h7>seven</h7></div>");
    }

    #[test]
    fn test_plain_paragraph_keeps_newlines() {
        let md = "just some words\nand a second line";
        assert_eq!(to_html(md), "<div><p>just some words\nand a second line</p></div>");
    }

    #[test]
    fn test_paragraphs() {
        let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
        assert_eq!(
            to_html(md),
            "<div><p>This is <b>bolded</b> paragraph\ntext in a p\ntag here</p>\
             <p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
        );
    }

    #[test]
    fn test_code_block_is_literal() {
        let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
        assert_eq!(
            to_html(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn test_quote_lines_are_joined() {
        let md = "> This is a\n> blockquote with **bold**\n>and no space";
        assert_eq!(
            to_html(md),
            "<div><blockquote>This is a blockquote with <b>bold</b> and no space</blockquote></div>"
        );
    }

    #[test]
    fn test_unordered_list() {
        let md = "- first [link](/a)\n- second\nnot an item\n- third";
        assert_eq!(
            to_html(md),
            "<div><ul><li>first <a href=\"/a\">link</a></li><li>second</li><li>third</li></ul></div>"
        );
    }

    #[test]
    fn test_unordered_list_drops_unmarked_lines() {
        let root = convert_document("- one\n-two\n  - nested").unwrap();
        assert_eq!(root.children()[0].children().len(), 1);
    }

    #[test]
    fn test_ordered_list() {
        let md = "1. one\n2. _two_\n7. seven";
        assert_eq!(
            to_html(md),
            "<div><ol><li>one</li><li><i>two</i></li><li>seven</li></ol></div>"
        );
    }

    #[test]
    fn test_ordered_list_fallback_item() {
        let root = convert_document("1. first\nnot numbered\n   ").unwrap();
        let list = &root.children()[0];
        assert_eq!(list.tag(), Some("ol"));
        assert_eq!(list.children().len(), 2);
        assert_eq!(list.children()[1].to_html().unwrap(), "<li>not numbered</li>");
    }

    #[test]
    fn test_image_paragraph() {
        assert_eq!(
            to_html("![cat](/images/cat.png)"),
            "<div><p><img src=\"/images/cat.png\" alt=\"cat\"></img></p></div>"
        );
    }

    #[test]
    fn test_mixed_document() {
        let md = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

> All that is gold does not glitter

- Gandalf
- Bilbo

1. Fellowship
2. Two Towers

```
func main() {}
```";
        assert_eq!(
            to_html(md),
            "<div><h1>Tolkien Fan Club</h1>\
             <p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"></img></p>\
             <blockquote>All that is gold does not glitter</blockquote>\
             <ul><li>Gandalf</li><li>Bilbo</li></ul>\
             <ol><li>Fellowship</li><li>Two Towers</li></ol>\
             <pre><code>func main() {}\n</code></pre></div>"
        );
    }

    #[test]
    fn test_custom_root_tag() {
        let converter = Converter::with_options(Options {
            root_tag: "article".to_string(),
            ..Default::default()
        });
        assert_eq!(converter.convert_to_html("hello").unwrap(), "<article><p>hello</p></article>");
    }

    #[test]
    fn test_empty_heading_fails_to_serialize() {
        let root = convert_document("#").unwrap();
        assert!(matches!(root.to_html(), Err(Error::Structure(_))));
    }

    #[test]
    fn test_empty_document_fails_to_serialize() {
        let root = convert_document("").unwrap();
        assert!(matches!(root.to_html(), Err(Error::Structure(_))));
    }

    #[test]
    fn test_reparse_preserves_fragment_kinds() {
        use crate::inline::{text_to_fragments, FragmentKind};

        let text = "a **b** _c_ `d` [e](f)";
        let kinds = |t: &str| -> Vec<FragmentKind> {
            text_to_fragments(t, &Options::default())
                .unwrap()
                .into_iter()
                .map(|f| f.kind)
                .collect()
        };
        let rendered = to_html(text);
        let inner = rendered
            .trim_start_matches("<div><p>")
            .trim_end_matches("</p></div>")
            .replace("<b>", "**")
            .replace("</b>", "**")
            .replace("<i>", "_")
            .replace("</i>", "_")
            .replace("<code>", "`")
            .replace("</code>", "`")
            .replace("<a href=\"f\">e</a>", "[e](f)");
        assert_eq!(kinds(&inner), kinds(text));
    }
}
