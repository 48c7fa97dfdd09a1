//! Page template loading and placeholder substitution

use std::fs;
use std::path::Path;

use crate::{Result, SiteError};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML page template
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template from disk
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(SiteError::io(path))?;
        Ok(Self::new(source))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fill in the placeholders, then point root-relative `href` and `src`
    /// attributes at `basepath`.
    pub fn render(&self, title: &str, content: &str, basepath: &str) -> String {
        let page = self
            .source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content);

        if basepath == "/" {
            return page;
        }

        page.replace("href=\"/", &format!("href=\"{}", basepath))
            .replace("src=\"/", &format!("src=\"{}", basepath))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_placeholders() {
        let template = Template::new("<h1>{{ Title }}</h1>{{ Content }}<p>{{ Title }}</p>");
        assert_eq!(
            template.render("Hello", "<div>body</div>", "/"),
            "<h1>Hello</h1><div>body</div><p>Hello</p>"
        );
    }

    #[test]
    fn test_render_rewrites_root_links() {
        let template = Template::new("<link href=\"/index.css\">{{ Content }}");
        let content = "<a href=\"/blog\">blog</a><img src=\"/cat.png\" alt=\"cat\"></img><a href=\"https://x.dev\">x</a>";
        assert_eq!(
            template.render("t", content, "/site/"),
            "<link href=\"/site/index.css\"><a href=\"/site/blog\">blog</a>\
             <img src=\"/site/cat.png\" alt=\"cat\"></img><a href=\"https://x.dev\">x</a>"
        );
    }

    #[test]
    fn test_load_missing_template() {
        let err = Template::load(Path::new("/definitely/not/here.html")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }
}
