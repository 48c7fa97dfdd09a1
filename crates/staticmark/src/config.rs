//! Site layout configuration

use std::path::PathBuf;

use staticmark_core::Options;

/// Where the site's inputs live and where output goes
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Markdown source tree
    pub content_dir: PathBuf,

    /// Assets copied verbatim into the output directory
    pub static_dir: PathBuf,

    /// Output directory (deleted and recreated on every build)
    pub output_dir: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template_path: PathBuf,

    /// Prefix substituted for root-relative `href="/` and `src="/` links
    pub basepath: String,

    /// Markdown conversion options
    pub markdown: Options,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template_path: PathBuf::from("template.html"),
            basepath: "/".to_string(),
            markdown: Options::default(),
        }
    }
}
