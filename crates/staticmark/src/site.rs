//! SiteGenerator - copies static assets and renders the content tree.

use std::fs;
use std::path::{Path, PathBuf};

use staticmark_core::{extract_title, Converter};

use crate::config::SiteConfig;
use crate::template::Template;
use crate::{Result, SiteError};

/// What a build produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of static files copied
    pub static_files: usize,
    /// Output paths of the rendered pages
    pub pages: Vec<PathBuf>,
}

/// The main service for building a site
pub struct SiteGenerator {
    config: SiteConfig,
    converter: Converter,
}

impl SiteGenerator {
    /// Create a SiteGenerator with default layout
    pub fn new() -> Self {
        Self::with_config(SiteConfig::default())
    }

    /// Create a SiteGenerator with a custom layout
    pub fn with_config(config: SiteConfig) -> Self {
        let converter = Converter::with_options(config.markdown.clone());
        Self { config, converter }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Copy static assets, then render every page
    pub fn build(&self) -> Result<BuildSummary> {
        let static_files = self.copy_static()?;
        let pages = self.generate_pages_recursive()?;
        log::info!(
            "built {} pages and copied {} static files into {}",
            pages.len(),
            static_files,
            self.config.output_dir.display()
        );
        Ok(BuildSummary {
            static_files,
            pages,
        })
    }

    /// Replace the output directory with a fresh copy of the static directory.
    ///
    /// Returns the number of files copied.
    pub fn copy_static(&self) -> Result<usize> {
        let output = &self.config.output_dir;
        if output.exists() {
            log::info!("cleaning {}", output.display());
            fs::remove_dir_all(output).map_err(SiteError::io(output))?;
        }

        if !self.config.static_dir.is_dir() {
            log::warn!(
                "static directory {} not found, nothing to copy",
                self.config.static_dir.display()
            );
            fs::create_dir_all(output).map_err(SiteError::io(output))?;
            return Ok(0);
        }

        copy_dir_recursive(&self.config.static_dir, output)
    }

    /// Render one Markdown file to `dest` through `template`
    pub fn generate_page(&self, from: &Path, template: &Template, dest: &Path) -> Result<()> {
        log::info!("generating {} from {}", dest.display(), from.display());

        let markdown = fs::read_to_string(from).map_err(SiteError::io(from))?;
        let title = extract_title(&markdown).map_err(SiteError::convert(from))?;
        let content = self
            .converter
            .convert_to_html(&markdown)
            .map_err(SiteError::convert(from))?;

        let page = template.render(&title, &content, &self.config.basepath);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
        }
        fs::write(dest, page).map_err(SiteError::io(dest))?;
        Ok(())
    }

    /// Render every `.md` file under the content directory to the mirrored
    /// `.html` path under the output directory.
    ///
    /// The first failing page aborts the run.
    pub fn generate_pages_recursive(&self) -> Result<Vec<PathBuf>> {
        let template = Template::load(&self.config.template_path)?;
        let mut pages = Vec::new();
        self.walk_content(Path::new(""), &template, &mut pages)?;
        Ok(pages)
    }

    fn walk_content(&self, relative: &Path, template: &Template, pages: &mut Vec<PathBuf>) -> Result<()> {
        let dir = self.config.content_dir.join(relative);

        for entry in sorted_entries(&dir)? {
            let name = entry.file_name();
            let source = dir.join(&name);
            let relative = relative.join(&name);

            if source.is_dir() {
                self.walk_content(&relative, template, pages)?;
            } else if source.extension().is_some_and(|ext| ext == "md") {
                let dest = self.config.output_dir.join(&relative).with_extension("html");
                self.generate_page(&source, template, &dest)?;
                pages.push(dest);
            } else {
                log::debug!("skipping non-markdown file {}", source.display());
            }
        }

        Ok(())
    }
}

impl Default for SiteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Directory entries in file-name order
fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .map_err(SiteError::io(dir))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(SiteError::io(dir))?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

fn copy_dir_recursive(from: &Path, to: &Path) -> Result<usize> {
    fs::create_dir_all(to).map_err(SiteError::io(to))?;
    let mut copied = 0;

    for entry in sorted_entries(from)? {
        let source = entry.path();
        let dest = to.join(entry.file_name());

        if source.is_dir() {
            copied += copy_dir_recursive(&source, &dest)?;
        } else {
            log::info!("copying {} -> {}", source.display(), dest.display());
            fs::copy(&source, &dest).map_err(SiteError::io(&source))?;
            copied += 1;
        }
    }

    Ok(copied)
}
