//! # staticmark
//!
//! Build a static HTML site from a tree of Markdown files and one HTML
//! template.
//!
//! The site generator copies the static asset directory into the output
//! directory, then renders every `.md` file under the content directory to
//! the mirrored `.html` path. Each page's first heading fills the template's
//! `{{ Title }}` placeholder and the converted document fills `{{ Content }}`.
//!
//! ## Example
//!
//! ```rust
//! use staticmark::Template;
//!
//! let template = Template::new("<title>{{ Title }}</title><main>{{ Content }}</main>");
//! let page = template.render("Home", "<div><p>Hi</p></div>", "/");
//! assert_eq!(page, "<title>Home</title><main><div><p>Hi</p></div></main>");
//! ```

mod config;
mod site;
mod template;

use std::path::{Path, PathBuf};

pub use config::SiteConfig;
pub use site::{BuildSummary, SiteGenerator};
pub use template::Template;

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to convert {}: {source}", path.display())]
    Convert {
        path: PathBuf,
        #[source]
        source: staticmark_core::Error,
    },

    #[error("No title found in {}: add a `# Heading` line", path.display())]
    MissingTitle { path: PathBuf },
}

impl SiteError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
        move |source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn convert(path: &Path) -> impl FnOnce(staticmark_core::Error) -> SiteError + '_ {
        move |source| match source {
            staticmark_core::Error::NoTitle => SiteError::MissingTitle {
                path: path.to_path_buf(),
            },
            source => SiteError::Convert {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
