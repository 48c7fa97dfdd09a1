//! Page title extraction

use crate::{Error, Result};

/// Return the text of the first line starting with `#`, without the
/// leading `#` run and surrounding whitespace.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .ok_or(Error::NoTitle)
}
