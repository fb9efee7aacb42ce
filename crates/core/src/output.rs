//! Output path derivation and file writing.
//!
//! The output file path mirrors the source URL: host, then the URL path
//! with its trailing slash trimmed, then the configured extension.
//! Intermediate directories are created as needed.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::{OcherkError, Result};

/// Derive the output file path for a source URL.
///
/// `https://site.ru/news/item/` with extension `txt` maps to
/// `site.ru/news/item.txt`; a bare host maps to `site.ru.txt`.
pub fn output_path(url: &str, file_format: &str) -> Result<PathBuf> {
    let parsed = Url::parse(url).map_err(|e| OcherkError::InvalidUrl(e.to_string()))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| OcherkError::InvalidUrl(format!("no host in {}", url)))?;

    let path = parsed.path().trim_end_matches('/');

    Ok(PathBuf::from(format!("{}{}.{}", host, path, file_format)))
}

/// Write rendered article text to `path`, creating parent directories.
pub fn write_article(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, rendered)?;
    Ok(())
}
