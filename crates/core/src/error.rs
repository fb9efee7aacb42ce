//! Error types for ocherk operations.
//!
//! This module defines the main error type [`OcherkError`] which represents
//! all possible errors that can occur during fetching, decoding, link
//! rewriting, and output writing.
//!
//! # Example
//!
//! ```rust
//! use ocherk_core::{OcherkError, Result};
//!
//! fn output_name(host: &str) -> Result<String> {
//!     if host.is_empty() {
//!         return Err(OcherkError::InvalidUrl("missing host".to_string()));
//!     }
//!     Ok(format!("{host}.txt"))
//! }
//! ```

use thiserror::Error;

/// Main error type for article extraction operations.
///
/// Only the fetch family (`HttpError`, `Timeout`, `InvalidUrl`) is fatal to
/// a run; the remaining variants are either recovered locally by their
/// producing module or surfaced at the output boundary.
#[derive(Error, Debug)]
pub enum OcherkError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed, is missing a host, or is
    /// otherwise malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Every candidate encoding failed to decode the page body.
    ///
    /// The candidates are tried in order; a candidate producing malformed
    /// sequences is skipped with a warning. This error means the whole
    /// chain was exhausted.
    #[error("Could not decode page body (tried: {tried})")]
    Decoding { tried: String },

    /// An anchor fragment was found but no URL could be extracted from it.
    ///
    /// Recovered locally by the link rewriter: the paragraph passes through
    /// unmodified.
    #[error("No URL found in anchor fragment: {0}")]
    LinkExtraction(String),

    /// File write errors.
    ///
    /// Wraps standard I/O errors for output file operations.
    #[error("Failed to write output: {0}")]
    WriteError(#[from] std::io::Error),
}

/// Result type alias for OcherkError.
///
/// This is a convenience alias for `std::result::Result<T, OcherkError>`.
pub type Result<T> = std::result::Result<T, OcherkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OcherkError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_timeout_error() {
        let err = OcherkError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_decoding_error_lists_candidates() {
        let err = OcherkError::Decoding { tried: "utf-8, windows-1251".to_string() };
        assert!(err.to_string().contains("utf-8"));
        assert!(err.to_string().contains("windows-1251"));
    }

    #[test]
    fn test_link_extraction_error() {
        let err = OcherkError::LinkExtraction("<a href=>".to_string());
        assert!(err.to_string().contains("anchor fragment"));
    }
}
