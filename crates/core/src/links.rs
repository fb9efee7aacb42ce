//! Hyperlink rewriting and residual markup stripping.
//!
//! Anchors inside a paragraph are replaced by a bracketed literal reference
//! to their URL, `" [http://...] "`, so the citation survives as plain text.
//! Whatever markup remains after the substitution is stripped, with one
//! deliberate exception: tag-like sequences whose content carries Cyrillic
//! are kept, since angle-bracketed text in the body is sometimes prose
//! rather than structure.

use regex::Regex;

use crate::{OcherkError, Result};

/// Lenient anchor pattern: an opening anchor tag, optionally preceded by
/// one other tag, greedy through the last `>` on the line.
const ANCHOR_PATTERN: &str = r"(<.*>)?<a href.*>";

/// URL-like token: `http`/`https` scheme or a `www.` prefix, then a run of
/// non-whitespace. The run stops at `"`, `>`, or whitespace so the token
/// never swallows the tail of the surrounding tag.
const URL_PATTERN: &str = r#"((http(s)?://)|(www\.))[^\s">]+"#;

/// Entity-like sequences (`&...;`, up to five inner characters) and
/// tag-like sequences with no Cyrillic content.
const NOISE_PATTERN: &str = r"(&.{0,5};)*(<[^а-яА-Я.,]+>)*";

/// Extract the URL token from an anchor fragment.
///
/// An anchor whose href holds nothing URL-shaped (a relative path, an empty
/// attribute) is a [`OcherkError::LinkExtraction`] — the caller decides how
/// to degrade.
pub fn extract_url(fragment: &str) -> Result<&str> {
    let url_re = Regex::new(URL_PATTERN).unwrap();

    url_re
        .find(fragment)
        .map(|m| m.as_str())
        .ok_or_else(|| OcherkError::LinkExtraction(fragment.to_string()))
}

/// Rewrite the first anchor fragment of a paragraph into a bracketed
/// reference, then strip residual markup noise.
///
/// Every occurrence of the matched fragment is replaced with
/// `" [URL] "` (literal brackets, space-padded). A paragraph with no anchor
/// passes through to the stripping step unchanged, as does a paragraph
/// whose anchor yields no URL — that failure is logged and recovered here.
pub fn rewrite_paragraph(paragraph: &str) -> String {
    let anchor_re = Regex::new(ANCHOR_PATTERN).unwrap();

    let rewritten = match anchor_re.find(paragraph) {
        Some(anchor) => match extract_url(anchor.as_str()) {
            Ok(url) => paragraph.replace(anchor.as_str(), &format!(" [{}] ", url)),
            Err(e) => {
                eprintln!("Warning: {}", e);
                paragraph.to_string()
            }
        },
        None => paragraph.to_string(),
    };

    strip_markup(&rewritten)
}

/// Remove entity-like and structural tag-like sequences from a paragraph.
///
/// Tags whose content contains Cyrillic (or `.`/`,`) survive: they read as
/// text, not structure. Stripping its own output again removes nothing.
pub fn strip_markup(text: &str) -> String {
    let noise_re = Regex::new(NOISE_PATTERN).unwrap();
    noise_re.replace_all(text, "").to_string()
}
