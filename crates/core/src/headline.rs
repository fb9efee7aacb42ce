//! Headline extraction and normalization.

use regex::Regex;

/// Opening marker for the headline slice (first occurrence).
const HEADLINE_OPEN: &str = "<h1";

/// Closing marker for the headline slice (last occurrence). The trailing
/// `>` is deliberately omitted so close tags carrying whitespace or
/// attributes (`</h1 >`) still terminate the slice; known quirk, kept.
const HEADLINE_CLOSE: &str = "</h1";

/// Extract the page headline and reduce it to clean Cyrillic text.
///
/// The slice runs from the first `<h1` to the last `</h1`; a missing marker
/// defaults its offset to zero, so absent or inverted markers yield the
/// empty headline rather than an error. Every character outside the
/// Cyrillic range becomes a space, whitespace runs collapse to single
/// spaces, and the result is trimmed.
pub fn extract_headline(html: &str) -> String {
    let start = html.find(HEADLINE_OPEN).unwrap_or(0);
    let end = html.rfind(HEADLINE_CLOSE).unwrap_or(0);

    let slice = if start < end { &html[start..end] } else { "" };

    let alpha_re = Regex::new(r"[^а-яА-Я]").unwrap();
    let spaced = alpha_re.replace_all(slice, " ");

    let whitespace_re = Regex::new(r"\s+").unwrap();
    let collapsed = whitespace_re.replace_all(&spaced, " ");

    collapsed.trim().to_string()
}
