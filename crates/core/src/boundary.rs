//! Article boundary detection.
//!
//! Locates the substring of the raw markup believed to contain the article
//! body. This is a marker scan, not a parse: the span runs from the end of
//! the page's leading `<h1>` heading to the last structural hint that the
//! article is over.

/// Marker whose first occurrence opens the article span.
const SPAN_START_MARKER: &str = "</h1>";

/// Markers whose last occurrence closes the article span.
///
/// `/article` covers the closing tag of an `<article>` element;
/// `articleBody` covers schema.org annotations that trail the body.
const SPAN_END_MARKERS: [&str; 2] = ["/article", "articleBody"];

/// Returns the slice of `html` spanning the article body.
///
/// The span starts at the first `</h1>` and ends at the later of the last
/// `/article` and `articleBody` occurrences. Missing markers degrade
/// instead of failing: no start marker means the span opens at the top of
/// the document, and no end marker (or an end offset of zero) means it runs
/// to the end. A start at or past the end yields the empty span.
pub fn article_span(html: &str) -> &str {
    let start = html.find(SPAN_START_MARKER).unwrap_or(0);

    let end = SPAN_END_MARKERS.iter().filter_map(|marker| html.rfind(marker)).max().unwrap_or(0);
    let end = if end == 0 { html.len() } else { end };

    if start >= end {
        return "";
    }

    &html[start..end]
}
