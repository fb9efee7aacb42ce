//! Paragraph extraction from a bounded article span.

use regex::Regex;

/// Extract raw paragraph fragments from an article span, in document order.
///
/// Matches the greedy single-line pattern `<p.+</p>` — maximal, so an input
/// line holding several paragraphs (or nested ones) collapses into one
/// capture. The matches are concatenated and re-split on `</p>`, and the
/// trailing segment after the last close marker is dropped: it is the
/// residue of the split, never a real paragraph.
///
/// A span with no paragraph markers produces an empty vector.
pub fn extract_paragraphs(span: &str) -> Vec<String> {
    let paragraph_re = Regex::new(r"<p.+</p>").unwrap();

    let joined: String = paragraph_re.find_iter(span).map(|m| m.as_str()).collect();

    let mut paragraphs: Vec<String> = joined.split("</p>").map(str::to_string).collect();
    paragraphs.pop();
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_paragraph() {
        let span = r#"</h1><p class="body">первый абзац</p><div>"#;
        let paragraphs = extract_paragraphs(span);
        assert_eq!(paragraphs, vec![r#"<p class="body">первый абзац"#]);
    }

    #[test]
    fn test_multiple_paragraphs_keep_order() {
        let span = "<p>один</p>\n<p>два</p>\n<p>три</p>";
        let paragraphs = extract_paragraphs(span);
        assert_eq!(paragraphs, vec!["<p>один", "<p>два", "<p>три"]);
    }

    #[test]
    fn test_paragraphs_on_one_line_merge_into_one_capture() {
        // Greedy matching is deliberate: two paragraphs on the same input
        // line arrive as a single capture and re-split on the close marker.
        let span = "<p>а</p><p>б</p>";
        let paragraphs = extract_paragraphs(span);
        assert_eq!(paragraphs, vec!["<p>а", "<p>б"]);
    }

    #[test]
    fn test_paragraph_spanning_lines_is_skipped() {
        let span = "<p>начало\nконец</p>";
        assert!(extract_paragraphs(span).is_empty());
    }

    #[test]
    fn test_no_markers_yields_empty_sequence() {
        assert!(extract_paragraphs("<div>нет абзацев</div>").is_empty());
        assert!(extract_paragraphs("").is_empty());
    }

    #[test]
    fn test_trailing_residue_discarded() {
        let span = "<p>текст</p> хвост";
        let paragraphs = extract_paragraphs(span);
        assert_eq!(paragraphs, vec!["<p>текст"]);
    }
}
