//! Text reflow: dedent and greedy word-wrap at a fixed column width.

/// Default column width for wrapped output.
pub const DEFAULT_WIDTH: usize = 80;

/// Reflow cleaned paragraphs into a single output body.
///
/// Each paragraph is dedented, wrapped at `width` columns, and followed by
/// a line break. An empty paragraph contributes just the line break.
pub fn reflow(paragraphs: &[String], width: usize) -> String {
    let mut body = String::new();

    for paragraph in paragraphs {
        let dedented = dedent(paragraph);
        body.push_str(&fill(&dedented, width));
        body.push('\n');
    }

    body
}

/// Remove the common leading whitespace of a paragraph's non-blank lines.
///
/// Lines that are entirely whitespace do not participate in computing the
/// common prefix.
pub fn dedent(text: &str) -> String {
    let mut prefix: Option<&str> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start().len()];
        prefix = Some(match prefix {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }

    let prefix = prefix.unwrap_or("");
    if prefix.is_empty() {
        return text.to_string();
    }

    text.lines()
        .map(|line| line.strip_prefix(prefix).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, ca), cb)| ca == cb)
        .last()
        .map(|((i, ca), _)| i + ca.len_utf8())
        .unwrap_or(0);
    &a[..len]
}

/// Greedy word-wrap: words join with single spaces, lines break only at
/// whitespace, and a word longer than the width keeps its own over-long
/// line unsplit. Widths are counted in characters, not bytes.
pub fn fill(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
