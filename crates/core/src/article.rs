//! Article output type with headline, body paragraphs, and rendering.
//!
//! This module defines the [`Article`] struct which represents the result
//! of running the extraction pipeline over one page: the normalized
//! headline, the rewritten body paragraphs in document order, and derived
//! metrics.

use serde::Serialize;

use crate::reflow::reflow;

/// The complete result of extracting one page.
///
/// Paragraphs are stored after link rewriting and markup stripping, still
/// unwrapped; [`Article::render`] produces the final text at a given
/// column width.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    /// Normalized headline (Cyrillic letters and single spaces).
    pub headline: String,

    /// Cleaned body paragraphs in document order.
    pub paragraphs: Vec<String>,

    /// Word count across all paragraphs.
    pub word_count: usize,

    /// Source URL if known.
    pub source_url: Option<String>,
}

impl Article {
    /// Creates a new Article, calculating derived metrics.
    pub fn new(headline: String, paragraphs: Vec<String>, source_url: Option<String>) -> Self {
        let word_count = paragraphs.iter().map(|p| p.split_whitespace().count()).sum();
        Self { headline, paragraphs, word_count, source_url }
    }

    /// Renders the final text: headline, a blank line, then the body
    /// reflowed at `width` columns.
    pub fn render(&self, width: usize) -> String {
        format!("{}\n\n{}", self.headline, reflow(&self.paragraphs, width))
    }

    /// Gets the article as structured JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_metrics() {
        let article = Article::new(
            "Заголовок".to_string(),
            vec!["раз два".to_string(), "три".to_string()],
            Some("https://site.ru/1".to_string()),
        );
        assert_eq!(article.word_count, 3);
        assert_eq!(article.source_url.as_deref(), Some("https://site.ru/1"));
    }

    #[test]
    fn test_render_layout() {
        let article = Article::new("Новости".to_string(), vec!["текст статьи".to_string()], None);
        assert_eq!(article.render(80), "Новости\n\nтекст статьи\n");
    }

    #[test]
    fn test_render_with_empty_body() {
        let article = Article::new("Новости".to_string(), Vec::new(), None);
        assert_eq!(article.render(80), "Новости\n\n");
    }

    #[test]
    fn test_serialization() {
        let article = Article::new("Тест".to_string(), vec!["абзац".to_string()], None);
        let json = article.to_json();
        assert_eq!(json["headline"], "Тест");
        assert!(json["paragraphs"].is_array());
    }
}
