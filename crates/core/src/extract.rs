//! Pipeline orchestration: raw markup in, [`Article`] out.
//!
//! The passes run in a fixed order — boundary locate, paragraph extract,
//! link rewrite — with the headline pulled from the full document
//! independently of the article span. Every pass degrades instead of
//! failing, so extraction itself never errors: a page with no recognizable
//! article yields an empty headline and no paragraphs.

use crate::article::Article;
use crate::boundary::article_span;
use crate::headline::extract_headline;
use crate::links::rewrite_paragraph;
use crate::paragraphs::extract_paragraphs;

/// Run the extraction pipeline over a decoded page.
pub fn extract_article(html: &str) -> Article {
    extract(html, None)
}

/// Run the extraction pipeline, recording the source URL on the result.
pub fn extract_article_with_url(html: &str, url: &str) -> Article {
    extract(html, Some(url.to_string()))
}

fn extract(html: &str, source_url: Option<String>) -> Article {
    let span = article_span(html);
    let paragraphs: Vec<String> = extract_paragraphs(span).iter().map(|p| rewrite_paragraph(p)).collect();
    let headline = extract_headline(html);

    Article::new(headline, paragraphs, source_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = concat!(
        r#"<html><body><h1 class="title">Большая новость дня</h1>"#,
        "\n",
        r#"<p class="lead">Привет <a href="http://example.com/a">ссылка</a> мир</p>"#,
        "\n",
        r#"<p>Второй абзац &nbsp; текста</p>"#,
        "\n",
        r#"</article></body></html>"#
    );

    #[test]
    fn test_end_to_end_extraction() {
        let article = extract_article(PAGE);
        assert_eq!(article.headline, "Большая новость дня");
        assert_eq!(article.paragraphs.len(), 2);
        assert_eq!(article.paragraphs[0], "Привет  [http://example.com/a]  мир");
        assert_eq!(article.paragraphs[1], "Второй абзац  текста");
    }

    #[test]
    fn test_paragraph_count_preserved_through_rewrite() {
        let span = article_span(PAGE);
        let raw = extract_paragraphs(span);
        let article = extract_article(PAGE);
        assert_eq!(article.paragraphs.len(), raw.len());
    }

    #[test]
    fn test_rendered_article_shape() {
        let article = extract_article(PAGE);
        let rendered = article.render(80);
        assert!(rendered.starts_with("Большая новость дня\n\n"));
        assert!(rendered.contains("Привет  [http://example.com/a]  мир\n"));
    }

    #[test]
    fn test_page_without_boundaries_still_extracts() {
        let html = "<p>Абзац без рамки</p>";
        let article = extract_article(html);
        assert_eq!(article.headline, "");
        assert_eq!(article.paragraphs, vec!["Абзац без рамки"]);
    }

    #[test]
    fn test_empty_page() {
        let article = extract_article("");
        assert_eq!(article.headline, "");
        assert!(article.paragraphs.is_empty());
    }

    #[test]
    fn test_source_url_recorded() {
        let article = extract_article_with_url(PAGE, "https://site.ru/news/1");
        assert_eq!(article.source_url.as_deref(), Some("https://site.ru/news/1"));
    }
}
