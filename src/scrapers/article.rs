//! Generic article page extractor.
//!
//! Any news page is reduced to its `<title>` and the text of every `<p>`
//! element. Pages without paragraphs produce the [`NO_CONTENT`] sentinel,
//! which the extractor reports as [`FetchError::NoContent`].

use super::{ContentExtractor, get_text};
use crate::error::FetchError;
use crate::models::{NO_CONTENT, NO_TITLE, NewsArticle};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{info, instrument};
use url::Url;

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

#[derive(Debug, Clone)]
pub struct HtmlArticleExtractor {
    client: reqwest::Client,
}

impl HtmlArticleExtractor {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentExtractor for HtmlArticleExtractor {
    #[instrument(level = "info", skip(self))]
    async fn extract(&self, location: &str) -> Result<NewsArticle, FetchError> {
        Url::parse(location)?;
        let body = get_text(&self.client, location).await?;
        let article = parse_article(location, &body);
        if !article.has_content() {
            return Err(FetchError::NoContent);
        }
        info!(bytes = article.content.len(), title = %article.title, "Parsed article");
        Ok(article)
    }
}

/// Pull the title and paragraph text out of an HTML page.
pub fn parse_article(source: &str, html: &str) -> NewsArticle {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|t| t.text().collect::<String>())
        .unwrap_or_else(|| NO_TITLE.to_string());

    let paragraphs: Vec<String> = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .collect();
    let content = if paragraphs.is_empty() {
        NO_CONTENT.to_string()
    } else {
        paragraphs.join(" ")
    };

    NewsArticle {
        source: source.to_string(),
        title,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_article_title_and_paragraphs() {
        let html = r#"<html><head><title>Tesla recalls Model Y</title></head>
            <body><p>Tesla is recalling vehicles.</p><div><p>Owners will be <b>notified</b>.</p></div></body></html>"#;
        let article = parse_article("https://example.com/a", html);
        assert_eq!(article.source, "https://example.com/a");
        assert_eq!(article.title, "Tesla recalls Model Y");
        assert_eq!(article.content, "Tesla is recalling vehicles. Owners will be notified.");
        assert!(article.has_content());
    }

    #[test]
    fn test_parse_article_without_title_or_paragraphs() {
        let article = parse_article("https://example.com/b", "<html><body><div>menu</div></body></html>");
        assert_eq!(article.title, NO_TITLE);
        assert_eq!(article.content, NO_CONTENT);
        assert!(!article.has_content());
    }

    #[tokio::test]
    async fn test_extract_rejects_invalid_location() {
        let extractor = HtmlArticleExtractor::new(reqwest::Client::new());
        let err = extractor.extract("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
