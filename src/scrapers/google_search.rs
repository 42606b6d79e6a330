//! Google News search scraper.
//!
//! Queries the news tab of Google search (`tbm=nws`) for `"<company> news"` and
//! reads the first link of each result card (`div.SoaBEf`).
//!
//! # URL Pattern
//!
//! Result links are usually absolute. Some layouts wrap them in a Google
//! redirect such as `/url?q=https://example.com/story&sa=U`, which is unwrapped
//! to the target URL.

use super::{ArticleLocator, dedupe_locations, get_text};
use crate::error::FetchError;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument, warn};
use url::Url;

const SEARCH_URL: &str = "https://www.google.com/search";

static RESULT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div.SoaBEf").unwrap());
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

#[derive(Debug, Clone)]
pub struct GoogleSearchLocator {
    client: reqwest::Client,
    max_results: usize,
}

impl GoogleSearchLocator {
    pub fn new(client: reqwest::Client, max_results: usize) -> Self {
        Self {
            client,
            max_results,
        }
    }

    async fn search(&self, company: &str) -> Result<Vec<String>, FetchError> {
        let url = search_url(company);
        let html = get_text(&self.client, &url).await?;
        Ok(parse_search_results(&html, self.max_results))
    }
}

#[async_trait]
impl ArticleLocator for GoogleSearchLocator {
    #[instrument(level = "info", skip(self))]
    async fn locate(&self, company: &str) -> Vec<String> {
        match self.search(company).await {
            Ok(urls) => {
                info!(count = urls.len(), "Located article URLs via Google search");
                debug!(urls = ?urls, "Google search URLs");
                urls
            }
            Err(e) => {
                warn!(error = %e, "Error getting URLs; continuing with none");
                Vec::new()
            }
        }
    }
}

pub fn search_url(company: &str) -> String {
    let query = format!("{company} news");
    format!("{SEARCH_URL}?q={}&tbm=nws", urlencoding::encode(&query))
}

/// Extract up to `max` article URLs from a Google News results page.
pub fn parse_search_results(html: &str, max: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let urls = document
        .select(&RESULT_SELECTOR)
        .take(max)
        .filter_map(|card| card.select(&LINK_SELECTOR).next())
        .filter_map(|link| link.value().attr("href"))
        .filter_map(resolve_result_link)
        .collect();
    dedupe_locations(urls, max)
}

/// Make a result href absolute, following Google's `/url?q=` redirect wrapper.
fn resolve_result_link(href: &str) -> Option<String> {
    let base = Url::parse(SEARCH_URL).ok()?;
    let resolved = base.join(href).ok()?;

    let is_redirect = resolved.host_str().is_some_and(|h| h.ends_with("google.com"))
        && resolved.path() == "/url";
    if is_redirect {
        return resolved
            .query_pairs()
            .find(|(k, _)| k == "q" || k == "url")
            .map(|(_, v)| v.into_owned());
    }
    match resolved.scheme() {
        "http" | "https" => Some(resolved.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
        <html><body>
          <div class="SoaBEf"><a href="https://news.example.com/tesla-deliveries">Deliveries</a></div>
          <div class="SoaBEf"><div><a href="/url?q=https://other.example.org/recall&amp;sa=U">Recall</a></div></div>
          <div class="SoaBEf"><span>no link here</span></div>
          <div class="SoaBEf"><a href="https://news.example.com/tesla-deliveries">Duplicate</a></div>
          <div class="unrelated"><a href="https://ignored.example.com/">Ignored</a></div>
          <div class="SoaBEf"><a href="javascript:void(0)">Script</a></div>
        </body></html>
    "#;

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            search_url("Johnson & Johnson"),
            "https://www.google.com/search?q=Johnson%20%26%20Johnson%20news&tbm=nws"
        );
    }

    #[test]
    fn test_parse_search_results() {
        let urls = parse_search_results(RESULTS_PAGE, 10);
        assert_eq!(
            urls,
            vec![
                "https://news.example.com/tesla-deliveries".to_string(),
                "https://other.example.org/recall".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_search_results_respects_limit() {
        let urls = parse_search_results(RESULTS_PAGE, 1);
        assert_eq!(urls, vec!["https://news.example.com/tesla-deliveries".to_string()]);
    }

    #[test]
    fn test_parse_search_results_empty_page() {
        assert!(parse_search_results("<html></html>", 10).is_empty());
    }
}
