//! Google News RSS search feed.
//!
//! An alternative to scraping the search page: the feed at
//! `https://news.google.com/rss/search?q=<company>` lists recent stories as
//! plain RSS `<item>` elements.

use super::{ArticleLocator, dedupe_locations, get_text};
use crate::error::FetchError;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

const FEED_URL: &str = "https://news.google.com/rss/search";

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GoogleNewsRssLocator {
    client: reqwest::Client,
    max_results: usize,
}

impl GoogleNewsRssLocator {
    pub fn new(client: reqwest::Client, max_results: usize) -> Self {
        Self {
            client,
            max_results,
        }
    }

    async fn fetch_feed(&self, company: &str) -> Result<Vec<String>, FetchError> {
        let url = feed_url(company);
        let xml = get_text(&self.client, &url).await?;
        match parse_feed(&xml, self.max_results) {
            Ok(urls) => Ok(urls),
            Err(e) => {
                warn!(error = %e, "Feed did not parse as RSS");
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl ArticleLocator for GoogleNewsRssLocator {
    #[instrument(level = "info", skip(self))]
    async fn locate(&self, company: &str) -> Vec<String> {
        match self.fetch_feed(company).await {
            Ok(urls) => {
                info!(count = urls.len(), "Located article URLs via Google News RSS");
                debug!(urls = ?urls, "RSS URLs");
                urls
            }
            Err(e) => {
                warn!(error = %e, "Error getting URLs; continuing with none");
                Vec::new()
            }
        }
    }
}

pub fn feed_url(company: &str) -> String {
    format!(
        "{FEED_URL}?q={}&hl=en-US&gl=US&ceid=US:en",
        urlencoding::encode(company)
    )
}

/// Read up to `max` item links out of an RSS document.
pub fn parse_feed(xml: &str, max: usize) -> Result<Vec<String>, quick_xml::DeError> {
    let rss: Rss = quick_xml::de::from_str(xml)?;
    let links = rss
        .channel
        .items
        .into_iter()
        .filter_map(|item| item.link)
        .map(|link| link.trim().to_string())
        .filter(|link| link.starts_with("http://") || link.starts_with("https://"))
        .collect();
    Ok(dedupe_locations(links, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>"Tesla" - Google News</title>
    <link>https://news.google.com/search?q=Tesla</link>
    <item>
      <title>Tesla deliveries beat estimates</title>
      <link>https://news.google.com/rss/articles/abc?oc=5&amp;hl=en</link>
      <pubDate>Mon, 06 Oct 2025 12:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Tesla recalls vehicles</title>
      <link>https://news.google.com/rss/articles/def?oc=5</link>
    </item>
    <item>
      <title>No link</title>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_feed_url_encodes_company() {
        assert_eq!(
            feed_url("AT&T"),
            "https://news.google.com/rss/search?q=AT%26T&hl=en-US&gl=US&ceid=US:en"
        );
    }

    #[test]
    fn test_parse_feed_reads_item_links() {
        let links = parse_feed(FEED, 10).unwrap();
        assert_eq!(
            links,
            vec![
                "https://news.google.com/rss/articles/abc?oc=5&hl=en".to_string(),
                "https://news.google.com/rss/articles/def?oc=5".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_feed_limit() {
        assert_eq!(parse_feed(FEED, 1).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_feed_without_items() {
        let xml = "<rss><channel><title>empty</title></channel></rss>";
        assert!(parse_feed(xml, 10).unwrap().is_empty());
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(parse_feed("not xml at all", 10).is_err());
    }
}
