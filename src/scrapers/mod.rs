//! Article discovery and extraction.
//!
//! Scraping follows a two-phase pattern:
//!
//! 1. **Locating**: Turn a company name into a bounded list of article URLs
//! 2. **Extracting**: Download each URL and pull out its title and paragraphs
//!
//! # Locator backends
//!
//! | Backend | Module | Method |
//! |---------|--------|--------|
//! | Google News search | [`google_search`] | HTML scraping of the news tab |
//! | Google News RSS | [`google_news_rss`] | RSS search feed |
//!
//! Both phases sit behind traits so the pipeline can be driven by fakes in
//! tests. Locators never fail: any error is logged and yields no URLs.
//! Extractors report *why* a page was unusable through [`FetchError`].

pub mod article;
pub mod google_news_rss;
pub mod google_search;

use crate::config::{LocatorKind, NarratorConfig};
use crate::error::FetchError;
use crate::models::NewsArticle;
use async_trait::async_trait;
use itertools::Itertools;
use std::sync::Arc;
use std::time::Duration;

/// Finds candidate article locations for a company.
#[async_trait]
pub trait ArticleLocator: Send + Sync {
    /// Up to the configured maximum of locations; empty on any failure.
    async fn locate(&self, company: &str) -> Vec<String>;
}

/// Turns a location into article text.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    async fn extract(&self, location: &str) -> Result<NewsArticle, FetchError>;
}

/// Build a client that identifies as a desktop browser and gives up after `timeout`.
pub fn http_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}

/// GET `url` and return the body of a 2xx response.
pub(crate) async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(response.text().await?)
}

/// Drop repeated locations, keeping first occurrences, and cap the list.
pub(crate) fn dedupe_locations(urls: Vec<String>, max: usize) -> Vec<String> {
    urls.into_iter().unique().take(max).collect()
}

/// Construct the locator selected in `config`.
pub fn build_locator(config: &NarratorConfig) -> Result<Arc<dyn ArticleLocator>, reqwest::Error> {
    let client = http_client(&config.user_agent, config.locator_timeout())?;
    Ok(match config.locator {
        LocatorKind::GoogleSearch => {
            Arc::new(google_search::GoogleSearchLocator::new(client, config.max_articles))
        }
        LocatorKind::GoogleNewsRss => {
            Arc::new(google_news_rss::GoogleNewsRssLocator::new(client, config.max_articles))
        }
    })
}

/// Construct the HTML paragraph extractor.
pub fn build_extractor(config: &NarratorConfig) -> Result<Arc<dyn ContentExtractor>, reqwest::Error> {
    let client = http_client(&config.user_agent, config.extractor_timeout())?;
    Ok(Arc::new(article::HtmlArticleExtractor::new(client)))
}
