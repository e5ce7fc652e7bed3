//! HTTP page fetcher used by the website scraper.
//!
//! - Uses reqwest with a browser-like User-Agent
//! - Bounded 10 second timeout per request
//! - Follows redirects
//!
//! Non-success statuses come back as data; only transport failures are errors.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::time::Duration;
use tracing::debug;

use super::{BasePageFetcher, FetchedPage};

/// Timeout applied to every page fetch.
pub const PAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_REDIRECTS: usize = 10;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = reqwest::Client::builder()
            .timeout(PAGE_FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Add https:// when the provider hands back a bare host.
    fn normalize_url(url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    }
}

#[async_trait]
impl BasePageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let url = Self::normalize_url(url);
        debug!(url = %url, "Fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(FetchedPage { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(
            HttpPageFetcher::normalize_url("afuri.com"),
            "https://afuri.com"
        );
        assert_eq!(
            HttpPageFetcher::normalize_url("https://afuri.com"),
            "https://afuri.com"
        );
        assert_eq!(
            HttpPageFetcher::normalize_url("http://afuri.com"),
            "http://afuri.com"
        );
    }

    #[test]
    fn test_fetched_page_success_range() {
        let page = |status| FetchedPage {
            status,
            body: String::new(),
        };
        assert!(page(200).is_success());
        assert!(page(204).is_success());
        assert!(!page(301).is_success());
        assert!(!page(404).is_success());
        assert!(!page(503).is_success());
    }
}
