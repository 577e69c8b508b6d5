//! NewsAPI client for English-language coverage.
//!
//! Queries the [`/v2/everything`](https://newsapi.org/docs/endpoints/everything)
//! endpoint for one keyword at a time, asking the server for articles
//! published on the previous KST calendar day, sorted by relevance. The
//! window is a single inclusive day (`from` = `to`), so the digest carries
//! the last *full* day of English coverage rather than a partial today.

use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::models::{NewsApiItem, NewsApiResponse};
use crate::sources::SourceError;
use crate::util::truncate_for_log;
use chrono::NaiveDate;

/// Production endpoint for the `everything` search.
pub const NEWSAPI_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// Articles requested per keyword.
const PAGE_SIZE: &str = "10";

/// Client for NewsAPI's `everything` endpoint.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    /// The single day the server is asked to filter to.
    window: NaiveDate,
}

impl NewsApiClient {
    /// Create a client against the production endpoint.
    ///
    /// `window` is the publication day requested from the server,
    /// normally `DateWindow::yesterday`.
    pub fn new(api_key: String, window: NaiveDate) -> Self {
        Self::with_endpoint(
            api_key,
            window,
            Url::parse(NEWSAPI_ENDPOINT).expect("static endpoint URL is valid"),
        )
    }

    /// Create a client against a custom endpoint. Used by tests to point
    /// the client at a local mock server.
    pub fn with_endpoint(api_key: String, window: NaiveDate, endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            api_key,
            window,
        }
    }

    /// Fetch raw articles for one keyword.
    ///
    /// Returns the provider's items untouched; normalization happens
    /// downstream. A non-success response surfaces as
    /// [`SourceError::Status`] with a truncated copy of the body.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch(&self, keyword: &str) -> Result<Vec<NewsApiItem>, SourceError> {
        let day = self.window.format("%Y-%m-%d").to_string();
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("q", keyword),
                ("pageSize", PAGE_SIZE),
                ("sortBy", "relevancy"),
                ("language", "en"),
                ("from", day.as_str()),
                ("to", day.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                provider: "newsapi",
                status,
                body: truncate_for_log(&body, 300),
            });
        }

        let payload: NewsApiResponse = response.json().await?;
        info!(
            count = payload.articles.len(),
            keyword,
            window = %day,
            "Fetched NewsAPI articles"
        );
        let titles: Vec<&str> = payload
            .articles
            .iter()
            .map(|a| a.title.as_deref().unwrap_or(""))
            .collect();
        debug!(?titles, "NewsAPI titles");
        Ok(payload.articles)
    }
}
