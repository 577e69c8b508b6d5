//! Naver news search client for Korean-language coverage.
//!
//! Queries the [news search API](https://developers.naver.com/docs/serviceapi/search/news/news.md)
//! for one keyword at a time. The API cannot filter by publication date,
//! so the client over-fetches the 20 newest items and leaves date
//! filtering (current KST day) to the normalizer.

use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::models::{NaverItem, NaverResponse};
use crate::sources::SourceError;
use crate::util::truncate_for_log;

/// Production endpoint for the news search.
pub const NAVER_ENDPOINT: &str = "https://openapi.naver.com/v1/search/news.json";

/// Items requested per keyword. Over-fetched relative to the five that can
/// end up in a section, since most of a newest-first page falls outside
/// the day window.
const DISPLAY: &str = "20";

/// Client for the Naver news search API.
#[derive(Debug, Clone)]
pub struct NaverClient {
    http: Client,
    endpoint: Url,
    client_id: String,
    client_secret: String,
}

impl NaverClient {
    /// Create a client against the production endpoint.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self::with_endpoint(
            client_id,
            client_secret,
            Url::parse(NAVER_ENDPOINT).expect("static endpoint URL is valid"),
        )
    }

    /// Create a client against a custom endpoint. Used by tests to point
    /// the client at a local mock server.
    pub fn with_endpoint(client_id: String, client_secret: String, endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            client_id,
            client_secret,
        }
    }

    /// Fetch the newest raw items for one keyword.
    ///
    /// Items are returned unfiltered; the normalizer drops everything not
    /// published on the reference day.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch(&self, keyword: &str) -> Result<Vec<NaverItem>, SourceError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .query(&[("query", keyword), ("display", DISPLAY), ("sort", "date")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                provider: "naver",
                status,
                body: truncate_for_log(&body, 300),
            });
        }

        let payload: NaverResponse = response.json().await?;
        info!(count = payload.items.len(), keyword, "Fetched Naver items");
        let titles: Vec<&str> = payload.items.iter().map(|i| i.title.as_str()).collect();
        debug!(?titles, "Naver titles");
        Ok(payload.items)
    }
}
