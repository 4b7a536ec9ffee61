//! Feed fetcher
//!
//! One bounded-time GET per feed with a browser-like User-Agent. Per-feed
//! failures are swallowed at this boundary: a bad feed yields zero items
//! and a warning, never an error the run has to handle. Single attempt per
//! feed per run; a timed-out feed is treated identically to a failed one.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::NewsError;
use crate::extractor::{extract_items, RawItem};
use crate::feeds::FeedSource;

/// Some feed hosts reject unknown clients, so present a desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Fetches feeds one at a time over a shared HTTP client
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Fetch one feed, swallowing any failure
    ///
    /// Returns the extracted items, or an empty list after logging a
    /// warning. Nothing above this boundary ever sees a per-feed error.
    pub async fn fetch_items(&self, source: &FeedSource) -> Vec<RawItem> {
        match self.fetch(source).await {
            Ok(items) => {
                debug!("Fetched {} items from {}", items.len(), source.name);
                items
            }
            Err(e) => {
                warn!("Failed to fetch feed {}: {}", source.name, e);
                Vec::new()
            }
        }
    }

    /// Fetch a single feed; no retry, no backoff
    async fn fetch(&self, source: &FeedSource) -> Result<Vec<RawItem>, NewsError> {
        let response = self
            .client
            .get(&source.url)
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NewsError::FeedError {
                status: response.status().as_u16(),
                message: format!("failed to fetch {}", source.url),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        Ok(extract_items(&body, &source.name))
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}
