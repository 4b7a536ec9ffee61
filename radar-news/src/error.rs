//! Error types for the ingestion crate

use thiserror::Error;

/// Errors that can occur while fetching a feed
///
/// These never cross the per-feed boundary: [`FeedFetcher::fetch_items`]
/// logs them and yields an empty item list instead.
///
/// [`FeedFetcher::fetch_items`]: crate::fetcher::FeedFetcher::fetch_items
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed or timed out
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Feed endpoint returned a non-2xx response
    #[error("feed error (status {status}): {message}")]
    FeedError {
        /// HTTP status code
        status: u16,
        /// Context for the failing feed
        message: String,
    },
}
