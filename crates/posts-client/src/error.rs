//! Error type for posts API calls

use thiserror::Error;

/// Errors that can occur while talking to the posts API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, TLS)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}
