//! Errors raised while talking to the review service.

use reqwest::StatusCode;
use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered 404. For the viewer's review this means "no review yet".
    #[error("{url} not found")]
    NotFound { url: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url:    String,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        match self {
            FetchError::NotFound { .. } => true,
            FetchError::Transport(e) => e.status() == Some(StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// JSON path of the offending field, for decode errors.
    pub fn decode_path(&self) -> Option<String> {
        match self {
            FetchError::Decode { source, .. } => Some(source.path().to_string()),
            _ => None,
        }
    }
}
