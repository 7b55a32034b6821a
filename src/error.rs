use reqwest::StatusCode;
use thiserror::Error;

/// Which of the two operator-facing categories an error belongs to.
/// Tests assert on this instead of on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Unexpected,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned {status} for {url}: {detail}")]
    Status {
        url: String,
        status: StatusCode,
        detail: String,
    },

    #[error("response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network { .. } | FetchError::Status { .. } => ErrorKind::Network,
            FetchError::Parse(_) | FetchError::Io(_) => ErrorKind::Unexpected,
        }
    }
}
