use std::path::PathBuf;

use thiserror::Error;

/// A feed could not be retrieved. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Requesting {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Decoding JSON from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request { source, .. } if source.is_timeout())
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Building HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Player header is not a valid HTTP header value")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Writing playlist to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
