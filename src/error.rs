//! Error types for the WaniKani client.

use reqwest::StatusCode;
use thiserror::Error;

use crate::resource::ResourceKind;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The payload's `object` discriminator is not a kind this client knows about.
    #[error("no idea how to handle resource of type: {0}")]
    UnknownResourceKind(String),

    /// A required field was missing or had the wrong shape.
    #[error("malformed {kind} payload: {source}")]
    MalformedPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// A known kind showed up where a different one was required.
    #[error("expected a {expected} resource, got {found}")]
    UnexpectedKind {
        expected: ResourceKind,
        found: ResourceKind,
    },

    /// A request for a page (or a single resource) could not be completed.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
}

impl Error {
    pub(crate) fn malformed(kind: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedPayload {
            kind: kind.into(),
            source,
        }
    }

    pub(crate) fn fetch(url: impl Into<String>, source: FetchError) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }
}

/// Why a fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("authentication failed, check the API key")]
    Unauthorized,

    #[error("resource not found")]
    NotFound,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid payload: {0}")]
    Payload(#[source] Box<Error>),
}

impl FetchError {
    /// Classify a non-success status code.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            status => Self::Status(status),
        }
    }
}
