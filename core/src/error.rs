//! Error types for collection fetches.
//!
//! # Design
//! One variant per way a fetch can end: the URL never made it onto the wire,
//! the wire failed, the server answered outside `[200, 300)`, or the body did
//! not match the record shape. Every variant is terminal for that attempt.

use thiserror::Error;

/// Errors returned by `build_fetch`, `parse_collection` and the loader.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL string could not be parsed as an absolute http(s) URL.
    /// No network activity took place.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// DNS, connect, TLS or body-read failure.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a status outside `[200, 300)`.
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// The body was not JSON, did not match the record shape, or broke the
    /// unique-id invariant.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl FetchError {
    pub(crate) fn invalid_url(url: &str, reason: impl ToString) -> Self {
        FetchError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}
