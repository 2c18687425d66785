//! Error types for the posts feed.
//!
//! # Design
//! Two layers of errors exist. `WebServiceError` is the raw outcome of one
//! fetch: it keeps transport and decode detail as the web service saw it.
//! `FeedError` is the closed domain taxonomy that the repository and view
//! model report. The `From` impl between them is the single place where raw
//! outcomes are translated, and it is total: every raw variant lands on
//! exactly one domain kind, with `Unexpected` catching what has no closer
//! match.

use thiserror::Error;

use crate::transport::TransportError;

/// Result type reported by the repository and view model.
pub type Outcome<T> = Result<T, FeedError>;

/// Raw failure of a single `WebService::fetch_posts` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebServiceError {
    /// The configured endpoint could not be turned into an http(s) URL.
    /// No request was sent.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The server answered successfully but sent no payload (empty or `null`).
    #[error("response contained no data")]
    NoData,

    /// The payload was not a JSON array of posts.
    #[error("decode failed: {0}")]
    Decode(String),
}

/// Domain error taxonomy surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("no data received")]
    NoData,

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("no internet connection: {0}")]
    NoInternetConnection(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Any raw failure without a closer domain kind.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl FeedError {
    /// Whether this error belongs to the connectivity class (the request did
    /// not produce a usable HTTP exchange).
    pub fn is_connectivity(&self) -> bool {
        matches!(self, FeedError::Timeout(_) | FeedError::NoInternetConnection(_))
    }

    /// Stable variant name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::NoData => "no_data",
            FeedError::Timeout(_) => "timeout",
            FeedError::NoInternetConnection(_) => "no_internet_connection",
            FeedError::Serialization(_) => "serialization",
            FeedError::Unexpected(_) => "unexpected",
        }
    }
}

impl From<WebServiceError> for FeedError {
    fn from(error: WebServiceError) -> Self {
        match error {
            WebServiceError::InvalidUrl(msg) => {
                FeedError::NoInternetConnection(format!("invalid endpoint URL: {msg}"))
            }
            WebServiceError::Transport(TransportError::Timeout(msg)) => FeedError::Timeout(msg),
            WebServiceError::Transport(TransportError::Connect(msg))
            | WebServiceError::Transport(TransportError::Other(msg)) => {
                FeedError::NoInternetConnection(msg)
            }
            WebServiceError::HttpStatus {
                status: status @ (408 | 504),
                body,
            } => FeedError::Timeout(status_message(status, &body)),
            WebServiceError::HttpStatus { status, body } => {
                FeedError::Unexpected(status_message(status, &body))
            }
            WebServiceError::NoData => FeedError::NoData,
            WebServiceError::Decode(msg) => FeedError::Serialization(msg),
        }
    }
}

/// Errors raised while loading `FeedConfig` from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid feed configuration: {0}")]
    Env(#[from] envy::Error),
}

fn status_message(status: u16, body: &str) -> String {
    let preview: String = body.trim().chars().take(200).collect();
    if preview.is_empty() {
        format!("status {status}")
    } else {
        format!("status {status}: {preview}")
    }
}
