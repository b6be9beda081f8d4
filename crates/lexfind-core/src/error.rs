//! Error types shared across the lexfind crates.

use thiserror::Error;

/// Failure to produce tokens for a query.
#[derive(Debug, Error)]
pub enum TagError {
    /// The tagger (or recognizer) does not support the active locale.
    #[error("tagging unavailable for locale {locale}")]
    Unavailable { locale: String },
    /// The remote syntax-analysis call failed.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// The tagging task ended without producing a result.
    #[error("tagging aborted: {0}")]
    Aborted(String),
}

/// Transport, status or decoding failure of the remote tagging call.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("there was an error with your request: {0}")]
    Transport(String),
    #[error("request returned status {status}, expected 2xx")]
    Status { status: u16, body: String },
    #[error("could not parse the response as JSON: {0}")]
    Parse(String),
}

/// Fatal catalog construction failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product {name:?} has no keywords")]
    EmptyKeywords { name: String },
    #[error("product {name:?} has a blank keyword")]
    BlankKeyword { name: String },
}
