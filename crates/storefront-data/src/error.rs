//! Data layer error types.

use thiserror::Error;

/// Errors that can occur while fetching storefront data.
#[derive(Error, Debug)]
pub enum DataError {
    /// Non-success HTTP status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// The request could not be sent.
    #[error("Request error: {0}")]
    Request(String),

    /// Response body did not match the expected shape.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The query cache could not be used.
    #[error("Query cache error: {0}")]
    Cache(#[from] storefront_locale::CacheError),
}
