//! Locale store error types.

use storefront_core::CountryCode;
use thiserror::Error;

/// Errors that can occur when using the KV cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}

/// Errors returned when persisting a country preference.
#[derive(Error, Debug)]
pub enum LocaleError {
    /// The country has no locale-scoped storefront.
    #[error("Country not supported: {0}")]
    Unsupported(CountryCode),

    /// Underlying cache failure.
    #[error(transparent)]
    Cache(#[from] CacheError),
}
