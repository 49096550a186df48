//! Error types for storefront core types.

use thiserror::Error;

/// Errors produced while parsing core values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Not a two-letter country code.
    #[error("Invalid country code: {0:?}")]
    InvalidCountryCode(String),
}

/// Errors produced while parsing or validating a [`crate::StorefrontConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Parsed, but the values are unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
