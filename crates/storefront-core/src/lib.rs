//! Core types for the locale-scoped storefront.
//!
//! This crate provides the fundamental types shared by every layer:
//! - `CountryCode` - Validated lowercase country segment
//! - `RedirectIntent` - What a locale redirect forwards
//! - `LocaleHint` - Request signals used for first-visit inference
//! - `StorefrontConfig` - Default country, supported countries, cookie names

mod config;
mod country;
mod error;
mod hint;
mod intent;

pub use config::*;
pub use country::*;
pub use error::*;
pub use hint::*;
pub use intent::*;
