//! Data hooks for storefront pages.
//!
//! Hooks compose the locale store with a commerce API call and a query
//! cache. Pages never pass a country around: the hook resolves it.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{DataHooks, HttpCommerceClient, QueryCache};
//!
//! let queries = QueryCache::new(Cache::open_default()?);
//! let hooks = DataHooks::new(locale_store, HttpCommerceClient::new(base_url, key), queries);
//! let region = hooks.region().await?;
//! let products = hooks.products().await?;
//! ```

mod api;
mod cache;
mod client;
mod error;
mod hooks;

pub use api::{products_from_json, regions_from_json, Product, Region};
pub use cache::QueryCache;
pub use client::CommerceClient;
pub use error::DataError;
pub use hooks::DataHooks;

#[cfg(feature = "spin")]
pub use client::HttpCommerceClient;
