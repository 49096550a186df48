//! Storefront gateway workload.
//!
//! Runs in front of the storefront and applies locale routing before any
//! page content is produced:
//! - Locale-less entry paths get a `307` to their country-scoped equivalent
//! - Country-scoped pages get an HTML shell
//! - Unknown country-scoped paths get a `404` page inside the country scope
//!
//! The country comes from the session's stored preference, then from the
//! edge geo header and `Accept-Language`, then from the configured default.

mod cookies;
mod gateway;
mod pages;

#[cfg(target_arch = "wasm32")]
mod component;

pub use gateway::Gateway;
