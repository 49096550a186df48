//! Persisted country-code store for the storefront.
//!
//! The active country lives in Spin's Key-Value Store, keyed per session.
//! When a session has no stored preference the store infers one from the
//! request (geo header, `Accept-Language`) and falls back to the configured
//! default, so reading it never fails.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_locale::{Cache, KvLocaleStore, LocaleStore, SessionId};
//!
//! let store = KvLocaleStore::new(Cache::open_default()?, SessionId::generate(), config)
//!     .with_hint(hint);
//!
//! let country = store.stored_country_code().await;
//! ```

mod error;
mod infer;
mod kv;
mod session;
mod store;

pub use error::{CacheError, LocaleError};
pub use infer::infer_country_code;
pub use kv::Cache;
pub use session::SessionId;
pub use store::{KvLocaleStore, LocaleStore, MemoryLocaleStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, KvLocaleStore, LocaleStore, MemoryLocaleStore, SessionId};
}
