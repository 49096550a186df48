//! The locale store contract and its implementations.

use std::cell::RefCell;

use async_trait::async_trait;
use storefront_core::{CountryCode, LocaleHint, StorefrontConfig};

use crate::{infer_country_code, Cache, LocaleError, SessionId};

/// Source of truth for the active country code.
///
/// Reading never fails: an implementation with no stored preference must
/// resolve to a default itself. Callers treat the result as authoritative.
#[async_trait(?Send)]
pub trait LocaleStore {
    /// Resolve the active country code.
    async fn stored_country_code(&self) -> CountryCode;

    /// Persist a country preference.
    async fn store_country_code(&self, code: &CountryCode) -> Result<(), LocaleError>;
}

/// Session-scoped locale store backed by the KV cache.
pub struct KvLocaleStore {
    cache: Cache,
    session: SessionId,
    config: StorefrontConfig,
    hint: LocaleHint,
}

impl KvLocaleStore {
    /// Create a store for one session.
    pub fn new(cache: Cache, session: SessionId, config: StorefrontConfig) -> Self {
        Self {
            cache,
            session,
            config,
            hint: LocaleHint::default(),
        }
    }

    /// Set the request signals used when nothing is stored yet.
    pub fn with_hint(mut self, hint: LocaleHint) -> Self {
        self.hint = hint;
        self
    }

    /// The session this store reads and writes.
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    fn key(&self) -> String {
        crate::cache_key!("locale", self.session)
    }

    fn read(&self) -> Option<CountryCode> {
        match self.cache.get::<CountryCode>(&self.key()) {
            Ok(Some(code)) if self.config.is_supported(&code) => Some(code),
            Ok(Some(code)) => {
                tracing::debug!(
                    session = %self.session,
                    country = %code,
                    "ignoring stored country without a storefront"
                );
                None
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(session = %self.session, error = %err, "failed to read stored country");
                None
            }
        }
    }
}

#[async_trait(?Send)]
impl LocaleStore for KvLocaleStore {
    async fn stored_country_code(&self) -> CountryCode {
        if let Some(code) = self.read() {
            return code;
        }

        let inferred = infer_country_code(&self.hint, &self.config);
        tracing::debug!(session = %self.session, country = %inferred, "inferred first-visit country");

        if let Err(err) = self.cache.set(&self.key(), &inferred) {
            tracing::warn!(session = %self.session, error = %err, "failed to persist inferred country");
        }
        inferred
    }

    async fn store_country_code(&self, code: &CountryCode) -> Result<(), LocaleError> {
        if !self.config.is_supported(code) {
            return Err(LocaleError::Unsupported(code.clone()));
        }
        self.cache.set(&self.key(), code)?;
        Ok(())
    }
}

/// In-memory store holding at most one code, falling back to a default.
#[derive(Debug)]
pub struct MemoryLocaleStore {
    default: CountryCode,
    stored: RefCell<Option<CountryCode>>,
}

impl MemoryLocaleStore {
    /// Create an empty store.
    pub fn new(default: CountryCode) -> Self {
        Self {
            default,
            stored: RefCell::new(None),
        }
    }

    /// Create a store with a preference already set.
    pub fn with_stored(default: CountryCode, stored: CountryCode) -> Self {
        Self {
            default,
            stored: RefCell::new(Some(stored)),
        }
    }
}

#[async_trait(?Send)]
impl LocaleStore for MemoryLocaleStore {
    async fn stored_country_code(&self) -> CountryCode {
        self.stored
            .borrow()
            .clone()
            .unwrap_or_else(|| self.default.clone())
    }

    async fn store_country_code(&self, code: &CountryCode) -> Result<(), LocaleError> {
        *self.stored.borrow_mut() = Some(code.clone());
        Ok(())
    }
}
