//! Client-side locale store.

use async_trait::async_trait;
use leptos::prelude::*;
use storefront_core::{CountryCode, LocaleHint, StorefrontConfig};
use storefront_locale::{infer_country_code, LocaleError, LocaleStore};

/// Locale store held in a signal and saved to the browser's local storage.
///
/// Follows the country scope the visitor last rendered, so entry links
/// clicked inside `/dk` stay in `/dk`, including after a reload.
#[derive(Clone, Copy)]
pub struct SignalLocaleStore {
    country: RwSignal<CountryCode>,
    config: StoredValue<StorefrontConfig>,
}

impl SignalLocaleStore {
    /// Create a store seeded from the saved country, then the browser language.
    pub fn new(config: StorefrontConfig) -> Self {
        let mut hint = LocaleHint::new();
        if let Some(language) = browser::preferred_language() {
            hint = hint.with_accept_language(language);
        }
        Self::seeded(config, browser::saved_country().as_deref(), &hint)
    }

    /// Create a store starting at `saved` when it is a supported country,
    /// otherwise at the country inferred from `hint`.
    pub fn seeded(config: StorefrontConfig, saved: Option<&str>, hint: &LocaleHint) -> Self {
        let initial = saved
            .and_then(|raw| CountryCode::parse(raw).ok())
            .filter(|code| config.is_supported(code))
            .unwrap_or_else(|| infer_country_code(hint, &config));

        Self {
            country: RwSignal::new(initial),
            config: StoredValue::new(config),
        }
    }

    /// The active country (tracked).
    pub fn country(&self) -> CountryCode {
        self.country.get()
    }

    /// A copy of the storefront configuration.
    pub fn config(&self) -> StorefrontConfig {
        self.config.get_value()
    }

    /// Make `code` the active country. Unsupported codes are rejected.
    pub fn remember(&self, code: CountryCode) -> Result<(), LocaleError> {
        if !self.config.with_value(|config| config.is_supported(&code)) {
            return Err(LocaleError::Unsupported(code));
        }
        browser::save_country(code.as_str());
        if self.country.get_untracked() != code {
            self.country.set(code);
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    const STORAGE_KEY: &str = "storefront_country";

    pub fn saved_country() -> Option<String> {
        storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    pub fn save_country(code: &str) {
        let saved = storage().is_some_and(|storage| storage.set_item(STORAGE_KEY, code).is_ok());
        if !saved {
            leptos::logging::warn!("could not save country {code}");
        }
    }

    pub fn preferred_language() -> Option<String> {
        web_sys::window()?.navigator().language()
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

// Nothing persists outside the browser.
#[cfg(not(target_arch = "wasm32"))]
mod browser {
    pub fn saved_country() -> Option<String> {
        None
    }

    pub fn save_country(_code: &str) {}

    pub fn preferred_language() -> Option<String> {
        None
    }
}

#[async_trait(?Send)]
impl LocaleStore for SignalLocaleStore {
    async fn stored_country_code(&self) -> CountryCode {
        self.country.get_untracked()
    }

    async fn store_country_code(&self, code: &CountryCode) -> Result<(), LocaleError> {
        self.remember(code.clone())
    }
}

/// Install the locale store for the component tree.
pub fn provide_locale_store(config: StorefrontConfig) -> SignalLocaleStore {
    let store = SignalLocaleStore::new(config);
    provide_context(store);
    store
}

/// The locale store installed by `App`.
#[track_caller]
pub fn use_locale_store() -> SignalLocaleStore {
    use_context::<SignalLocaleStore>().expect("use_locale_store must be used within App")
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use leptos::prelude::Owner;

    use super::*;

    fn code(raw: &str) -> CountryCode {
        CountryCode::parse(raw).unwrap()
    }

    fn config() -> StorefrontConfig {
        StorefrontConfig::new(code("us")).with_country(code("dk"))
    }

    // === Seeding Tests ===

    #[test]
    fn test_seeded_from_saved_country() {
        Owner::new().with(|| {
            let store = SignalLocaleStore::seeded(config(), Some("DK"), &LocaleHint::new());
            assert_eq!(block_on(store.stored_country_code()), code("dk"));
        });
    }

    #[test]
    fn test_saved_country_beats_browser_language() {
        Owner::new().with(|| {
            let hint = LocaleHint::new().with_accept_language("en-US");
            let store = SignalLocaleStore::seeded(config(), Some("dk"), &hint);
            assert_eq!(store.country(), code("dk"));
        });
    }

    #[test]
    fn test_unsupported_saved_country_falls_back_to_language() {
        Owner::new().with(|| {
            let hint = LocaleHint::new().with_accept_language("da-DK,da;q=0.9");
            let store = SignalLocaleStore::seeded(config(), Some("jp"), &hint);
            assert_eq!(store.country(), code("dk"));
        });
    }

    #[test]
    fn test_garbage_saved_country_falls_back_to_default() {
        Owner::new().with(|| {
            let store = SignalLocaleStore::seeded(config(), Some("denmark"), &LocaleHint::new());
            assert_eq!(store.country(), code("us"));
        });
    }

    // === Store Tests ===

    #[test]
    fn test_starts_at_default() {
        Owner::new().with(|| {
            let store = SignalLocaleStore::new(config());
            assert_eq!(block_on(store.stored_country_code()), code("us"));
        });
    }

    #[test]
    fn test_remember_supported_country() {
        Owner::new().with(|| {
            let store = SignalLocaleStore::new(config());

            block_on(store.store_country_code(&code("dk"))).unwrap();

            assert_eq!(block_on(store.stored_country_code()), code("dk"));
        });
    }

    #[test]
    fn test_unsupported_country_rejected() {
        Owner::new().with(|| {
            let store = SignalLocaleStore::new(config());

            let err = store.remember(code("jp")).unwrap_err();

            assert!(matches!(err, LocaleError::Unsupported(_)));
            assert_eq!(block_on(store.stored_country_code()), code("us"));
        });
    }

    #[test]
    fn test_context_round_trip() {
        Owner::new().with(|| {
            provide_locale_store(config()).remember(code("dk")).unwrap();
            assert_eq!(use_locale_store().country(), code("dk"));
        });
    }
}
