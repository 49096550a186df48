//! Entry route resolution.

use storefront_core::{RedirectIntent, StorefrontConfig};
use storefront_locale::LocaleStore;

use crate::{EntryRoute, Navigator, Redirect};

/// Maps locale-less entry paths to their locale-scoped equivalents.
///
/// The country code is awaited from the locale store before any redirect is
/// built, so no locale-scoped page can be reached without one.
pub struct RouteResolver<S> {
    store: S,
    config: StorefrontConfig,
}

impl<S: LocaleStore> RouteResolver<S> {
    /// Create a resolver reading from `store`.
    pub fn new(store: S, config: StorefrontConfig) -> Self {
        Self { store, config }
    }

    /// Resolve a locale-less `path`, forwarding `intent` unchanged.
    ///
    /// Paths outside the route surface resolve to the catch-all.
    pub async fn resolve(&self, path: &str, intent: RedirectIntent) -> Redirect {
        let entry = EntryRoute::from_path(path);
        self.resolve_with(entry, intent).await
    }

    /// Resolve an entry route with the intent the route surface assigns it.
    pub async fn resolve_entry(&self, entry: &EntryRoute) -> Redirect {
        let intent = entry.default_intent(&self.config);
        self.resolve_with(entry.clone(), intent).await
    }

    /// Resolve `entry` and hand the result to `navigator`.
    ///
    /// The navigator is called exactly once, after the country is known.
    pub async fn redirect<N>(&self, entry: &EntryRoute, navigator: &N) -> Redirect
    where
        N: Navigator + ?Sized,
    {
        let redirect = self.resolve_entry(entry).await;
        navigator.replace(&redirect);
        redirect
    }

    async fn resolve_with(&self, entry: EntryRoute, intent: RedirectIntent) -> Redirect {
        let country = self.store.stored_country_code().await;
        let redirect = Redirect::new(entry, country, intent);

        tracing::debug!(
            from = %redirect.entry.path(),
            country = %redirect.country,
            to = %redirect.location(),
            not_found = redirect.is_not_found(),
            "resolved locale redirect"
        );
        redirect
    }

    /// The locale store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The storefront configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}
