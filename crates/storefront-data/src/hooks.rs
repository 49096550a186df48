//! Country-aware data hooks.

use storefront_core::CountryCode;
use storefront_locale::LocaleStore;

use crate::{CommerceClient, DataError, Product, QueryCache, Region};

/// Composes the locale store, a commerce client and a query cache.
pub struct DataHooks<S, C> {
    store: S,
    client: C,
    cache: QueryCache,
}

impl<S, C> DataHooks<S, C>
where
    S: LocaleStore,
    C: CommerceClient,
{
    /// Create hooks over `cache`. Hooks built on clones of one cache share its entries.
    pub fn new(store: S, client: C, cache: QueryCache) -> Self {
        Self {
            store,
            client,
            cache,
        }
    }

    /// The active country.
    pub async fn country(&self) -> CountryCode {
        self.store.stored_country_code().await
    }

    /// Every region (cached).
    pub async fn regions(&self) -> Result<Vec<Region>, DataError> {
        self.cache
            .get_or_fetch("regions", || self.client.list_regions())
            .await
    }

    /// Region serving the active country, if any.
    pub async fn region(&self) -> Result<Option<Region>, DataError> {
        let country = self.country().await;
        let region = self
            .regions()
            .await?
            .into_iter()
            .find(|region| region.serves(&country));

        if region.is_none() {
            tracing::warn!(country = %country, "no region serves country");
        }
        Ok(region)
    }

    /// Products for the active country's region; empty when no region serves it.
    pub async fn products(&self) -> Result<Vec<Product>, DataError> {
        let Some(region) = self.region().await? else {
            return Ok(Vec::new());
        };

        let key = format!("products:{}", region.id);
        self.cache
            .get_or_fetch(&key, || self.client.list_products(&region.id))
            .await
    }

    /// The query cache, for invalidating after mutations.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;
    use futures::executor::block_on;
    use storefront_locale::{Cache, MemoryLocaleStore};

    use super::*;

    fn code(raw: &str) -> CountryCode {
        CountryCode::parse(raw).unwrap()
    }

    #[derive(Default)]
    struct FakeClient {
        region_calls: Cell<u32>,
        product_calls: Cell<u32>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl CommerceClient for FakeClient {
        async fn list_regions(&self) -> Result<Vec<Region>, DataError> {
            self.region_calls.set(self.region_calls.get() + 1);
            if self.fail {
                return Err(DataError::Http {
                    status: 503,
                    url: "/store/regions".to_string(),
                });
            }
            Ok(vec![
                Region {
                    id: "reg_eu".to_string(),
                    name: "Europe".to_string(),
                    currency_code: "eur".to_string(),
                    countries: vec![code("dk"), code("de")],
                },
                Region {
                    id: "reg_us".to_string(),
                    name: "United States".to_string(),
                    currency_code: "usd".to_string(),
                    countries: vec![code("us")],
                },
            ])
        }

        async fn list_products(&self, region_id: &str) -> Result<Vec<Product>, DataError> {
            self.product_calls.set(self.product_calls.get() + 1);
            Ok(vec![Product {
                id: format!("prod_{region_id}"),
                title: "Shirt".to_string(),
                handle: "shirt".to_string(),
                thumbnail: None,
            }])
        }
    }

    fn hooks(country: &str) -> DataHooks<MemoryLocaleStore, FakeClient> {
        DataHooks::new(
            MemoryLocaleStore::with_stored(code("us"), code(country)),
            FakeClient::default(),
            QueryCache::new(Cache::in_memory()),
        )
    }

    #[test]
    fn test_region_for_stored_country() {
        let region = block_on(hooks("dk").region()).unwrap().unwrap();
        assert_eq!(region.id, "reg_eu");
    }

    #[test]
    fn test_region_none_for_unserved_country() {
        assert!(block_on(hooks("jp").region()).unwrap().is_none());
    }

    #[test]
    fn test_products_for_region() {
        let products = block_on(hooks("us").products()).unwrap();
        assert_eq!(products[0].id, "prod_reg_us");
    }

    #[test]
    fn test_products_empty_without_region() {
        let hooks = hooks("jp");

        assert!(block_on(hooks.products()).unwrap().is_empty());
        assert_eq!(hooks.client.product_calls.get(), 0);
    }

    #[test]
    fn test_regions_cached_across_hooks() {
        let hooks = hooks("dk");

        block_on(hooks.region()).unwrap();
        block_on(hooks.products()).unwrap();
        block_on(hooks.products()).unwrap();

        assert_eq!(hooks.client.region_calls.get(), 1);
        assert_eq!(hooks.client.product_calls.get(), 1);
    }

    #[test]
    fn test_invalidate_refetches_products() {
        let hooks = hooks("dk");

        block_on(hooks.products()).unwrap();
        hooks.cache().invalidate("products:").unwrap();
        block_on(hooks.products()).unwrap();

        assert_eq!(hooks.client.product_calls.get(), 2);
    }

    #[test]
    fn test_client_error_propagates() {
        let hooks = DataHooks::new(
            MemoryLocaleStore::new(code("us")),
            FakeClient {
                fail: true,
                ..Default::default()
            },
            QueryCache::new(Cache::in_memory()),
        );

        let err = block_on(hooks.region()).unwrap_err();
        assert!(matches!(err, DataError::Http { status: 503, .. }));
    }

    #[test]
    fn test_shared_client() {
        let client = std::rc::Rc::new(FakeClient::default());
        let hooks = DataHooks::new(
            MemoryLocaleStore::new(code("us")),
            client.clone(),
            QueryCache::new(Cache::in_memory()),
        );

        block_on(hooks.products()).unwrap();
        assert_eq!(client.region_calls.get(), 1);
    }

    #[test]
    fn test_hooks_on_shared_cache_fetch_regions_once() {
        let client = std::rc::Rc::new(FakeClient::default());
        let cache = QueryCache::new(Cache::in_memory());

        for country in ["dk", "us"] {
            let hooks = DataHooks::new(
                MemoryLocaleStore::new(code(country)),
                client.clone(),
                cache.clone(),
            );
            block_on(hooks.products()).unwrap();
        }

        assert_eq!(client.region_calls.get(), 1);
        assert_eq!(client.product_calls.get(), 2);
    }

    #[test]
    fn test_country_follows_store() {
        let hooks = hooks("de");
        assert_eq!(block_on(hooks.country()), code("de"));
    }
}
