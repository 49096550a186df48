//! Commerce API client.

use std::rc::Rc;

use async_trait::async_trait;

use crate::{DataError, Product, Region};

/// Remote commerce API, as far as the storefront pages need it.
#[async_trait(?Send)]
pub trait CommerceClient {
    /// List every sales region.
    async fn list_regions(&self) -> Result<Vec<Region>, DataError>;

    /// List products priced for `region_id`.
    async fn list_products(&self, region_id: &str) -> Result<Vec<Product>, DataError>;
}

#[async_trait(?Send)]
impl<C: CommerceClient + ?Sized> CommerceClient for Rc<C> {
    async fn list_regions(&self) -> Result<Vec<Region>, DataError> {
        (**self).list_regions().await
    }

    async fn list_products(&self, region_id: &str) -> Result<Vec<Product>, DataError> {
        (**self).list_products(region_id).await
    }
}

/// Commerce client using Spin's outbound HTTP.
#[cfg(feature = "spin")]
pub struct HttpCommerceClient {
    base_url: String,
    publishable_key: String,
}

#[cfg(feature = "spin")]
impl HttpCommerceClient {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            publishable_key: publishable_key.into(),
        }
    }

    /// Create a client from the `[commerce]` config section.
    pub fn from_config(config: &storefront_core::CommerceConfig) -> Self {
        Self::new(config.api_url.clone(), config.publishable_key.clone())
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>, DataError> {
        let url = format!("{}{}", self.base_url, path);
        let request = spin_sdk::http::Request::get(&url)
            .header("x-publishable-api-key", &self.publishable_key)
            .header("accept", "application/json")
            .build();

        let response: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| DataError::Request(e.to_string()))?;

        let status = *response.status();
        if status >= 400 {
            return Err(DataError::Http { status, url });
        }
        Ok(response.body().to_vec())
    }
}

#[cfg(feature = "spin")]
#[async_trait(?Send)]
impl CommerceClient for HttpCommerceClient {
    async fn list_regions(&self) -> Result<Vec<Region>, DataError> {
        let body = self.get("/store/regions").await?;
        Ok(crate::regions_from_json(&body)?)
    }

    async fn list_products(&self, region_id: &str) -> Result<Vec<Product>, DataError> {
        let body = self
            .get(&format!("/store/products?region_id={region_id}"))
            .await?;
        Ok(crate::products_from_json(&body)?)
    }
}
