//! Commerce API payloads.

use serde::{Deserialize, Serialize};
use storefront_core::CountryCode;

/// A sales region and the countries it serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub currency_code: String,
    pub countries: Vec<CountryCode>,
}

impl Region {
    /// Whether this region serves `country`.
    pub fn serves(&self, country: &CountryCode) -> bool {
        self.countries.contains(country)
    }
}

/// A product as listed for a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// `GET /store/regions` response body.
#[derive(Debug, Deserialize)]
struct RegionsResponse {
    regions: Vec<ApiRegion>,
}

/// `GET /store/products` response body.
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

/// Region as the API returns it: countries are objects.
#[derive(Debug, Deserialize)]
struct ApiRegion {
    id: String,
    name: String,
    currency_code: String,
    #[serde(default)]
    countries: Vec<ApiCountry>,
}

#[derive(Debug, Deserialize)]
struct ApiCountry {
    iso_2: String,
}

impl From<ApiRegion> for Region {
    fn from(api: ApiRegion) -> Self {
        let countries = api
            .countries
            .iter()
            .filter_map(|c| CountryCode::parse(&c.iso_2).ok())
            .collect();
        Self {
            id: api.id,
            name: api.name,
            currency_code: api.currency_code,
            countries,
        }
    }
}

/// Parse a `GET /store/regions` response body.
pub fn regions_from_json(body: &[u8]) -> Result<Vec<Region>, serde_json::Error> {
    let response: RegionsResponse = serde_json::from_slice(body)?;
    Ok(response.regions.into_iter().map(Region::from).collect())
}

/// Parse a `GET /store/products` response body.
pub fn products_from_json(body: &[u8]) -> Result<Vec<Product>, serde_json::Error> {
    let response: ProductsResponse = serde_json::from_slice(body)?;
    Ok(response.products)
}
