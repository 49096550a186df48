//! Request handling for the storefront gateway.

use std::rc::Rc;

use anyhow::Context;
use http::header::{ACCEPT_LANGUAGE, ALLOW, CACHE_CONTROL, CONTENT_TYPE, LOCATION, SET_COOKIE, VARY};
use http::{HeaderMap, HeaderValue, Method, Request, Response, StatusCode};
use storefront_core::{CountryCode, LocaleHint, StorefrontConfig};
use storefront_data::{CommerceClient, DataHooks, Product, QueryCache};
use storefront_locale::{Cache, KvLocaleStore, LocaleStore};
use storefront_router::{classify, Redirect, RouteMatch, RouteResolver, ScopedPage};

use crate::cookies::{resolve_session, session_cookie};
use crate::pages::render_page;

const REDIRECT_CACHE_CONTROL: &str = "private, no-store";
const REDIRECT_VARY: &str = "Cookie, Accept-Language";
const PAGE_CACHE_CONTROL: &str = "private, no-cache";
const HTML: &str = "text/html; charset=utf-8";

/// Applies locale routing to incoming requests.
pub struct Gateway {
    config: StorefrontConfig,
    cache: Cache,
    queries: QueryCache,
    client: Option<Rc<dyn CommerceClient>>,
}

impl Gateway {
    /// Create a gateway, rejecting an invalid configuration.
    ///
    /// Sessions and query results both live in `cache`, so gateways opened on
    /// the same store share them.
    pub fn new(config: StorefrontConfig, cache: Cache) -> anyhow::Result<Self> {
        config.validate().context("invalid storefront config")?;
        Ok(Self {
            config,
            queries: QueryCache::new(cache.clone()),
            cache,
            client: None,
        })
    }

    /// Fetch product data for the store page through `client`.
    pub fn with_client(mut self, client: Rc<dyn CommerceClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Create a gateway from a TOML configuration document.
    pub fn from_toml(content: &str, cache: Cache) -> anyhow::Result<Self> {
        let config = StorefrontConfig::from_toml_str(content).context("parsing storefront config")?;
        Self::new(config, cache)
    }

    /// The active configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Handle one request.
    ///
    /// Locale-less paths are redirected with `307`, scoped pages render a
    /// shell, and unknown scoped paths render the scoped 404 page. A session
    /// cookie is issued whenever the request did not carry a valid one.
    pub async fn handle<B>(&self, request: &Request<B>) -> Response<String> {
        let method = request.method();
        if *method != Method::GET && *method != Method::HEAD {
            tracing::warn!(method = method.as_str(), "method not allowed");
            return respond(
                Response::builder()
                    .status(StatusCode::METHOD_NOT_ALLOWED)
                    .header(ALLOW, "GET, HEAD"),
                String::new(),
            );
        }

        let headers = request.headers();
        let (session, created) = resolve_session(headers, &self.config);
        let set_cookie = created.then(|| session_cookie(&session, &self.config));

        let store = KvLocaleStore::new(self.cache.clone(), session, self.config.clone())
            .with_hint(self.hint(headers));

        let mut response = match classify(request.uri().path(), &self.config) {
            RouteMatch::Entry(entry) => {
                let resolver = RouteResolver::new(store, self.config.clone());
                let redirect = resolver.resolve_entry(&entry).await;
                self.redirect(&redirect)
            }
            RouteMatch::Scoped { country, page } => {
                if let Err(e) = store.store_country_code(&country).await {
                    tracing::warn!(country = %country, error = %e, "failed to persist country");
                }
                let products = match page {
                    ScopedPage::Store => self.products(store).await,
                    _ => Vec::new(),
                };
                self.page(&country, &page, &products)
            }
        };

        if let Some(cookie) = set_cookie {
            match cookie.parse::<HeaderValue>() {
                Ok(value) => {
                    response.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => tracing::error!(error = %e, "invalid session cookie"),
            }
        }

        if *method == Method::HEAD {
            response.body_mut().clear();
        }
        response
    }

    fn hint(&self, headers: &HeaderMap) -> LocaleHint {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        let mut hint = LocaleHint::new();
        if let Some(geo) = header(self.config.country_header.as_str()) {
            hint = hint.with_geo_country(geo);
        }
        if let Some(languages) = header(ACCEPT_LANGUAGE.as_str()) {
            hint = hint.with_accept_language(languages);
        }
        hint
    }

    fn redirect(&self, redirect: &Redirect) -> Response<String> {
        let location = redirect.location();
        tracing::info!(
            location = location.as_str(),
            country = %redirect.country,
            not_found = redirect.is_not_found(),
            "locale redirect"
        );

        respond(
            Response::builder()
                .status(StatusCode::TEMPORARY_REDIRECT)
                .header(LOCATION, location)
                .header(CACHE_CONTROL, REDIRECT_CACHE_CONTROL)
                .header(VARY, REDIRECT_VARY),
            String::new(),
        )
    }

    async fn products(&self, store: KvLocaleStore) -> Vec<Product> {
        let Some(client) = &self.client else {
            return Vec::new();
        };

        let hooks = DataHooks::new(store, Rc::clone(client), self.queries.clone());
        match hooks.products().await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(error = %e, "product fetch failed");
                Vec::new()
            }
        }
    }

    fn page(&self, country: &CountryCode, page: &ScopedPage, products: &[Product]) -> Response<String> {
        let status = if page.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::OK
        };

        respond(
            Response::builder()
                .status(status)
                .header(CONTENT_TYPE, HTML)
                .header(CACHE_CONTROL, PAGE_CACHE_CONTROL),
            render_page(country, page, products),
        )
    }
}

/// Parse a method outside the standard set. A malformed name is an error.
pub(crate) fn extension_method(name: &str) -> anyhow::Result<Method> {
    Method::from_bytes(name.as_bytes()).with_context(|| format!("invalid request method {name:?}"))
}

/// Plain `400` response.
pub(crate) fn bad_request() -> Response<String> {
    plain(StatusCode::BAD_REQUEST, "Bad Request")
}

/// Plain `500` response.
pub(crate) fn internal_error() -> Response<String> {
    plain(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

fn plain(status: StatusCode, body: &str) -> Response<String> {
    let mut response = Response::new(body.to_string());
    *response.status_mut() = status;
    response
}

fn respond(builder: http::response::Builder, body: String) -> Response<String> {
    match builder.body(body) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "failed to build response");
            internal_error()
        }
    }
}
