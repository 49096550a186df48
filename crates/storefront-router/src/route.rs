//! Route surface and path classification.

use storefront_core::{CountryCode, RedirectIntent, StorefrontConfig};

/// Country segment placeholder in scoped route patterns.
pub const COUNTRY_PARAM: &str = "countryCode";

/// A locale-less entry path. These never render; they redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRoute {
    /// `/`
    Home,
    /// `/cart`
    Cart,
    /// `/checkout`
    Checkout,
    /// `/store`
    Store,
    /// Anything else; holds the unmatched path without its leading slash.
    CatchAll(String),
}

impl EntryRoute {
    /// Match a locale-less path.
    ///
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let segments = segments(path);
        Self::from_segments(&segments)
    }

    fn from_segments(segments: &[&str]) -> Self {
        match segments {
            [] => Self::Home,
            ["cart"] => Self::Cart,
            ["checkout"] => Self::Checkout,
            ["store"] => Self::Store,
            rest => Self::CatchAll(rest.join("/")),
        }
    }

    /// Locale-scoped route pattern this entry redirects to.
    pub fn scoped_pattern(&self) -> &'static str {
        match self {
            Self::Home => "/:countryCode",
            Self::Cart => "/:countryCode/cart",
            Self::Checkout => "/:countryCode/checkout",
            Self::Store => "/:countryCode/store",
            Self::CatchAll(_) => "/:countryCode/*",
        }
    }

    /// The intent the route surface attaches to this entry.
    pub fn default_intent(&self, config: &StorefrontConfig) -> RedirectIntent {
        match self {
            Self::Checkout => RedirectIntent::checkout_step(config.checkout_start_step.clone()),
            Self::CatchAll(_) => RedirectIntent::NotFoundFallback,
            Self::Home | Self::Cart | Self::Store => RedirectIntent::PlainPath,
        }
    }

    /// The locale-less path itself.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::Checkout => "/checkout".to_string(),
            Self::Store => "/store".to_string(),
            Self::CatchAll(rest) => format!("/{rest}"),
        }
    }
}

/// A page inside a country scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopedPage {
    Home,
    Cart,
    Checkout,
    Store,
    /// `/{cc}/products/{handle}`
    Product(String),
    /// No page matched; holds the remainder after the country segment.
    NotFound(String),
}

impl ScopedPage {
    fn from_segments(segments: &[&str]) -> Self {
        match segments {
            [] => Self::Home,
            ["cart"] => Self::Cart,
            ["checkout"] => Self::Checkout,
            ["store"] => Self::Store,
            ["products", handle] => Self::Product((*handle).to_string()),
            rest => Self::NotFound(rest.join("/")),
        }
    }

    /// Whether this is the not-found page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result of classifying a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// Locale-less; must be redirected.
    Entry(EntryRoute),
    /// Already inside a supported country scope.
    Scoped {
        country: CountryCode,
        page: ScopedPage,
    },
}

/// Classify a request path against the supported countries.
///
/// The first segment opens a country scope only when it is a lowercase,
/// supported country code. `/fr/cart` with `fr` unsupported is an entry
/// catch-all and redirects into the resolved country's not-found page.
pub fn classify(path: &str, config: &StorefrontConfig) -> RouteMatch {
    let segments = segments(path);

    if let Some((first, rest)) = segments.split_first() {
        if let Some(country) = scope_country(first, config) {
            return RouteMatch::Scoped {
                country,
                page: ScopedPage::from_segments(rest),
            };
        }
    }

    RouteMatch::Entry(EntryRoute::from_segments(&segments))
}

fn scope_country(segment: &str, config: &StorefrontConfig) -> Option<CountryCode> {
    let code = CountryCode::parse(segment).ok()?;
    (code.as_str() == segment && config.is_supported(&code)).then_some(code)
}

fn segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}
