//! Redirects and the navigation contract.

use storefront_core::{CountryCode, RedirectIntent};
use url::form_urlencoded;

use crate::{EntryRoute, COUNTRY_PARAM};

/// A resolved locale redirect.
///
/// Mirrors the router's navigation input: a route pattern (`to`), the
/// country parameter, and forwarded search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// The entry route being redirected.
    pub entry: EntryRoute,
    /// Country resolved from the locale store.
    pub country: CountryCode,
    /// Extra parameters to forward.
    pub intent: RedirectIntent,
}

impl Redirect {
    /// Create a redirect.
    pub fn new(entry: EntryRoute, country: CountryCode, intent: RedirectIntent) -> Self {
        Self {
            entry,
            country,
            intent,
        }
    }

    /// Destination route pattern (e.g. `/:countryCode/checkout`).
    pub fn to(&self) -> &'static str {
        self.entry.scoped_pattern()
    }

    /// Route parameters for the pattern.
    pub fn params(&self) -> [(&'static str, &str); 1] {
        [(COUNTRY_PARAM, self.country.as_str())]
    }

    /// Search parameters forwarded from the intent.
    pub fn search(&self) -> Vec<(String, String)> {
        self.intent.search_params()
    }

    /// Whether the destination is rendered as not-found.
    pub fn is_not_found(&self) -> bool {
        self.intent.is_not_found()
    }

    /// Destination pattern with the country substituted (`/dk/checkout`, `/us/*`).
    pub fn path(&self) -> String {
        self.to()
            .replacen(&format!(":{COUNTRY_PARAM}"), self.country.as_str(), 1)
    }

    /// Concrete URL to navigate to.
    ///
    /// The catch-all wildcard becomes the unmatched remainder of the original
    /// path, and the search parameters are appended as a query string.
    pub fn location(&self) -> String {
        let mut location = match &self.entry {
            EntryRoute::CatchAll(rest) => format!("/{}/{}", self.country, rest),
            _ => self.path(),
        };

        let search = self.search();
        if !search.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(search)
                .finish();
            location.push('?');
            location.push_str(&query);
        }
        location
    }
}

/// Performs a navigation that replaces the current location.
///
/// Implementations must short-circuit rendering of the original route.
pub trait Navigator {
    /// Replace the current location with `redirect`.
    fn replace(&self, redirect: &Redirect);
}

impl<F> Navigator for F
where
    F: Fn(&Redirect),
{
    fn replace(&self, redirect: &Redirect) {
        self(redirect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> CountryCode {
        CountryCode::parse(raw).unwrap()
    }

    #[test]
    fn test_plain_redirect() {
        let redirect = Redirect::new(EntryRoute::Cart, code("dk"), RedirectIntent::PlainPath);

        assert_eq!(redirect.to(), "/:countryCode/cart");
        assert_eq!(redirect.params(), [("countryCode", "dk")]);
        assert!(redirect.search().is_empty());
        assert_eq!(redirect.path(), "/dk/cart");
        assert_eq!(redirect.location(), "/dk/cart");
    }

    #[test]
    fn test_home_redirect() {
        let redirect = Redirect::new(EntryRoute::Home, code("us"), RedirectIntent::PlainPath);
        assert_eq!(redirect.location(), "/us");
    }

    #[test]
    fn test_checkout_redirect_forwards_step() {
        let redirect = Redirect::new(
            EntryRoute::Checkout,
            code("dk"),
            RedirectIntent::checkout_step("addresses"),
        );

        assert_eq!(redirect.path(), "/dk/checkout");
        assert_eq!(redirect.location(), "/dk/checkout?step=addresses");
    }

    #[test]
    fn test_search_values_are_encoded() {
        let redirect = Redirect::new(
            EntryRoute::Checkout,
            code("dk"),
            RedirectIntent::checkout_step("a b&c"),
        );
        assert_eq!(redirect.location(), "/dk/checkout?step=a+b%26c");
    }

    #[test]
    fn test_catch_all_redirect() {
        let redirect = Redirect::new(
            EntryRoute::CatchAll("unknown/path".to_string()),
            code("us"),
            RedirectIntent::NotFoundFallback,
        );

        assert_eq!(redirect.to(), "/:countryCode/*");
        assert_eq!(redirect.path(), "/us/*");
        assert!(redirect.is_not_found());
        assert_eq!(redirect.location(), "/us/unknown/path");
    }

    #[test]
    fn test_closure_navigator() {
        let seen = std::cell::RefCell::new(Vec::new());
        let navigator = |r: &Redirect| seen.borrow_mut().push(r.location());

        navigator.replace(&Redirect::new(EntryRoute::Store, code("us"), RedirectIntent::PlainPath));

        assert_eq!(seen.into_inner(), vec!["/us/store".to_string()]);
    }
}
