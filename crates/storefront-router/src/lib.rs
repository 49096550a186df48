//! Locale-scoped routing for the storefront.
//!
//! Every storefront page lives under a country segment. Bare paths are entry
//! points that only redirect:
//!
//! ```text
//! /          -> /{countryCode}
//! /cart      -> /{countryCode}/cart
//! /checkout  -> /{countryCode}/checkout?step=addresses
//! /store     -> /{countryCode}/store
//! /*         -> /{countryCode}/*        (404 probe)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use storefront_router::prelude::*;
//!
//! let resolver = RouteResolver::new(store, config.clone());
//! match classify(path, &config) {
//!     RouteMatch::Entry(entry) => {
//!         let redirect = resolver.redirect(&entry, &navigator).await;
//!     }
//!     RouteMatch::Scoped { country, page } => render(country, page),
//! }
//! ```

pub mod prelude;
mod redirect;
mod resolver;
mod route;

#[cfg(feature = "leptos")]
mod navigate;

pub use redirect::*;
pub use resolver::*;
pub use route::*;

#[cfg(feature = "leptos")]
pub use navigate::RouterNavigator;
