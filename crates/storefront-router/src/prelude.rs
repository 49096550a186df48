//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use storefront_router::prelude::*;
//! ```

pub use crate::{
    classify, EntryRoute, Navigator, Redirect, RouteMatch, RouteResolver, ScopedPage,
};

#[cfg(feature = "leptos")]
pub use crate::RouterNavigator;
