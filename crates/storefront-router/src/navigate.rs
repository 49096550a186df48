//! Leptos Router integration.

use leptos_router::{hooks::use_navigate, NavigateOptions};

use crate::{Navigator, Redirect};

/// Navigator backed by the surrounding `<Router>`.
///
/// Every redirect replaces the current history entry so the locale-less
/// path never stays in the back stack.
pub struct RouterNavigator {
    navigate: Box<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Capture the navigate function of the current router.
    ///
    /// Must be called inside a `<Router>`.
    pub fn from_context() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Box::new(navigate),
        }
    }
}

impl Navigator for RouterNavigator {
    fn replace(&self, redirect: &Redirect) {
        (self.navigate)(
            &redirect.location(),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    }
}
