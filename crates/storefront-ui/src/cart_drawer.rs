//! Cart drawer visibility.

use leptos::prelude::*;

/// Open/closed state of the slide-in cart panel.
///
/// No toggle: callers name the state they want.
#[derive(Debug, Clone, Copy)]
pub struct CartDrawer {
    is_open: RwSignal<bool>,
}

impl CartDrawer {
    /// Create a closed drawer.
    pub fn new() -> Self {
        Self {
            is_open: RwSignal::new(false),
        }
    }

    /// Open the drawer. No-op (and no notification) if already open.
    pub fn open(&self) {
        if !self.is_open.get_untracked() {
            tracing::trace!("cart drawer opened");
            self.is_open.set(true);
        }
    }

    /// Close the drawer. No-op (and no notification) if already closed.
    pub fn close(&self) {
        if self.is_open.get_untracked() {
            tracing::trace!("cart drawer closed");
            self.is_open.set(false);
        }
    }

    /// Reactive read, for views and effects.
    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    /// Read without subscribing.
    pub fn is_open_untracked(&self) -> bool {
        self.is_open.get_untracked()
    }

    /// Read-only signal for passing down to views.
    pub fn state(&self) -> ReadSignal<bool> {
        self.is_open.read_only()
    }
}

impl Default for CartDrawer {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a closed cart drawer in the current reactive owner.
pub fn provide_cart_drawer() -> CartDrawer {
    let drawer = CartDrawer::new();
    provide_context(drawer);
    drawer
}

/// Get the cart drawer provided by an ancestor.
///
/// # Panics
///
/// Panics when no [`CartDrawerProvider`] (or [`provide_cart_drawer`]) is above
/// the caller.
#[track_caller]
pub fn use_cart_drawer() -> CartDrawer {
    match use_context::<CartDrawer>() {
        Some(drawer) => drawer,
        None => panic!("use_cart_drawer must be used within a CartDrawerProvider"),
    }
}

/// Provides a [`CartDrawer`] to its children.
#[component]
pub fn CartDrawerProvider(children: Children) -> impl IntoView {
    provide_cart_drawer();
    children()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        Owner::new().with(|| {
            assert!(!CartDrawer::new().is_open_untracked());
        });
    }

    #[test]
    fn test_open_then_close() {
        Owner::new().with(|| {
            let drawer = CartDrawer::new();

            drawer.open();
            assert!(drawer.is_open_untracked());

            drawer.close();
            assert!(!drawer.is_open_untracked());
        });
    }

    #[test]
    fn test_open_is_idempotent() {
        Owner::new().with(|| {
            let once = CartDrawer::new();
            once.open();

            let twice = CartDrawer::new();
            twice.open();
            twice.open();

            assert_eq!(once.is_open_untracked(), twice.is_open_untracked());
        });
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        Owner::new().with(|| {
            let drawer = CartDrawer::new();
            drawer.close();
            assert!(!drawer.is_open_untracked());
        });
    }

    #[test]
    fn test_state_signal_follows_drawer() {
        Owner::new().with(|| {
            let drawer = CartDrawer::new();
            let state = drawer.state();

            drawer.open();
            assert!(state.get_untracked());
        });
    }

    #[test]
    fn test_provided_drawer_is_shared() {
        Owner::new().with(|| {
            let provided = provide_cart_drawer();

            use_cart_drawer().open();

            assert!(provided.is_open_untracked());
        });
    }

    #[test]
    fn test_child_owner_sees_provided_drawer() {
        Owner::new().with(|| {
            provide_cart_drawer();

            Owner::new().with(|| {
                use_cart_drawer().open();
            });

            assert!(use_cart_drawer().is_open_untracked());
        });
    }

    #[test]
    #[should_panic(expected = "use_cart_drawer must be used within a CartDrawerProvider")]
    fn test_use_without_provider_panics() {
        Owner::new().with(|| {
            use_cart_drawer();
        });
    }
}
