//! Shared UI state for the storefront component tree.
//!
//! Each container is a single reactive cell installed once near the root:
//!
//! ```rust,ignore
//! use storefront_ui::prelude::*;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     view! {
//!         <CartDrawerProvider>
//!             <ToastProvider>
//!                 <Shop/>
//!             </ToastProvider>
//!         </CartDrawerProvider>
//!     }
//! }
//!
//! #[component]
//! fn AddedToCart() -> impl IntoView {
//!     let drawer = use_cart_drawer();
//!     let toast = use_toast();
//!     view! {
//!         <button on:click=move |_| { drawer.open(); toast.show_toast("Added to cart"); }>
//!             "Add"
//!         </button>
//!     }
//! }
//! ```
//!
//! Reading a container outside its provider panics: the component is wired
//! into the wrong place and there is no sensible state to return.

mod cart_drawer;
mod toast;

pub use cart_drawer::*;
pub use toast::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        provide_cart_drawer, provide_toast, use_cart_drawer, use_toast, CartDrawer,
        CartDrawerProvider, Toast, ToastProvider,
    };
}
