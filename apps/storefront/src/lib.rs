//! Locale-scoped storefront client.
//!
//! Every page renders under a `/:countryCode` segment. Locale-less entry
//! paths resolve the visitor's country and replace themselves with the
//! scoped path before anything is shown.

mod app;
mod locale;

pub use app::App;
pub use locale::SignalLocaleStore;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
