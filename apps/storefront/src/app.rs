//! Application shell, routes and pages.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_params_map, use_query_map};
use leptos_router::path;
use storefront_core::{StorefrontConfig, STEP_PARAM};
use storefront_router::{classify, EntryRoute, RouteMatch, RouteResolver, RouterNavigator};
use storefront_ui::prelude::*;

use crate::locale::{provide_locale_store, use_locale_store};

const CONFIG: &str = include_str!("../../../workloads/storefront-gateway/storefront.toml");

fn load_config() -> StorefrontConfig {
    StorefrontConfig::from_toml_str(CONFIG).unwrap_or_else(|e| {
        leptos::logging::error!("invalid storefront config, using defaults: {e}");
        StorefrontConfig::default()
    })
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_locale_store(load_config());

    let fallback = || view! { <EntryRedirect/> }.into_view();

    view! {
        <Stylesheet id="storefront" href="/style/main.css"/>
        <Meta name="description" content="Locale-scoped storefront"/>
        <Title text="Storefront"/>

        <CartDrawerProvider>
            <ToastProvider>
                <Router>
                    <Routes fallback>
                        <Route path=path!("") view=EntryRedirect/>
                        <Route path=path!("/cart") view=EntryRedirect/>
                        <Route path=path!("/checkout") view=EntryRedirect/>
                        <Route path=path!("/store") view=EntryRedirect/>
                        <ParentRoute path=path!("/:countryCode") view=CountryLayout>
                            <Route path=path!("") view=HomePage/>
                            <Route path=path!("cart") view=CartPage/>
                            <Route path=path!("checkout") view=CheckoutPage/>
                            <Route path=path!("store") view=StorePage/>
                            <Route path=path!("products/:handle") view=ProductPage/>
                            <Route path=path!("*any") view=NotFound/>
                        </ParentRoute>
                    </Routes>
                </Router>
            </ToastProvider>
        </CartDrawerProvider>
    }
}

// ============================================================================
// Locale routing
// ============================================================================

/// Replaces a locale-less path with its country-scoped equivalent.
///
/// Renders nothing; the redirect runs once the country is resolved.
#[component]
fn EntryRedirect() -> impl IntoView {
    let locale = use_locale_store();
    let pathname = use_location().pathname;
    let navigator = Rc::new(RouterNavigator::from_context());

    Effect::new(move |_| {
        let entry = EntryRoute::from_path(&pathname.get_untracked());
        let navigator = Rc::clone(&navigator);

        spawn_local(async move {
            let resolver = RouteResolver::new(locale, locale.config());
            resolver.redirect(&entry, navigator.as_ref()).await;
        });
    });
}

/// Country scope around every storefront page.
///
/// A segment that is not a supported lowercase country code turns the whole
/// path into a catch-all entry and redirects.
#[component]
fn CountryLayout() -> impl IntoView {
    let locale = use_locale_store();
    let pathname = use_location().pathname;

    let scope = Memo::new(move |_| match classify(&pathname.get(), &locale.config()) {
        RouteMatch::Scoped { country, .. } => Some(country),
        RouteMatch::Entry(_) => None,
    });

    Effect::new(move |_| {
        if let Some(country) = scope.get() {
            if let Err(e) = locale.remember(country) {
                leptos::logging::warn!("{e}");
            }
        }
    });

    view! {
        <Show when=move || scope.get().is_some() fallback=|| view! { <EntryRedirect/> }>
            <Header/>
            <main>
                <Outlet/>
            </main>
            <CartPanel/>
            <ToastBanner/>
        </Show>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let locale = use_locale_store();
    let drawer = use_cart_drawer();
    let href = move |page: &'static str| move || format!("/{}{page}", locale.country());

    view! {
        <header>
            <h1>"Storefront"</h1>
            <nav>
                <a href=href("")>"Home"</a>
                <a href=href("/store")>"Store"</a>
                <a href=href("/cart")>"Cart"</a>
                <button on:click=move |_| drawer.open()>"Open cart"</button>
            </nav>
        </header>
    }
}

#[component]
fn CartPanel() -> impl IntoView {
    let drawer = use_cart_drawer();

    view! {
        <aside class="cart-drawer" class:open=move || drawer.is_open()>
            <button on:click=move |_| drawer.close()>"Close"</button>
            <p>"Your cart is empty."</p>
        </aside>
    }
}

#[component]
fn ToastBanner() -> impl IntoView {
    let toast = use_toast();

    view! {
        <Show when=move || toast.is_visible()>
            <div class="toast" role="status" on:click=move |_| toast.hide_toast()>
                {move || toast.message().unwrap_or_default()}
            </div>
        </Show>
    }
}

// ============================================================================
// Pages
// ============================================================================

#[component]
fn HomePage() -> impl IntoView {
    let locale = use_locale_store();

    view! {
        <div class="hero">
            <h2>"Welcome"</h2>
            <a href=move || format!("/{}/store", locale.country()) class="btn">
                "Browse Products"
            </a>
        </div>
    }
}

#[component]
fn CartPage() -> impl IntoView {
    let locale = use_locale_store();

    view! {
        <h2>"Cart"</h2>
        <a href=move || format!("/{}/checkout", locale.country())>"Checkout"</a>
    }
}

#[component]
fn CheckoutPage() -> impl IntoView {
    let query = use_query_map();
    let step = move || query.get().get(STEP_PARAM).unwrap_or_default();

    view! {
        <h2>"Checkout"</h2>
        <p>"Step: " {step}</p>
    }
}

#[component]
fn StorePage() -> impl IntoView {
    view! { <h2>"All Products"</h2> }
}

#[component]
fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let handle = move || params.get().get("handle").unwrap_or_default();
    let drawer = use_cart_drawer();
    let toast = use_toast();

    let add_to_cart = move |_| {
        drawer.open();
        toast.show_toast(format!("Added {} to cart", handle()));
    };

    view! {
        <h2>{handle}</h2>
        <button on:click=add_to_cart>"Add to cart"</button>
    }
}

/// 404 page inside the active country scope.
#[component]
fn NotFound() -> impl IntoView {
    let locale = use_locale_store();

    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href=move || format!("/{}", locale.country())>"Go to frontpage"</a>
        </div>
    }
}
