//! Country-scoped HTML shells.

use storefront_core::CountryCode;
use storefront_data::Product;
use storefront_router::ScopedPage;

/// Render the HTML shell for a page inside `country`'s scope.
///
/// The shell marks the body with `data-country` and links every entry page
/// within the same scope. `products` is listed on the store page.
pub(crate) fn render_page(country: &CountryCode, page: &ScopedPage, products: &[Product]) -> String {
    let title = title(page);
    let body = body(country, page, products);

    format!(
        r#"<!DOCTYPE html>
<html lang="en-{upper}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | Storefront ({upper})</title>
</head>
<body data-country="{country}">
    <nav>
        <a href="/{country}">Home</a>
        <a href="/{country}/store">Store</a>
        <a href="/{country}/cart">Cart</a>
    </nav>
    <main>
{body}
    </main>
</body>
</html>"#,
        upper = country.as_str().to_ascii_uppercase(),
    )
}

fn title(page: &ScopedPage) -> String {
    match page {
        ScopedPage::Home => "Home".to_string(),
        ScopedPage::Cart => "Cart".to_string(),
        ScopedPage::Checkout => "Checkout".to_string(),
        ScopedPage::Store => "Store".to_string(),
        ScopedPage::Product(handle) => escape(handle),
        ScopedPage::NotFound(_) => "Page not found".to_string(),
    }
}

fn body(country: &CountryCode, page: &ScopedPage, products: &[Product]) -> String {
    match page {
        ScopedPage::Home => "        <h1>Welcome</h1>".to_string(),
        ScopedPage::Cart => "        <h1>Cart</h1>".to_string(),
        ScopedPage::Checkout => r#"        <h1>Checkout</h1>
        <div id="checkout" data-step-param="step"></div>"#
            .to_string(),
        ScopedPage::Store => format!(
            "        <h1>All products</h1>\n        <ul>{}</ul>",
            product_list(country, products)
        ),
        ScopedPage::Product(handle) => format!(
            r#"        <article data-handle="{handle}"></article>"#,
            handle = escape(handle)
        ),
        ScopedPage::NotFound(_) => format!(
            r#"        <h1>Page not found</h1>
        <p>The page you tried to access does not exist.</p>
        <a href="/{country}">Go to frontpage</a>"#
        ),
    }
}

fn product_list(country: &CountryCode, products: &[Product]) -> String {
    products
        .iter()
        .map(|product| {
            format!(
                r#"<li><a href="/{country}/products/{handle}">{title}</a></li>"#,
                handle = escape(&product.handle),
                title = escape(&product.title),
            )
        })
        .collect()
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
