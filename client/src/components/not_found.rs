//! Not-found views: the global fallback and the product-scoped variant.
//!
//! DESIGN
//! ======
//! Both views are terminal render branches, not errors. When rendered during
//! SSR they flip the response status to 404 through `ResponseOptions`, so the
//! status is decided by whichever view the route tree picked.

use leptos::prelude::*;

/// Set HTTP 404 on the in-flight SSR response, if there is one.
fn mark_not_found() {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }
}

/// Heading shown when a product id has no record.
#[must_use]
pub fn product_not_found_title(id: &str) -> String {
    format!("Page Not Found for this product of id: {id}")
}

/// Fallback for any path the route table does not know.
#[component]
pub fn NotFound() -> impl IntoView {
    mark_not_found();

    view! {
        <div class="not-found">
            <div class="not-found__card">
                <h1 class="not-found__code">"404"</h1>
                <h2 class="not-found__title">"Page Not Found"</h2>
                <p class="not-found__message">"Sorry, the page you are looking for does not exist."</p>
                <a href="/" class="btn btn--primary">
                    "Go Back Home"
                </a>
            </div>
        </div>
    }
}

/// Rendered in place of the product detail when `id` matches nothing.
#[component]
pub fn ProductNotFound(id: String) -> impl IntoView {
    mark_not_found();

    view! {
        <div class="not-found">
            <div class="not-found__card">
                <h1 class="not-found__code">"404"</h1>
                <h2 class="not-found__title">{product_not_found_title(&id)}</h2>
                <a href="/products" class="btn btn--primary">
                    "Go Back products page"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "not_found_test.rs"]
mod tests;
