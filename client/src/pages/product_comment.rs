//! Comment view for `/products/{id}/comments/{comment_id}`.
//!
//! Both params are passed through untouched; the product id is not checked
//! against the catalog.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::route_param;

#[must_use]
pub fn comment_heading(product_id: &str, comment_id: &str) -> String {
    format!("Comment {comment_id} for product {product_id}")
}

#[component]
pub fn ProductCommentPage() -> impl IntoView {
    let params = use_params_map();

    view! {
        <h1 class="product-comment">
            {move || comment_heading(&route_param(params, "id"), &route_param(params, "comment_id"))}
        </h1>
    }
}

#[cfg(test)]
#[path = "product_comment_test.rs"]
mod tests;
