//! Product detail page for `/products/{id}`.
//!
//! DESIGN
//! ======
//! The id is looked up in the `ProductCatalog` from context. A miss renders
//! the product-scoped `ProductNotFound` view (which also sets HTTP 404 under
//! SSR) instead of an inline message, so every unknown id takes the same path.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::route_param;
use crate::components::not_found::ProductNotFound;
use crate::data::products::{Product, ProductCatalog};

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let catalog = expect_context::<ProductCatalog>();
    let params = use_params_map();

    view! {
        {move || {
            let id = route_param(params, "id");
            match catalog.lookup(&id) {
                Ok(product) => view! { <ProductDetail product=product.clone()/> }.into_any(),
                Err(err) => {
                    log::debug!("{err}");
                    view! { <ProductNotFound id=id/> }.into_any()
                }
            }
        }}
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    view! {
        <div class="product-detail">
            <a href="/products" class="link">
                "Products Page"
            </a>
            <div class="product-detail__body">
                <h1 class="product-detail__name">{product.name}</h1>
                <p class="product-detail__description">{product.description}</p>
            </div>
        </div>
    }
}
