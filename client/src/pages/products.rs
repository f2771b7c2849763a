//! Product listing with a local search box.
//!
//! The search value is render-scoped state only: it is echoed back in a
//! greeting and never filters, debounces or persists anything.

use leptos::prelude::*;

use crate::data::products::ProductCatalog;

/// Greeting echoed under the search box.
#[must_use]
pub fn greeting(search: &str) -> String {
    format!("Hello {search}")
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let catalog = expect_context::<ProductCatalog>();
    let search = RwSignal::new(String::new());

    log::debug!("Products Page");

    view! {
        <div class="products-page">
            <h1 class="products-page__title">"Products Page"</h1>
            <input
                class="products-page__search"
                type="text"
                prop:value=move || search.get()
                on:input=move |ev| {
                    search.set(event_target_value(&ev));
                }
            />
            <p class="products-page__greeting">{move || greeting(&search.get())}</p>

            <ul class="product-list">
                {catalog
                    .iter()
                    .map(|product| {
                        view! {
                            <li class="product-list__item">
                                <a href=product.href()>{product.name.clone()}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
