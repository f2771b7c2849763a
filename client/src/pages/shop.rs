//! Shop page for `/shop` and the `/shop/{...slug}` catch-all.
//!
//! Segments come from the raw location path rather than the decoded wildcard
//! param, so `%2F` inside a segment survives as a literal slash.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::cart::Cart;
use crate::util::slug;

#[component]
pub fn ShopPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let segments = Memo::new(move |_| pathname.with(|path| slug::segments(path, slug::SHOP_PREFIX)));

    view! {
        <div class="shop-page">
            {move || {
                let segments = segments.get();
                if segments.is_empty() {
                    view! {
                        <div class="shop-page__content">
                            <h1>"Welcome to our Shop"</h1>
                            <p>"Browse our categories or use the search bar above."</p>
                        </div>
                    }
                        .into_any()
                } else {
                    let viewing = format!("You're viewing: {}", slug::viewing_label(&segments));
                    let category = format!("Category path: {}", slug::category_path(&segments));
                    view! {
                        <div class="shop-page__content">
                            <h1>{viewing}</h1>
                            <p>{category}</p>
                        </div>
                    }
                        .into_any()
                }
            }}
            <Cart/>
        </div>
    }
}
