//! Shared layout for the storefront routes (about, products, shop).

use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Pathless parent layout: a banner above whichever child route matched.
#[component]
pub fn FrontLayout() -> impl IntoView {
    view! {
        <div class="front-layout">
            <h2 class="front-layout__banner">"layout from front"</h2>
            <Outlet/>
        </div>
    }
}
