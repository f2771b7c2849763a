//! Shopping cart sidebar. Static placeholder; there is no cart model.

use leptos::prelude::*;

#[component]
pub fn Cart() -> impl IntoView {
    view! {
        <aside class="cart">
            <h2 class="cart__title">"Shopping Cart"</h2>
            <div class="cart__items">
                <p class="cart__empty">"Your cart is empty"</p>
            </div>
        </aside>
    }
}
