//! Landing page linking to each routing demo.

use leptos::prelude::*;

/// Demo entry points shown on the landing page.
pub const DEMO_LINKS: [(&str, &str); 8] = [
    ("About", "/about"),
    ("Products", "/products"),
    ("Product detail", "/products/2"),
    ("Missing product", "/products/999"),
    ("Product comment", "/products/1/comments/42"),
    ("Shop", "/shop"),
    ("Shop category", "/shop/phones/android"),
    ("Dashboard", "/dashboard"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Learn Routing"</h1>
            <p class="home-page__intro">
                "Nested layouts, parallel slots, dynamic segments and not-found handling."
            </p>
            <ul class="home-page__links">
                {DEMO_LINKS
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <li>
                                <a href=href>{label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
