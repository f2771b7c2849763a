//! Static about page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <a href="/" class="link about-page__home">
                "Return to Home Page"
            </a>
            <p class="about-page__title">"About Page"</p>
        </div>
    }
}
