//! Top navigation bar rendered on every route.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::nav::is_active;

/// Label/URL pairs shown on the right side of the bar.
pub const NAV_LINKS: [(&str, &str); 3] = [("Dashboard", "/dashboard"), ("About", "/about"), ("Products", "/products")];

/// Navigation bar with the brand link and section links.
/// The link matching the current location is highlighted.
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    "My App"
                </a>
                <div class="navbar__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(name, url)| {
                            let class = move || {
                                if is_active(&pathname.get(), url) {
                                    "navbar__link navbar__link--active"
                                } else {
                                    "navbar__link"
                                }
                            };
                            view! {
                                <a href=url class=class>
                                    {name}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}
