//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same `App` renders on the server (SSR) and hydrates in the browser.
//! The host may provide a `ProductCatalog` as context before `App` runs;
//! otherwise the built-in catalog is used.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::body_attribute_cleaner::BodyAttributeCleaner;
use crate::components::dashboard_layout::DashboardRoute;
use crate::components::front_layout::FrontLayout;
use crate::components::navbar::Navbar;
use crate::components::not_found::NotFound;
use crate::data::products::ProductCatalog;
use crate::pages::{
    about::AboutPage, dashboard::DashboardPage, home::HomePage, product_comment::ProductCommentPage,
    product_detail::ProductDetailPage, products::ProductsPage, shop::ShopPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the product catalog and sets up the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<ProductCatalog>().is_none() {
        provide_context(ProductCatalog::default());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Learn Routing"/>
        <Meta name="description" content="Nested layouts, parallel slots and dynamic routes"/>
        <BodyAttributeCleaner/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <ParentRoute path=StaticSegment("") view=FrontLayout>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("products") view=ProductsPage/>
                        <Route
                            path=(
                                StaticSegment("products"),
                                ParamSegment("id"),
                                StaticSegment("comments"),
                                ParamSegment("comment_id"),
                            )
                            view=ProductCommentPage
                        />
                        <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailPage/>
                        <Route path=StaticSegment("shop") view=ShopPage/>
                        <Route path=(StaticSegment("shop"), WildcardSegment("slug")) view=ShopPage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("dashboard") view=DashboardRoute>
                        <Route path=StaticSegment("") view=DashboardPage/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}
