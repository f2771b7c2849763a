//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! handed to the Leptos integration through `FromRef`. The product catalog is
//! built once at startup and provided to every render as context.

use axum::extract::FromRef;
use client::data::products::ProductCatalog;
use leptos::prelude::LeptosOptions;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub catalog: ProductCatalog,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: ProductCatalog, leptos_options: LeptosOptions) -> Self {
        Self { catalog, leptos_options }
    }
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Leptos options that need no `cargo leptos` environment.
    #[must_use]
    pub fn test_leptos_options() -> LeptosOptions {
        LeptosOptions::builder().output_name("storefront").build()
    }

    /// Create a test `AppState` with the built-in catalog.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(ProductCatalog::default(), test_leptos_options())
    }

    /// Create a test `AppState` with a fixture catalog.
    #[must_use]
    pub fn test_app_state_with_catalog(catalog: ProductCatalog) -> AppState {
        AppState::new(catalog, test_leptos_options())
    }
}
