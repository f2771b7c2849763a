//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Route params arrive as opaque strings; a page only checks
//! that the one it needs is present.

pub mod about;
pub mod dashboard;
pub mod home;
pub mod product_comment;
pub mod product_detail;
pub mod products;
pub mod shop;

use leptos::prelude::*;
use leptos_router::params::ParamsMap;

/// Read a route param, treating a missing one as the empty string.
fn route_param(params: Memo<ParamsMap>, key: &str) -> String {
    params.with(|p| p.get(key).unwrap_or_default())
}
