//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome (navbar, layouts, slot panels) and the
//! not-found views. Route-level screens live in `pages`.

pub mod analytics_panel;
pub mod body_attribute_cleaner;
pub mod cart;
pub mod dashboard_layout;
pub mod front_layout;
pub mod navbar;
pub mod not_found;
pub mod team_panel;
