//! Fixed in-memory data rendered by the pages.
//!
//! DESIGN
//! ======
//! Nothing here is mutated after construction. The product catalog is handed
//! to views through Leptos context so hosts and tests can swap in fixtures;
//! dashboard mocks are plain `const` tables.

pub mod dashboard;
pub mod products;
