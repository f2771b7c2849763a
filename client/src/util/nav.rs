//! Navigation link helpers.

/// Whether a nav link pointing at `url` should render as active for `pathname`.
///
/// A link is active on its own URL and on every path beneath it, so
/// `/products/2` keeps "Products" highlighted.
#[must_use]
pub fn is_active(pathname: &str, url: &str) -> bool {
    pathname == url || pathname.starts_with(url)
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;
