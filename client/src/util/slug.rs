//! Catch-all route segment handling for `/shop/{...slug}`.
//!
//! Segments are cut from the raw, still percent-encoded request path and only
//! then decoded one by one. An encoded slash (`%2F`) therefore stays inside its
//! segment instead of splitting it in two.

/// Mount point of the shop routes.
pub const SHOP_PREFIX: &str = "/shop";

/// Decoded, non-empty path segments below `prefix`.
///
/// Paths outside `prefix` and the bare prefix itself yield no segments. A
/// segment that does not decode to UTF-8 is kept in its encoded form.
#[must_use]
pub fn segments(path: &str, prefix: &str) -> Vec<String> {
    let Some(rest) = path.strip_prefix(prefix) else {
        return Vec::new();
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        return Vec::new();
    }
    rest.split('/')
        .filter(|s| !s.is_empty())
        .map(|raw| urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), |decoded| decoded.into_owned()))
        .collect()
}

/// Breadcrumb style `phones / android`.
#[must_use]
pub fn viewing_label(segments: &[String]) -> String {
    segments.join(" / ")
}

/// Category style `phones > android`.
#[must_use]
pub fn category_path(segments: &[String]) -> String {
    segments.join(" > ")
}

#[cfg(test)]
#[path = "slug_test.rs"]
mod tests;
