//! Product records and the read-only catalog they are looked up in.
//!
//! DESIGN
//! ======
//! `ProductCatalog` wraps an `Arc<[Product]>` so clones are cheap and the
//! catalog can be provided as context on both the server and the browser.
//! Lookup is a linear scan with exact string equality; ids are opaque strings
//! taken straight from the route and never parsed.

use std::sync::Arc;

/// A single product record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Product {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), description: description.into() }
    }

    /// Detail page URL for this product.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/products/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no product with id {id:?}")]
    NotFound { id: String },
}

/// Ordered, immutable product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Arc<[Product]>,
}

impl ProductCatalog {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products: products.into() }
    }

    /// First product whose id equals `id` exactly.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`find`](Self::find), with the miss reported as an error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record carries `id`.
    pub fn lookup(&self, id: &str) -> Result<&Product, CatalogError> {
        self.find(id).ok_or_else(|| CatalogError::NotFound { id: id.to_owned() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new(vec![
            Product::new("1", "iPhone 15", "Latest Apple smartphone."),
            Product::new("2", "Galaxy S24", "Samsung's newest release."),
            Product::new("3", "Pixel 8", "Google's powerful Android phone."),
        ])
    }
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
