use super::*;
use crate::state::test_helpers;
use client::data::products::{Product, ProductCatalog};

#[tokio::test]
async fn healthz_reports_builtin_catalog_size() {
    let Json(health) = healthz(State(test_helpers::test_app_state())).await;
    assert_eq!(health, Health { status: "ok", products: 3 });
}

#[tokio::test]
async fn healthz_reports_fixture_catalog_size() {
    let catalog = ProductCatalog::new(vec![Product::new("a", "A", "a")]);
    let Json(health) = healthz(State(test_helpers::test_app_state_with_catalog(catalog))).await;
    assert_eq!(health.products, 1);
}

#[test]
fn health_serializes_as_flat_object() {
    let value = serde_json::to_value(Health { status: "ok", products: 3 }).unwrap();
    assert_eq!(value, serde_json::json!({ "status": "ok", "products": 3 }));
}
