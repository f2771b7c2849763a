use super::*;

#[test]
fn default_catalog_has_three_products_in_order() {
    let catalog = ProductCatalog::default();
    assert_eq!(catalog.len(), 3);
    let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn find_returns_exact_record_for_every_builtin_id() {
    let catalog = ProductCatalog::default();
    for product in catalog.iter() {
        assert_eq!(catalog.find(&product.id), Some(product));
    }
}

#[test]
fn find_galaxy_by_id() {
    let catalog = ProductCatalog::default();
    let product = catalog.find("2").expect("product 2 should exist");
    assert_eq!(product.name, "Galaxy S24");
    assert_eq!(product.description, "Samsung's newest release.");
}

#[test]
fn find_unknown_id_returns_none() {
    let catalog = ProductCatalog::default();
    assert!(catalog.find("999").is_none());
    assert!(catalog.find("").is_none());
}

#[test]
fn find_uses_exact_string_equality() {
    let catalog = ProductCatalog::default();
    assert!(catalog.find("01").is_none());
    assert!(catalog.find(" 1").is_none());
    assert!(catalog.find("1/").is_none());
}

#[test]
fn lookup_reports_missing_id() {
    let catalog = ProductCatalog::default();
    assert_eq!(catalog.lookup("999"), Err(CatalogError::NotFound { id: "999".to_owned() }));
    assert_eq!(catalog.lookup("3").map(|p| p.name.as_str()), Ok("Pixel 8"));
}

#[test]
fn not_found_error_message_names_the_id() {
    let err = CatalogError::NotFound { id: "42".to_owned() };
    assert_eq!(err.to_string(), "no product with id \"42\"");
}

#[test]
fn fixture_catalog_replaces_builtin_records() {
    let catalog = ProductCatalog::new(vec![Product::new("a", "Fixture", "Test only.")]);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.find("1").is_none());
    assert_eq!(catalog.find("a").map(|p| p.name.as_str()), Some("Fixture"));
}

#[test]
fn duplicate_ids_resolve_to_first_record() {
    let catalog = ProductCatalog::new(vec![
        Product::new("x", "First", "one"),
        Product::new("x", "Second", "two"),
    ]);
    assert_eq!(catalog.find("x").map(|p| p.name.as_str()), Some("First"));
}

#[test]
fn empty_catalog_finds_nothing() {
    let catalog = ProductCatalog::new(Vec::new());
    assert!(catalog.is_empty());
    assert!(catalog.find("1").is_none());
}

#[test]
fn href_points_at_detail_route() {
    assert_eq!(Product::new("7", "n", "d").href(), "/products/7");
}

#[test]
fn clones_share_records() {
    let catalog = ProductCatalog::default();
    let other = catalog.clone();
    assert_eq!(catalog, other);
}
