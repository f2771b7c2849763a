use super::*;

#[test]
fn product_not_found_title_names_the_id() {
    assert_eq!(product_not_found_title("999"), "Page Not Found for this product of id: 999");
}

#[test]
fn product_not_found_title_keeps_id_opaque() {
    assert_eq!(product_not_found_title("abc-01"), "Page Not Found for this product of id: abc-01");
}
