use super::*;

#[test]
fn heading_names_comment_then_product() {
    assert_eq!(comment_heading("2", "17"), "Comment 17 for product 2");
}

#[test]
fn heading_passes_ids_through_unvalidated() {
    assert_eq!(comment_heading("not-a-number", "x"), "Comment x for product not-a-number");
}
