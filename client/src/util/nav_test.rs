use super::*;

#[test]
fn exact_match_is_active() {
    assert!(is_active("/about", "/about"));
}

#[test]
fn nested_path_is_active() {
    assert!(is_active("/products/2", "/products"));
    assert!(is_active("/products/2/comments/9", "/products"));
}

#[test]
fn unrelated_path_is_inactive() {
    assert!(!is_active("/about", "/products"));
    assert!(!is_active("/", "/dashboard"));
}

#[test]
fn prefix_match_is_textual() {
    assert!(is_active("/aboutus", "/about"));
}
