use super::*;

#[test]
fn greeting_echoes_search_text() {
    assert_eq!(greeting("abc"), "Hello abc");
}

#[test]
fn greeting_for_empty_search() {
    assert_eq!(greeting(""), "Hello ");
}

#[test]
fn greeting_keeps_text_verbatim() {
    assert_eq!(greeting("  Pixel <8>"), "Hello   Pixel <8>");
}
