use super::*;

// ====== category_route ======

#[test]
fn route_encodes_free_form_names() {
    assert_eq!(category_route("Hogar"), "/category/Hogar");
    assert_eq!(
        category_route("Electrónica Hogar"),
        "/category/Electr%C3%B3nica%20Hogar"
    );
    assert_eq!(category_route("50% off"), "/category/50%25%20off");
}

#[test]
fn route_keeps_slashes_inside_the_segment() {
    assert_eq!(category_route("a/b"), "/category/a%2Fb");
}

// ====== is_active ======

#[test]
fn active_item_matches_decoded_param() {
    assert!(is_active(Some("Electr%C3%B3nica%20Hogar"), "Electrónica Hogar"));
    assert!(is_active(Some("Hogar"), "Hogar"));
}

#[test]
fn other_categories_are_not_active() {
    assert!(!is_active(Some("Hogar"), "Jardín"));
    assert!(!is_active(None, "Hogar"));
}
