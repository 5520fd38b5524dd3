use super::*;

#[test]
fn accents_follow_category_order() {
    assert_eq!(accent_class(0), "accent--purple");
    assert_eq!(accent_class(1), "accent--pink");
    assert_eq!(accent_class(2), "accent--blue");
    assert_eq!(accent_class(3), "accent--green");
}

#[test]
fn accents_cycle_past_four_categories() {
    assert_eq!(accent_class(4), accent_class(0));
    assert_eq!(accent_class(9), accent_class(1));
}
