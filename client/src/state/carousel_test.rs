use super::*;

#[test]
fn empty_carousel_has_one_empty_page_and_no_controls() {
    let carousel = Carousel::default();
    assert_eq!(carousel.page_count(), 1);
    assert_eq!(carousel.visible(), 0..0);
    assert!(!carousel.has_controls());
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(Carousel::new(5, 2).page_count(), 3);
    assert_eq!(Carousel::new(4, 2).page_count(), 2);
    assert_eq!(Carousel::new(1, 2).page_count(), 1);
}

#[test]
fn zero_page_size_is_clamped() {
    let carousel = Carousel::new(3, 0);
    assert_eq!(carousel.page_count(), 3);
    assert_eq!(carousel.visible(), 0..1);
}

#[test]
fn next_walks_pages_and_wraps() {
    let mut carousel = Carousel::new(5, 2);
    carousel.next();
    assert_eq!(carousel.visible(), 2..4);
    carousel.next();
    assert_eq!(carousel.visible(), 4..5);
    carousel.next();
    assert_eq!(carousel.page(), 0);
    assert_eq!(carousel.visible(), 0..2);
}

#[test]
fn prev_from_first_page_wraps_to_last() {
    let mut carousel = Carousel::new(5, 2);
    carousel.prev();
    assert_eq!(carousel.page(), 2);
    carousel.prev();
    assert_eq!(carousel.page(), 1);
}

#[test]
fn go_to_rejects_out_of_range_pages() {
    let mut carousel = Carousel::new(5, 2);
    assert!(carousel.go_to(2));
    assert_eq!(carousel.page(), 2);
    assert!(!carousel.go_to(3));
    assert_eq!(carousel.page(), 2);
}

#[test]
fn single_page_next_stays_put() {
    let mut carousel = Carousel::new(2, 2);
    carousel.next();
    carousel.prev();
    assert_eq!(carousel.page(), 0);
    assert!(!carousel.has_controls());
}
