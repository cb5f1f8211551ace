use super::*;

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(42, 7), 6);
}

#[test]
fn total_pages_with_zero_per_page_is_zero() {
    assert_eq!(total_pages(42, 0), 0);
}

#[test]
fn showing_range_first_and_middle_pages() {
    assert_eq!(showing_range(1, 10, 42), (1, 10));
    assert_eq!(showing_range(2, 10, 42), (11, 20));
}

#[test]
fn showing_range_clamps_last_page() {
    assert_eq!(showing_range(5, 10, 42), (41, 42));
}

#[test]
fn showing_range_empty_when_nothing_visible() {
    assert_eq!(showing_range(1, 10, 0), (0, 0));
    assert_eq!(showing_range(6, 10, 42), (0, 0));
    assert_eq!(showing_range(0, 10, 42), (0, 0));
}

#[test]
fn prev_next_clamp_at_bounds() {
    assert_eq!(prev_page(1), 1);
    assert_eq!(prev_page(3), 2);
    assert_eq!(next_page(3, 3), 3);
    assert_eq!(next_page(2, 3), 3);
    assert_eq!(next_page(1, 0), 1);
}

#[test]
fn showing_text_renders_range_and_noun() {
    assert_eq!(showing_text(2, 10, 42, "users"), "Showing 11 to 20 of 42 users");
    assert_eq!(showing_text(1, 10, 0, "posts"), "Showing 0 to 0 of 0 posts");
}

#[test]
fn has_prev_has_next_match_clamping() {
    assert!(!has_prev(1));
    assert!(has_prev(2));
    assert!(has_next(1, 2));
    assert!(!has_next(2, 2));
    assert!(!has_next(1, 0));
}
