use super::*;

#[test]
fn format_created_handles_backend_timestamps() {
    assert_eq!(format_created("2024-01-15 10:30:00.123Z"), "Jan 15, 2024");
    assert_eq!(format_created("2023-12-05 00:00:00.000Z"), "Dec 5, 2023");
}

#[test]
fn format_created_handles_iso_t_separator() {
    assert_eq!(format_created("2024-06-01T08:00:00Z"), "Jun 1, 2024");
}

#[test]
fn format_created_passes_through_unparseable_input() {
    assert_eq!(format_created(""), "");
    assert_eq!(format_created("yesterday"), "yesterday");
    assert_eq!(format_created("2024-13-01 00:00:00.000Z"), "2024-13-01 00:00:00.000Z");
}

#[test]
fn truncate_keeps_short_text_intact() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn truncate_cuts_and_marks_long_text() {
    assert_eq!(truncate("hello world", 5), "hello…");
    assert_eq!(truncate("hello world", 6), "hello…");
}
