//! Page arithmetic for the record-list views.
//!
//! All pages are 1-based, matching the backend's `page` query parameter.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Number of pages needed for `total_items` at `per_page` records each.
pub fn total_pages(total_items: u32, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// 1-based inclusive record range visible on `page`, for range text such
/// as "Showing 11 to 20 of 42 users". `(0, 0)` when nothing is visible.
pub fn showing_range(page: u32, per_page: u32, total_items: u32) -> (u32, u32) {
    if page == 0 || per_page == 0 || total_items == 0 {
        return (0, 0);
    }
    let start = (page - 1) * per_page + 1;
    if start > total_items {
        return (0, 0);
    }
    (start, (page * per_page).min(total_items))
}

pub fn has_prev(page: u32) -> bool {
    page > 1
}

pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

/// Previous page, clamped to the first.
pub fn prev_page(page: u32) -> u32 {
    if page > 1 { page - 1 } else { page }
}

/// Next page, clamped to the last.
pub fn next_page(page: u32, total_pages: u32) -> u32 {
    if page < total_pages { page + 1 } else { page }
}

/// Range label for the pagination footer, e.g. "Showing 11 to 20 of 42
/// users".
pub fn showing_text(page: u32, per_page: u32, total_items: u32, noun: &str) -> String {
    let (start, end) = showing_range(page, per_page, total_items);
    format!("Showing {start} to {end} of {total_items} {noun}")
}
