//! Display formatting for backend record fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats a backend `created` timestamp (`YYYY-MM-DD hh:mm:ss.mmmZ`, or
/// the ISO `T` variant) as `Mon D, YYYY`. Returns the input unchanged when
/// it does not parse.
pub fn format_created(raw: &str) -> String {
    let date = raw.split([' ', 'T']).next().unwrap_or(raw);
    let mut parts = date.split('-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return raw.to_owned();
    };
    let (Ok(year), Ok(month), Ok(day)) = (y.parse::<i32>(), m.parse::<usize>(), d.parse::<u32>())
    else {
        return raw.to_owned();
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return raw.to_owned();
    }
    format!("{} {day}, {year}", MONTHS[month - 1])
}

/// Truncate `text` to `max_chars` characters, appending an ellipsis when
/// anything was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
