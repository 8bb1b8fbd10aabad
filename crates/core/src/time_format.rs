use crate::{
    errors::TimetableResult,
    models::calendar::ClockTime,
};

/// Formats a 24-hour `"HH:MM"` time as `"hh:mm AM"` / `"hh:mm PM"`.
pub fn format_time_12h(time: &str) -> TimetableResult<String> {
    let time: ClockTime = time.parse()?;
    Ok(format_clock_12h(time))
}

pub fn format_clock_12h(time: ClockTime) -> String {
    time.as_naive().format("%I:%M %p").to_string()
}

/// Formats both bounds of a range, e.g. `("13:00", "14:00")` becomes
/// `"01:00 PM - 02:00 PM"`.
pub fn format_time_range(start: &str, end: &str) -> TimetableResult<String> {
    Ok(format!("{} - {}", format_time_12h(start)?, format_time_12h(end)?))
}
