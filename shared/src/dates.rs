//! Date keys, month and weekday labels, and number formatting used by both
//! calendar views.
//!
//! Calendar arithmetic is left to `chrono`; this module only formats.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::CalendarError;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Zero-pad a number to two digits ("7" -> "07")
pub fn pad2(n: u32) -> String {
    format!("{:02}", n)
}

/// Build the `YYYY-MM-DD` key used to index holidays and leaves
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{}-{}", year, pad2(month), pad2(day))
}

pub fn date_key_for(date: NaiveDate) -> String {
    date_key(date.year(), date.month(), date.day())
}

/// Parse a `YYYY-MM-DD` key back into a date
pub fn parse_date_key(key: &str) -> Result<NaiveDate, CalendarError> {
    let parts: Vec<&str> = key.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(CalendarError::InvalidDateKey(key.to_string()));
    }

    let invalid = || CalendarError::InvalidDateKey(key.to_string());
    let year = parts[0].parse::<i32>().map_err(|_| invalid())?;
    let month = parts[1].parse::<u32>().map_err(|_| invalid())?;
    let day = parts[2].parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Full English month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("January")
}

/// Three-letter month abbreviation ("Sep")
pub fn month_short(month: u32) -> &'static str {
    &month_name(month)[..3]
}

pub fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn weekday_initial(weekday: Weekday) -> &'static str {
    &weekday_short(weekday)[..1]
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of days in a month, as chrono counts them
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidDate { year, month, day: 1 })?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match next_first {
        Some(next) => Ok(next.signed_duration_since(first).num_days() as u32),
        // Last representable month: count forward instead
        None => Ok(first.iter_days().take_while(|d| d.month() == month).count() as u32),
    }
}

/// Format a number with at most `max_decimals` decimals, dropping trailing zeros
pub fn format_decimal(value: f64, max_decimals: usize) -> String {
    let formatted = format!("{:.*}", max_decimals, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// "1 day", "1.5 days", "3 days"
pub fn format_day_count(days: f64) -> String {
    let number = format_decimal(days, 1);
    if number == "1" {
        "1 day".to_string()
    } else {
        format!("{} days", number)
    }
}

/// Format a `YYYY-MM-DD` key for display ("January 15, 2025")
pub fn format_date_for_display(key: &str) -> String {
    match parse_date_key(key) {
        Ok(date) => format!("{} {}, {}", month_name(date.month()), date.day(), date.year()),
        Err(_) => key.to_string(),
    }
}

/// Long form with weekday, used in day detail dialogs ("Monday, January 15, 2025")
pub fn format_date_long(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    };
    format!("{}, {} {}, {}", weekday, month_name(date.month()), date.day(), date.year())
}
