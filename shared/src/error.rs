use thiserror::Error;

/// Errors raised while turning keys and numbers into calendar dates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid date key '{0}', expected YYYY-MM-DD")]
    InvalidDateKey(String),

    #[error("{year}-{month}-{day} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("month {0} is out of range 1..=12")]
    InvalidMonth(u32),

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}
