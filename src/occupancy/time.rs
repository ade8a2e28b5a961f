use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike};

/// Offset-bearing layouts RFC 3339 rejects, such as `2024-01-01T09:15Z`
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M%#z"];

/// Local date-time layouts accepted after RFC 3339, tried in order
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A time string resolved into one of the two shapes bookings use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeValue {
    /// Bare `HH:MM`, already in minutes since midnight
    Clock(i32),
    /// A full date-time in local wall-clock terms
    DateTime(NaiveDateTime),
}

impl TimeValue {
    /// Resolve a time string, or `None` if it is neither shape
    pub fn parse(value: &str) -> Option<Self> {
        if is_clock_pattern(value) {
            return clock_minutes(value).map(TimeValue::Clock);
        }
        parse_date_time(value).map(TimeValue::DateTime)
    }

    pub fn minute_of_day(&self) -> i32 {
        match self {
            TimeValue::Clock(minutes) => *minutes,
            TimeValue::DateTime(dt) => (dt.hour() * 60 + dt.minute()) as i32,
        }
    }

    /// `YYYY-MM-DD` of the local calendar day, if the value carries a date
    pub fn day_key(&self) -> Option<String> {
        match self {
            TimeValue::Clock(_) => None,
            TimeValue::DateTime(dt) => Some(dt.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Check for exactly two digits, a colon, two digits
pub fn is_clock_pattern(value: &str) -> bool {
    let b = value.as_bytes();
    b.len() == 5
        && b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[2] == b':'
        && b[3].is_ascii_digit()
        && b[4].is_ascii_digit()
}

/// Decode `HH:MM` as `hours * 60 + minutes`.
///
/// Only the pattern is checked, so `"25:00"` decodes to 1500.
pub fn clock_minutes(value: &str) -> Option<i32> {
    if !is_clock_pattern(value) {
        return None;
    }
    let hours: i32 = value[0..2].parse().ok()?;
    let minutes: i32 = value[3..5].parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Parse a full date-time, keeping the written wall-clock time.
///
/// Offsets are dropped rather than converted; callers localize upstream.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    for format in OFFSET_DATE_TIME_FORMATS {
        if let Ok(dt) = DateTime::<FixedOffset>::parse_from_str(value, format) {
            return Some(dt.naive_local());
        }
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Minute of day for a booking time field; `None` means no interval
pub fn parse_minutes(value: Option<&str>) -> Option<i32> {
    let value = value.filter(|v| !v.is_empty())?;
    TimeValue::parse(value).map(|t| t.minute_of_day())
}
