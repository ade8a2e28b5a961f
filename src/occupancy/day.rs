use super::time::TimeValue;
use crate::models::BookingTimes;

/// First ten characters of a date field (the `YYYY-MM-DD` prefix)
fn date_prefix(date: &str) -> &str {
    match date.char_indices().nth(10) {
        Some((idx, _)) => &date[..idx],
        None => date,
    }
}

/// Decide whether a booking falls on `day` (`YYYY-MM-DD`).
///
/// Fails open: a booking is only excluded when its date provably differs.
pub fn belongs_to_day<B: BookingTimes + ?Sized>(booking: &B, day: Option<&str>) -> bool {
    let Some(day) = day.filter(|d| !d.is_empty()) else {
        return true;
    };

    if let Some(date) = booking.date() {
        return date_prefix(date) == day;
    }

    let Some(start) = booking.start_time() else {
        return true;
    };

    match TimeValue::parse(start).and_then(|value| value.day_key()) {
        Some(key) => key == day,
        // No date component, or unparseable
        None => true,
    }
}
