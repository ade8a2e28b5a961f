use serde::{Deserialize, Serialize};

/// Read access to the time fields of a booking record.
///
/// Empty strings are treated the same as missing fields.
pub trait BookingTimes {
    /// Calendar date, usually `YYYY-MM-DD` or a full date-time
    fn date(&self) -> Option<&str>;
    /// Start as `HH:MM` or a full date-time
    fn start_time(&self) -> Option<&str>;
    /// End as `HH:MM` or a full date-time
    fn end_time(&self) -> Option<&str>;
}

/// A booking of a room or desk as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Who made the booking (e.g. an email), used to tell own bookings apart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Booking {
    pub fn new(date: Option<&str>, start_time: &str, end_time: &str) -> Self {
        Self {
            date: date.map(|d| d.to_string()),
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
            owner: None,
        }
    }

    pub fn with_owner(mut self, owner: &str) -> Self {
        self.owner = Some(owner.to_string());
        self
    }

    /// Check if this booking was made by `viewer`
    pub fn is_owned_by(&self, viewer: &str) -> bool {
        self.owner.as_deref() == Some(viewer)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl BookingTimes for Booking {
    fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    fn start_time(&self) -> Option<&str> {
        non_empty(&self.start_time)
    }

    fn end_time(&self) -> Option<&str> {
        non_empty(&self.end_time)
    }
}

impl<T: BookingTimes + ?Sized> BookingTimes for &T {
    fn date(&self) -> Option<&str> {
        (**self).date()
    }

    fn start_time(&self) -> Option<&str> {
        (**self).start_time()
    }

    fn end_time(&self) -> Option<&str> {
        (**self).end_time()
    }
}
