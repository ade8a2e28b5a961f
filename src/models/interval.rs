use serde::{Deserialize, Serialize};

/// A half-open range `[start_min, end_min)` in minutes since local midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinuteInterval {
    pub start_min: i32,
    pub end_min: i32,
}

impl MinuteInterval {
    pub fn new(start_min: i32, end_min: i32) -> Self {
        Self { start_min, end_min }
    }

    pub fn minutes(&self) -> i32 {
        self.end_min - self.start_min
    }

    /// Check if this interval overlaps the half-open range `[start, end)`
    pub fn covers(&self, start: i32, end: i32) -> bool {
        self.start_min < end && self.end_min > start
    }
}

impl std::fmt::Display for MinuteInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            format_clock(self.start_min),
            format_clock(self.end_min)
        )
    }
}

/// Format a minute-of-day value as `HH:MM`
pub fn format_clock(minutes: i32) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// A sub-arc of the bookable window, as fractions of the window length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSegment {
    pub p0: f64,
    pub p1: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Booked by the viewing subject
    Own,
    /// Booked by someone else
    #[default]
    Other,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Own => "own",
            Tone::Other => "other",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A merged busy segment tagged with who it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomBusySegment {
    pub p0: f64,
    pub p1: f64,
    pub tone: Tone,
}
