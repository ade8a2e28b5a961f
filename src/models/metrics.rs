use serde::{Deserialize, Serialize};

use super::{MinuteInterval, RingSegment};

/// Occupied/free structure of one bookable window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOccupancyMetrics {
    pub intervals: Vec<MinuteInterval>,
    pub segments: Vec<RingSegment>,
    pub free_intervals: Vec<MinuteInterval>,
    pub free_segments: Vec<RingSegment>,
    pub occupied_minutes: i32,
    pub free_minutes: i32,
    /// Zero when the window could not be resolved
    pub window_minutes: i32,
    /// Occupied fraction of the window, in `[0, 1]`
    pub occupied_ratio: f64,
}

impl RoomOccupancyMetrics {
    /// The defined result for a degenerate window
    pub fn empty() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for RoomOccupancyMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.window_minutes == 0 {
            return writeln!(f, "No bookable window.");
        }

        writeln!(
            f,
            "Occupied: {} of {} min ({:.1}%)",
            self.occupied_minutes,
            self.window_minutes,
            self.occupied_ratio * 100.0
        )?;
        writeln!(f, "Busy:")?;
        if self.intervals.is_empty() {
            writeln!(f, "  none")?;
        }
        for (interval, segment) in self.intervals.iter().zip(&self.segments) {
            writeln!(f, "  {} [{:.3}, {:.3}]", interval, segment.p0, segment.p1)?;
        }
        writeln!(f, "Free:")?;
        if self.free_intervals.is_empty() {
            writeln!(f, "  none")?;
        }
        for (interval, segment) in self.free_intervals.iter().zip(&self.free_segments) {
            writeln!(f, "  {} [{:.3}, {:.3}]", interval, segment.p0, segment.p1)?;
        }
        Ok(())
    }
}
