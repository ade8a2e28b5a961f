use crate::models::{MinuteInterval, RingSegment};

/// Map window-clamped intervals to fractions of the window.
///
/// The window must have positive length.
pub fn intervals_to_segments(
    win_start: i32,
    win_end: i32,
    intervals: &[MinuteInterval],
) -> Vec<RingSegment> {
    let length = f64::from(win_end - win_start);
    intervals
        .iter()
        .map(|i| RingSegment {
            p0: f64::from(i.start_min - win_start) / length,
            p1: f64::from(i.end_min - win_start) / length,
        })
        .collect()
}
