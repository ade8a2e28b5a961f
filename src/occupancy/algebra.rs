//! Operations on sets of half-open minute intervals.
//!
//! All functions are total: empty input gives empty output.

use crate::models::MinuteInterval;

/// Intersect `interval` with the window `[win_start, win_end)`.
///
/// Returns `None` when nothing of positive length remains.
pub fn clamp_interval(
    interval: MinuteInterval,
    win_start: i32,
    win_end: i32,
) -> Option<MinuteInterval> {
    let start = interval.start_min.max(win_start);
    let end = interval.end_min.min(win_end);
    if end <= start {
        return None;
    }
    Some(MinuteInterval::new(start, end))
}

/// Sort by start and coalesce overlapping or touching intervals
pub fn merge_intervals(intervals: &[MinuteInterval]) -> Vec<MinuteInterval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|i| i.start_min);

    let mut merged: Vec<MinuteInterval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if interval.start_min <= last.end_min => {
                last.end_min = last.end_min.max(interval.end_min);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Free gaps of the window around `merged`.
///
/// `merged` must already be sorted and non-overlapping (see [`merge_intervals`]).
pub fn invert_intervals(
    win_start: i32,
    win_end: i32,
    merged: &[MinuteInterval],
) -> Vec<MinuteInterval> {
    let mut free = Vec::with_capacity(merged.len() + 1);
    let mut cursor = win_start;

    for interval in merged {
        if interval.start_min > cursor {
            free.push(MinuteInterval::new(cursor, interval.start_min));
        }
        cursor = cursor.max(interval.end_min);
    }

    if win_end > cursor {
        free.push(MinuteInterval::new(cursor, win_end));
    }
    free
}

/// Total length of a merged interval list
pub fn total_minutes(merged: &[MinuteInterval]) -> i32 {
    merged.iter().map(|i| i.minutes()).sum()
}
