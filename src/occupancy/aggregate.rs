use super::algebra::{clamp_interval, invert_intervals, merge_intervals, total_minutes};
use super::day::belongs_to_day;
use super::segments::intervals_to_segments;
use super::time::parse_minutes;
use super::window::{ResolvedWindow, WindowSpec};
use crate::models::{BookingTimes, MinuteInterval, RingSegment, RoomOccupancyMetrics, WindowConfig};

/// The window-clamped interval a booking contributes, if any
pub fn booking_interval<B: BookingTimes + ?Sized>(
    booking: &B,
    day: Option<&str>,
    window: &ResolvedWindow,
) -> Option<MinuteInterval> {
    if !belongs_to_day(booking, day) {
        tracing::trace!("Skipping booking outside {:?}", day);
        return None;
    }

    let (Some(start), Some(end)) = (
        parse_minutes(booking.start_time()),
        parse_minutes(booking.end_time()),
    ) else {
        tracing::trace!(
            "Skipping booking with unreadable times {:?}..{:?}",
            booking.start_time(),
            booking.end_time()
        );
        return None;
    };

    if end <= start {
        tracing::trace!("Skipping booking with non-positive length {}..{}", start, end);
        return None;
    }

    clamp_interval(MinuteInterval::new(start, end), window.start, window.end)
}

/// Occupied and free structure of the window for the given bookings
pub fn compute_room_occupancy<B: BookingTimes>(
    bookings: &[B],
    day: Option<&str>,
    window: &WindowSpec,
    config: &WindowConfig,
) -> RoomOccupancyMetrics {
    let Some(resolved) = window.resolve(config) else {
        return RoomOccupancyMetrics::empty();
    };

    let clamped: Vec<MinuteInterval> = bookings
        .iter()
        .filter_map(|b| booking_interval(b, day, &resolved))
        .collect();

    let intervals = merge_intervals(&clamped);
    let free_intervals = invert_intervals(resolved.start, resolved.end, &intervals);

    let window_minutes = resolved.minutes();
    let occupied_minutes = total_minutes(&intervals);
    let occupied_ratio = (f64::from(occupied_minutes) / f64::from(window_minutes)).clamp(0.0, 1.0);

    tracing::debug!(
        "Occupancy: {} bookings -> {} intervals, {}/{} min",
        bookings.len(),
        intervals.len(),
        occupied_minutes,
        window_minutes
    );

    RoomOccupancyMetrics {
        segments: intervals_to_segments(resolved.start, resolved.end, &intervals),
        free_segments: intervals_to_segments(resolved.start, resolved.end, &free_intervals),
        intervals,
        free_intervals,
        occupied_minutes,
        free_minutes: (window_minutes - occupied_minutes).max(0),
        window_minutes,
        occupied_ratio,
    }
}

/// Occupied ring segments only
pub fn compute_room_occupancy_segments<B: BookingTimes>(
    bookings: &[B],
    day: Option<&str>,
    window: &WindowSpec,
    config: &WindowConfig,
) -> Vec<RingSegment> {
    compute_room_occupancy(bookings, day, window, config).segments
}
