use std::collections::BTreeSet;

use super::aggregate::booking_interval;
use super::window::WindowSpec;
use crate::models::{Booking, BookingTimes, MinuteInterval, RoomBusySegment, Tone, WindowConfig};

/// Two same-tone segments closer than this (in window fractions) are joined
pub const SEGMENT_MERGE_EPSILON: f64 = 1e-6;

/// Options for [`compute_room_busy_segments`]
pub struct BusySegmentOptions<'a, B> {
    pub day: Option<&'a str>,
    pub window: WindowSpec,
    /// Ownership predicate; when absent every booking is `Other`
    pub is_own_booking: Option<&'a dyn Fn(&B) -> bool>,
}

impl<'a, B> Default for BusySegmentOptions<'a, B> {
    fn default() -> Self {
        Self {
            day: None,
            window: WindowSpec::default(),
            is_own_booking: None,
        }
    }
}

impl<'a, B> BusySegmentOptions<'a, B> {
    pub fn day(mut self, day: Option<&'a str>) -> Self {
        self.day = day;
        self
    }

    pub fn window(mut self, window: WindowSpec) -> Self {
        self.window = window;
        self
    }

    pub fn is_own_booking(mut self, predicate: &'a dyn Fn(&B) -> bool) -> Self {
        self.is_own_booking = Some(predicate);
        self
    }

    fn tone_of(&self, booking: &B) -> Tone {
        match self.is_own_booking {
            Some(predicate) if predicate(booking) => Tone::Own,
            _ => Tone::Other,
        }
    }
}

/// Busy segments of the window, each tagged by who holds it.
///
/// The window is cut at every booking boundary; each piece covered by at
/// least one booking becomes `Own` if any covering booking is own, else
/// `Other`. Adjacent pieces of the same tone are then joined.
pub fn compute_room_busy_segments<B: BookingTimes>(
    bookings: &[B],
    options: &BusySegmentOptions<'_, B>,
    config: &WindowConfig,
) -> Vec<RoomBusySegment> {
    let Some(window) = options.window.resolve(config) else {
        return Vec::new();
    };

    let tagged: Vec<(MinuteInterval, Tone)> = bookings
        .iter()
        .filter_map(|b| booking_interval(b, options.day, &window).map(|i| (i, options.tone_of(b))))
        .collect();
    if tagged.is_empty() {
        return Vec::new();
    }

    let bounds: BTreeSet<i32> = tagged
        .iter()
        .flat_map(|(i, _)| [i.start_min, i.end_min])
        .collect();
    let bounds: Vec<i32> = bounds.into_iter().collect();

    let mut raw = Vec::with_capacity(bounds.len());
    for pair in bounds.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let mut covering = tagged.iter().filter(|(i, _)| i.covers(start, end)).peekable();
        if covering.peek().is_none() {
            continue;
        }

        let tone = if covering.any(|(_, tone)| *tone == Tone::Own) {
            Tone::Own
        } else {
            Tone::Other
        };
        raw.push(RoomBusySegment {
            p0: window.fraction(start),
            p1: window.fraction(end),
            tone,
        });
    }

    tracing::debug!(
        "Busy segments: {} intervals, {} boundaries, {} raw pieces",
        tagged.len(),
        bounds.len(),
        raw.len()
    );

    merge_adjacent_segments(raw)
}

/// Busy segments where a booking is own when its `owner` equals `viewer`
pub fn busy_segments_for_viewer(
    bookings: &[Booking],
    day: Option<&str>,
    window: WindowSpec,
    viewer: Option<&str>,
    config: &WindowConfig,
) -> Vec<RoomBusySegment> {
    let is_own = |b: &Booking| viewer.is_some_and(|v| b.is_owned_by(v));
    let options = BusySegmentOptions::default()
        .day(day)
        .window(window)
        .is_own_booking(&is_own);
    compute_room_busy_segments(bookings, &options, config)
}

/// Join each segment into its predecessor when tones match and they touch
pub fn merge_adjacent_segments(raw: Vec<RoomBusySegment>) -> Vec<RoomBusySegment> {
    let mut merged: Vec<RoomBusySegment> = Vec::with_capacity(raw.len());
    for segment in raw {
        match merged.last_mut() {
            Some(previous)
                if previous.tone == segment.tone
                    && (segment.p0 - previous.p1).abs() < SEGMENT_MERGE_EPSILON =>
            {
                previous.p1 = segment.p1;
            }
            _ => merged.push(segment),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_own_dominates_overlap() {
        let bookings = vec![
            Booking::new(None, "00:00", "01:40").with_owner("me"),
            Booking::new(None, "00:50", "02:30").with_owner("you"),
        ];
        let is_mine = |b: &Booking| b.is_owned_by("me");
        let options = BusySegmentOptions::default()
            .window(WindowSpec::new("00:00", "02:30"))
            .is_own_booking(&is_mine);
        let segments = compute_room_busy_segments(&bookings, &options, &WindowConfig::default());

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].tone, Tone::Own);
        assert!(approx(segments[0].p0, 0.0));
        assert!(approx(segments[0].p1, 100.0 / 150.0));
        assert_eq!(segments[1].tone, Tone::Other);
        assert!(approx(segments[1].p0, 100.0 / 150.0));
        assert!(approx(segments[1].p1, 1.0));
    }

    #[test]
    fn test_without_predicate_everything_is_other() {
        let bookings = vec![
            Booking::new(None, "09:00", "10:00").with_owner("me"),
            Booking::new(None, "10:00", "11:00"),
        ];
        let options = BusySegmentOptions::default().window(WindowSpec::new("09:00", "17:00"));
        let segments = compute_room_busy_segments(&bookings, &options, &WindowConfig::default());

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].tone, Tone::Other);
        assert!(approx(segments[0].p0, 0.0));
        assert!(approx(segments[0].p1, 0.25));
    }

    #[test]
    fn test_gaps_split_segments() {
        let bookings = vec![
            Booking::new(None, "09:00", "10:00"),
            Booking::new(None, "11:00", "12:00"),
        ];
        let options = BusySegmentOptions::default().window(WindowSpec::new("09:00", "17:00"));
        let segments = compute_room_busy_segments(&bookings, &options, &WindowConfig::default());

        assert_eq!(segments.len(), 2);
        assert!(approx(segments[0].p1, 0.125));
        assert!(approx(segments[1].p0, 0.25));
        assert!(approx(segments[1].p1, 0.375));
    }

    #[test]
    fn test_other_inside_own_is_hidden() {
        let bookings = vec![
            Booking::new(None, "09:00", "13:00").with_owner("me"),
            Booking::new(None, "10:00", "11:00"),
            Booking::new(None, "12:30", "15:00"),
        ];
        let is_mine = |b: &Booking| b.is_owned_by("me");
        let options = BusySegmentOptions::default()
            .window(WindowSpec::new("09:00", "17:00"))
            .is_own_booking(&is_mine);
        let segments = compute_room_busy_segments(&bookings, &options, &WindowConfig::default());

        let tones: Vec<Tone> = segments.iter().map(|s| s.tone).collect();
        assert_eq!(tones, vec![Tone::Own, Tone::Other]);
        assert!(approx(segments[0].p1, 0.5));
        assert!(approx(segments[1].p1, 0.75));
    }

    #[test]
    fn test_own_between_others_keeps_edges() {
        let bookings = vec![
            Booking::new(None, "09:00", "11:00"),
            Booking::new(None, "10:00", "10:30").with_owner("me"),
        ];
        let is_mine = |b: &Booking| b.is_owned_by("me");
        let options = BusySegmentOptions::default()
            .window(WindowSpec::new("09:00", "17:00"))
            .is_own_booking(&is_mine);
        let segments = compute_room_busy_segments(&bookings, &options, &WindowConfig::default());

        let tones: Vec<Tone> = segments.iter().map(|s| s.tone).collect();
        assert_eq!(tones, vec![Tone::Other, Tone::Own, Tone::Other]);
    }

    #[test]
    fn test_day_filter_and_degenerate_window() {
        let bookings = vec![Booking::new(Some("2024-01-02"), "09:00", "10:00")];
        let config = WindowConfig::default();

        let options = BusySegmentOptions::default()
            .day(Some("2024-01-01"))
            .window(WindowSpec::new("09:00", "17:00"));
        assert!(compute_room_busy_segments(&bookings, &options, &config).is_empty());

        let options = BusySegmentOptions::default().window(WindowSpec::new("17:00", "09:00"));
        assert!(compute_room_busy_segments(&bookings, &options, &config).is_empty());
    }

    #[test]
    fn test_busy_segments_for_viewer() {
        let bookings = vec![
            Booking::new(None, "09:00", "10:00").with_owner("alice@example.com"),
            Booking::new(None, "10:00", "11:00").with_owner("bob@example.com"),
        ];
        let window = WindowSpec::new("09:00", "17:00");
        let config = WindowConfig::default();

        let segments = busy_segments_for_viewer(
            &bookings,
            None,
            window.clone(),
            Some("alice@example.com"),
            &config,
        );
        let tones: Vec<Tone> = segments.iter().map(|s| s.tone).collect();
        assert_eq!(tones, vec![Tone::Own, Tone::Other]);

        let anonymous = busy_segments_for_viewer(&bookings, None, window, None, &config);
        assert_eq!(anonymous.len(), 1);
        assert_eq!(anonymous[0].tone, Tone::Other);
    }

    #[test]
    fn test_merge_tolerance() {
        let seg = |p0: f64, p1: f64| RoomBusySegment {
            p0,
            p1,
            tone: Tone::Other,
        };

        let merged = merge_adjacent_segments(vec![seg(0.0, 0.5), seg(0.5 + 5e-7, 0.8)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].p1, 0.8);

        let split = merge_adjacent_segments(vec![seg(0.0, 0.5), seg(0.5 + 2e-6, 0.8)]);
        assert_eq!(split.len(), 2);
    }

    #[test]
    fn test_merge_requires_same_tone() {
        let merged = merge_adjacent_segments(vec![
            RoomBusySegment {
                p0: 0.0,
                p1: 0.5,
                tone: Tone::Own,
            },
            RoomBusySegment {
                p0: 0.5,
                p1: 1.0,
                tone: Tone::Other,
            },
        ]);
        assert_eq!(merged.len(), 2);
    }
}
