use anyhow::Result;
use serde::Serialize;

use super::{load_bookings, load_window_config, OutputFormat};
use crate::models::{RingSegment, RoomBusySegment};
use crate::occupancy::{
    busy_segments_for_viewer, compute_room_occupancy, compute_room_occupancy_segments, WindowSpec,
};

/// Which bookings and window to look at
#[derive(Debug, Clone)]
pub struct OccupancyArgs<'a> {
    pub bookings: &'a str,
    pub day: Option<&'a str>,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
}

impl OccupancyArgs<'_> {
    fn window(&self) -> WindowSpec {
        WindowSpec::from_parts(self.start, self.end)
    }
}

/// Occupied ring segments
#[derive(Debug, Serialize)]
pub struct SegmentsResponse {
    pub segments: Vec<RingSegment>,
}

impl std::fmt::Display for SegmentsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return writeln!(f, "No occupied segments.");
        }
        writeln!(f, "Occupied segments:")?;
        for segment in &self.segments {
            writeln!(f, "  {:.3} - {:.3}", segment.p0, segment.p1)?;
        }
        Ok(())
    }
}

/// Busy segments tagged with ownership
#[derive(Debug, Serialize)]
pub struct BusyResponse {
    pub segments: Vec<RoomBusySegment>,
}

impl std::fmt::Display for BusyResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return writeln!(f, "No busy segments.");
        }
        writeln!(f, "Busy segments:")?;
        for segment in &self.segments {
            writeln!(
                f,
                "  {:.3} - {:.3} ({})",
                segment.p0, segment.p1, segment.tone
            )?;
        }
        Ok(())
    }
}

/// Print full occupancy metrics
pub fn run_occupancy(args: &OccupancyArgs<'_>, format: OutputFormat) -> Result<()> {
    let config = load_window_config()?;
    let bookings = load_bookings(args.bookings)?;

    let metrics = compute_room_occupancy(&bookings, args.day, &args.window(), &config);
    format.print(&metrics)
}

/// Print occupied segments only
pub fn run_segments(args: &OccupancyArgs<'_>, format: OutputFormat) -> Result<()> {
    let config = load_window_config()?;
    let bookings = load_bookings(args.bookings)?;

    let segments = compute_room_occupancy_segments(&bookings, args.day, &args.window(), &config);
    format.print(&SegmentsResponse { segments })
}

/// Print busy segments, marking bookings owned by `viewer` as own
pub fn run_busy(args: &OccupancyArgs<'_>, viewer: Option<&str>, format: OutputFormat) -> Result<()> {
    let config = load_window_config()?;
    let bookings = load_bookings(args.bookings)?;

    let segments = busy_segments_for_viewer(&bookings, args.day, args.window(), viewer, &config);
    format.print(&BusyResponse { segments })
}
