//! Occupancy of a bookable window, computed from booking records.
//!
//! Everything here is pure: no I/O, no shared state. Bookings that cannot be
//! interpreted are dropped, and a degenerate window yields an empty result.

mod aggregate;
mod algebra;
mod busy;
mod day;
mod segments;
mod time;
mod window;

pub use aggregate::*;
pub use algebra::*;
pub use busy::*;
pub use day::*;
pub use segments::*;
pub use time::*;
pub use window::*;
