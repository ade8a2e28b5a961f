mod booking;
mod config;
mod interval;
mod metrics;

pub use booking::*;
pub use config::*;
pub use interval::*;
pub use metrics::*;
