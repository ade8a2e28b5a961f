pub mod cli;
pub mod models;
pub mod occupancy;
pub mod server;

pub use models::*;

/// Default port for the occupancy API server
pub const DEFAULT_PORT: u16 = 8080;

/// Application name, used for the config directory
pub const APP_NAME: &str = "roomring";
