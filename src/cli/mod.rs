mod config;
mod occupancy;

pub use config::*;
pub use occupancy::*;

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Read;

use crate::models::{Booking, LocalConfig, WindowConfig};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn print<T: Serialize + std::fmt::Display>(&self, value: &T) -> Result<()> {
        match self {
            OutputFormat::Human => println!("{}", value),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(value)?);
            }
        }
        Ok(())
    }
}

/// Success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

impl std::fmt::Display for SuccessResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Read a JSON array of bookings from a file, or stdin for `-`
pub fn load_bookings(path: &str) -> Result<Vec<Booking>> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read bookings from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read bookings file {}", path))?
    };
    parse_bookings(&content)
}

pub fn parse_bookings(content: &str) -> Result<Vec<Booking>> {
    serde_json::from_str(content).context("Bookings must be a JSON array of booking objects")
}

/// Window settings from the local config, validated
pub fn load_window_config() -> Result<WindowConfig> {
    let config = LocalConfig::load().context("Failed to load local config")?;
    Ok(config.window_config()?)
}
