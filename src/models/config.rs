use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::format_clock;
use crate::occupancy::clock_minutes;

/// Earliest visualizable time of the default bookable window
pub const BOOKABLE_START: &str = "06:00";

/// Latest visualizable time of the default bookable window
pub const BOOKABLE_END: &str = "22:00";

/// Start of the business day, in minutes since midnight (07:00)
pub const BUSINESS_START_MINUTES: i32 = 7 * 60;

/// End of the business day, in minutes since midnight (19:00)
pub const BUSINESS_END_MINUTES: i32 = 19 * 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {field} '{value}': expected HH:MM")]
    InvalidClock { field: &'static str, value: String },
    #[error("business window {start}..{end} is empty")]
    EmptyBusinessWindow { start: String, end: String },
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Window constants supplied by the surrounding application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Default bookable window bounds, compared verbatim against requested bounds
    pub bookable_start: String,
    pub bookable_end: String,
    /// Window substituted when the default bookable bounds are requested
    pub business_start_minutes: i32,
    pub business_end_minutes: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            bookable_start: BOOKABLE_START.to_string(),
            bookable_end: BOOKABLE_END.to_string(),
            business_start_minutes: BUSINESS_START_MINUTES,
            business_end_minutes: BUSINESS_END_MINUTES,
        }
    }
}

/// Configuration stored locally for the CLI and server
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LocalConfig {
    pub bookable_start: Option<String>,
    pub bookable_end: Option<String>,
    pub business_start: Option<String>,
    pub business_end: Option<String>,
}

impl LocalConfig {
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("ROOMRING_CONFIG") {
            return PathBuf::from(path);
        }
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home)
            .join(".config")
            .join(crate::APP_NAME)
            .join("config.json")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path())
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::config_path())
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the stored values and fill in defaults for unset ones
    pub fn window_config(&self) -> Result<WindowConfig, ConfigError> {
        let defaults = WindowConfig::default();

        checked_clock("bookable_start", self.bookable_start.as_deref())?;
        checked_clock("bookable_end", self.bookable_end.as_deref())?;
        let bookable_start = self
            .bookable_start
            .clone()
            .unwrap_or(defaults.bookable_start);
        let bookable_end = self.bookable_end.clone().unwrap_or(defaults.bookable_end);

        let business_start_minutes = checked_clock("business_start", self.business_start.as_deref())?
            .unwrap_or(defaults.business_start_minutes);
        let business_end_minutes = checked_clock("business_end", self.business_end.as_deref())?
            .unwrap_or(defaults.business_end_minutes);

        if business_end_minutes <= business_start_minutes {
            return Err(ConfigError::EmptyBusinessWindow {
                start: format_clock(business_start_minutes),
                end: format_clock(business_end_minutes),
            });
        }

        Ok(WindowConfig {
            bookable_start,
            bookable_end,
            business_start_minutes,
            business_end_minutes,
        })
    }
}

fn checked_clock(field: &'static str, value: Option<&str>) -> Result<Option<i32>, ConfigError> {
    match value {
        None => Ok(None),
        Some(v) => clock_minutes(v)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidClock {
                field,
                value: v.to_string(),
            }),
    }
}
