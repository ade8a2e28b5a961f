use serde::{Deserialize, Serialize};

use super::time::clock_minutes;
use crate::models::WindowConfig;

/// Requested window bounds as `HH:MM` strings.
///
/// A missing bound falls back to the configured bookable bound, and the
/// default bookable pair resolves to the business-day window. `WindowSpec::default()`
/// therefore always means "business day".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl WindowSpec {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }

    pub fn from_parts(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(String::from),
            end: end.map(String::from),
        }
    }

    /// Resolve to concrete minute bounds, or `None` for a degenerate window
    pub fn resolve(&self, config: &WindowConfig) -> Option<ResolvedWindow> {
        let start = self.start.as_deref().unwrap_or(config.bookable_start.as_str());
        let end = self.end.as_deref().unwrap_or(config.bookable_end.as_str());

        let (win_start, win_end) = if start == config.bookable_start && end == config.bookable_end
        {
            (config.business_start_minutes, config.business_end_minutes)
        } else {
            match (clock_minutes(start), clock_minutes(end)) {
                (Some(s), Some(e)) => (s, e),
                _ => {
                    tracing::debug!("Unparseable window bounds {}..{}", start, end);
                    return None;
                }
            }
        };

        if win_end <= win_start {
            tracing::debug!("Empty window {}..{}", start, end);
            return None;
        }
        Some(ResolvedWindow {
            start: win_start,
            end: win_end,
        })
    }
}

/// A window with positive length, in minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWindow {
    pub start: i32,
    pub end: i32,
}

impl ResolvedWindow {
    pub fn minutes(&self) -> i32 {
        self.end - self.start
    }

    /// Position of a minute boundary as a fraction of the window
    pub fn fraction(&self, minute: i32) -> f64 {
        f64::from(minute - self.start) / f64::from(self.minutes())
    }
}
