use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use super::OutputFormat;
use crate::models::{format_clock, LocalConfig};
use crate::occupancy::clock_minutes;

/// Config show response
#[derive(Debug, Serialize)]
pub struct ConfigShowResponse {
    pub path: String,
    pub bookable_start: String,
    pub bookable_end: String,
    pub business_start: String,
    pub business_end: String,
}

impl std::fmt::Display for ConfigShowResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Config file: {}", self.path)?;
        writeln!(
            f,
            "Bookable window: {}-{}",
            self.bookable_start, self.bookable_end
        )?;
        writeln!(
            f,
            "Business day: {}-{}",
            self.business_start, self.business_end
        )
    }
}

/// Show the effective window configuration
pub fn run_config_show(format: OutputFormat) -> Result<()> {
    let local_config = LocalConfig::load().context("Failed to load local config")?;
    let window = local_config.window_config()?;

    let response = ConfigShowResponse {
        path: LocalConfig::config_path().display().to_string(),
        bookable_start: window.bookable_start,
        bookable_end: window.bookable_end,
        business_start: format_clock(window.business_start_minutes),
        business_end: format_clock(window.business_end_minutes),
    };

    format.print(&response)
}

/// Set the default bookable window bounds
pub fn run_config_bookable(start: &str, end: &str, format: OutputFormat) -> Result<()> {
    update_config_at(&LocalConfig::config_path(), start, end, |config| {
        config.bookable_start = Some(start.to_string());
        config.bookable_end = Some(end.to_string());
    })?;

    let response = super::SuccessResponse {
        message: format!("Bookable window set to: {}-{}", start, end),
    };
    format.print(&response)
}

/// Set the business-day window
pub fn run_config_business(start: &str, end: &str, format: OutputFormat) -> Result<()> {
    update_config_at(&LocalConfig::config_path(), start, end, |config| {
        config.business_start = Some(start.to_string());
        config.business_end = Some(end.to_string());
    })?;

    let response = super::SuccessResponse {
        message: format!("Business day set to: {}-{}", start, end),
    };
    format.print(&response)
}

/// Apply `edit` to the config file at `path`, validating before writing.
///
/// An unreadable or malformed file is reported, never replaced.
fn update_config_at(
    path: &Path,
    start: &str,
    end: &str,
    edit: impl FnOnce(&mut LocalConfig),
) -> Result<()> {
    check_range(start, end)?;

    let mut config = LocalConfig::load_from(path).context("Failed to load local config")?;
    edit(&mut config);
    config.window_config()?;
    config
        .save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn check_range(start: &str, end: &str) -> Result<()> {
    let (Some(s), Some(e)) = (clock_minutes(start), clock_minutes(end)) else {
        anyhow::bail!("Invalid time format. Use: HH:MM");
    };
    if e <= s {
        anyhow::bail!("End {} must be after start {}", end, start);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range("08:00", "18:00").is_ok());
        assert!(check_range("18:00", "08:00").is_err());
        assert!(check_range("08:00", "08:00").is_err());
        assert!(check_range("8:00", "18:00").is_err());
    }

    fn set_business(config: &mut LocalConfig) {
        config.business_start = Some("08:00".to_string());
        config.business_end = Some("18:00".to_string());
    }

    #[test]
    fn test_update_keeps_existing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"bookable_start":"07:00","bookable_end":"21:00"}"#).unwrap();

        update_config_at(&path, "08:00", "18:00", set_business).unwrap();

        let config = LocalConfig::load_from(&path).unwrap();
        assert_eq!(config.bookable_start.as_deref(), Some("07:00"));
        assert_eq!(config.bookable_end.as_deref(), Some("21:00"));
        assert_eq!(config.business_start.as_deref(), Some("08:00"));
    }

    #[test]
    fn test_update_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        update_config_at(&path, "08:00", "18:00", set_business).unwrap();

        let config = LocalConfig::load_from(&path).unwrap();
        assert_eq!(config.business_end.as_deref(), Some("18:00"));
        assert_eq!(config.bookable_start, None);
    }

    #[test]
    fn test_update_refuses_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let corrupt = r#"{"business_start":"08:00","business_end":"18:00",}"#;
        std::fs::write(&path, corrupt).unwrap();

        let result = update_config_at(&path, "07:00", "21:00", |config| {
            config.bookable_start = Some("07:00".to_string());
            config.bookable_end = Some("21:00".to_string());
        });

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), corrupt);
    }

    #[test]
    fn test_update_rejects_bad_range_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(update_config_at(&path, "18:00", "08:00", set_business).is_err());
        assert!(!path.exists());
    }
}
