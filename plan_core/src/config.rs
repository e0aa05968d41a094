//! Configuration file support for Liftplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftplan/config.toml`.
//! Only the schedule parameters can be overridden there; the exercise
//! table itself is fixed at compile time.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Schedule parameters for the twelve-week cycle.
///
/// The engine takes this as an explicit value rather than reading
/// module-level globals, so tests can run alternate schedules in
/// isolation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScheduleConfig {
    /// First day of week 1
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// Total program length in weeks
    #[serde(default = "default_program_weeks")]
    pub program_weeks: u32,

    /// 1-indexed weeks that run at reduced volume and intensity
    #[serde(default = "default_deload_weeks")]
    pub deload_weeks: Vec<u32>,

    /// Load and hold multiplier on deload weeks
    #[serde(default = "default_deload_factor")]
    pub deload_factor: f64,

    /// Steady-cardio multiplier on deload weeks
    #[serde(default = "default_duration_deload_factor")]
    pub duration_deload_factor: f64,

    /// Rest intervals never shrink below this many seconds
    #[serde(default = "default_rest_floor_secs")]
    pub rest_floor_secs: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            program_weeks: default_program_weeks(),
            deload_weeks: default_deload_weeks(),
            deload_factor: default_deload_factor(),
            duration_deload_factor: default_duration_deload_factor(),
            rest_floor_secs: default_rest_floor_secs(),
        }
    }
}

impl ScheduleConfig {
    /// Whether the given 1-indexed week runs at reduced volume
    pub fn is_deload(&self, week: u32) -> bool {
        self.deload_weeks.contains(&week)
    }

    /// Total number of days the program covers
    pub fn total_days(&self) -> i64 {
        i64::from(self.program_weeks) * 7
    }
}

// Default value functions
fn default_start_date() -> NaiveDate {
    // Sunday, Dec 29, 2024
    NaiveDate::from_ymd_opt(2024, 12, 29).expect("valid built-in start date")
}

fn default_program_weeks() -> u32 {
    12
}

fn default_deload_weeks() -> Vec<u32> {
    vec![6, 10]
}

fn default_deload_factor() -> f64 {
    0.9
}

fn default_duration_deload_factor() -> f64 {
    0.8
}

fn default_rest_floor_secs() -> u32 {
    5
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("liftplan").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject schedules the engine cannot make sense of
    fn validate(&self) -> Result<()> {
        let schedule = &self.schedule;

        if schedule.program_weeks == 0 {
            return Err(Error::Config("program_weeks must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&schedule.deload_factor) {
            return Err(Error::Config(format!(
                "deload_factor {} outside 0.0..=1.0",
                schedule.deload_factor
            )));
        }
        if !(0.0..=1.0).contains(&schedule.duration_deload_factor) {
            return Err(Error::Config(format!(
                "duration_deload_factor {} outside 0.0..=1.0",
                schedule.duration_deload_factor
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.schedule.start_date,
            NaiveDate::from_ymd_opt(2024, 12, 29).unwrap()
        );
        assert_eq!(config.schedule.program_weeks, 12);
        assert_eq!(config.schedule.deload_weeks, vec![6, 10]);
        assert_eq!(config.schedule.rest_floor_secs, 5);
    }

    #[test]
    fn test_deload_membership() {
        let schedule = ScheduleConfig::default();
        assert!(schedule.is_deload(6));
        assert!(schedule.is_deload(10));
        assert!(!schedule.is_deload(1));
        assert!(!schedule.is_deload(7));
        assert!(!schedule.is_deload(12));
    }

    #[test]
    fn test_total_days() {
        let schedule = ScheduleConfig::default();
        assert_eq!(schedule.total_days(), 84);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.schedule, config.schedule);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[schedule]
start_date = "2025-06-01"
program_weeks = 8
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.schedule.start_date,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert_eq!(config.schedule.program_weeks, 8);
        assert_eq!(config.schedule.deload_weeks, vec![6, 10]); // default
        assert_eq!(config.schedule.deload_factor, 0.9); // default
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.schedule, ScheduleConfig::default());
    }

    #[test]
    fn test_save_and_load_from_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("liftplan").join("config.toml");

        let mut config = Config::default();
        config.schedule.program_weeks = 4;
        config.schedule.deload_weeks = vec![3];
        config.save_to(&config_path).unwrap();

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.schedule.program_weeks, 4);
        assert_eq!(loaded.schedule.deload_weeks, vec![3]);
    }

    #[test]
    fn test_invalid_deload_factor_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        std::fs::write(
            &config_path,
            "[schedule]\ndeload_factor = 1.5\n",
        )
        .unwrap();

        let result = Config::load_from(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_weeks_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        std::fs::write(&config_path, "[schedule]\nprogram_weeks = 0\n").unwrap();

        let result = Config::load_from(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
