//! Validation Configuration
//!
//! Policies for every validator, loadable from a JSON file. Every section
//! is optional; missing sections and fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityPolicy;
use crate::contact::parse_region;
use crate::error::{ConfigError, ConfigResult};
use crate::meeting::SchedulingPolicy;
use crate::password::PasswordPolicy;

/// Phone number parsing options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhonePolicy {
    /// Region assumed for numbers without a `+<country code>` prefix.
    /// `None` requires the prefix.
    pub default_region: Option<String>,
}

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub password: PasswordPolicy,
    pub scheduling: SchedulingPolicy,
    pub phone: PhonePolicy,
    pub availability: AvailabilityPolicy,
}

impl ValidationConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: ValidationConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;

        tracing::info!(path = %path.display(), "validation config loaded");
        Ok(config)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: ValidationConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured bounds are usable
    pub fn validate(&self) -> ConfigResult<()> {
        if self.password.min_length == 0 {
            return Err(ConfigError::invalid("password.min_length must be > 0"));
        }

        let s = &self.scheduling;
        if s.max_future_days == 0 {
            return Err(ConfigError::invalid("scheduling.max_future_days must be > 0"));
        }
        if s.max_proposed_dates == 0 {
            return Err(ConfigError::invalid("scheduling.max_proposed_dates must be > 0"));
        }
        if s.proposed_dates_horizon_days == 0 {
            return Err(ConfigError::invalid(
                "scheduling.proposed_dates_horizon_days must be > 0",
            ));
        }
        if s.min_duration_minutes > s.max_duration_minutes {
            return Err(ConfigError::invalid(format!(
                "scheduling.min_duration_minutes ({}) exceeds max_duration_minutes ({})",
                s.min_duration_minutes, s.max_duration_minutes
            )));
        }
        if s.title_min_len > s.title_max_len {
            return Err(ConfigError::invalid(format!(
                "scheduling.title_min_len ({}) exceeds title_max_len ({})",
                s.title_min_len, s.title_max_len
            )));
        }

        let a = &self.availability;
        if a.work_end_hour > 24 || a.work_start_hour >= a.work_end_hour {
            return Err(ConfigError::invalid(format!(
                "availability working hours {}..{} are not a valid range",
                a.work_start_hour, a.work_end_hour
            )));
        }
        if a.slot_minutes == 0 {
            return Err(ConfigError::invalid("availability.slot_minutes must be > 0"));
        }

        if let Some(region) = &self.phone.default_region {
            if parse_region(region).is_none() {
                return Err(ConfigError::invalid(format!(
                    "phone.default_region '{}' is not a known region",
                    region
                )));
            }
        }

        Ok(())
    }
}
