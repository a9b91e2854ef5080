//! Runtime settings
//!
//! Loaded from an optional JSON file. Anything missing from the file keeps
//! its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS, SIM_DT};

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Simulation and logging preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed simulation step (seconds)
    pub timestep: f32,
    /// Maximum ticks run for one rendered frame
    pub max_substeps: u32,
    /// Longer frames are truncated to this (seconds)
    pub max_frame_time: f32,
    /// Debug-level logging
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timestep: SIM_DT,
            max_substeps: MAX_SUBSTEPS,
            max_frame_time: MAX_FRAME_TIME,
            verbose: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !(self.timestep > 0.0) {
            return Err(SettingsError::Invalid {
                field: "timestep",
                reason: "must be positive",
            });
        }
        if self.max_substeps == 0 {
            return Err(SettingsError::Invalid {
                field: "max_substeps",
                reason: "must be at least 1",
            });
        }
        if !(self.max_frame_time >= self.timestep) {
            return Err(SettingsError::Invalid {
                field: "max_frame_time",
                reason: "must not be shorter than the timestep",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!((settings.timestep - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(settings.max_substeps, 8);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "verbose": true, "max_substeps": 4 }"#)
            .expect("valid settings");
        assert!(settings.verbose);
        assert_eq!(settings.max_substeps, 4);
        assert_eq!(settings.timestep, Settings::default().timestep);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            timestep: 0.01,
            max_substeps: 3,
            max_frame_time: 0.05,
            verbose: true,
        };
        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("parses"), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "timestep": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "timestep", .. }));

        let err = Settings::from_json(r#"{ "max_substeps": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "max_substeps", .. }));

        let err = Settings::from_json(r#"{ "timestep": 0.5, "max_frame_time": 0.1 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "max_frame_time", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ timestep: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/rift-runner/settings.json");
        assert_eq!(settings, Settings::default());
    }
}
