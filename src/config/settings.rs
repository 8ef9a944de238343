//! User settings for the LED configurator
//!
//! Preferences that outlive a single wizard run: the hardware defaults a fresh
//! wizard starts from, audit logging and the preferred export format.

use serde::{Deserialize, Serialize};

use super::paths::LedPaths;
use crate::error::LedError;
use crate::export::ExportFormat;
use crate::models::HardwareConfig;
use crate::storage::file_io::write_json_atomic;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Hardware a fresh wizard starts with
    #[serde(default)]
    pub default_hardware: HardwareConfig,

    /// Whether changes are recorded in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Format used by `export` when none is given
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Pretty-print JSON exports
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_hardware: HardwareConfig::default(),
            audit_enabled: true,
            export_format: ExportFormat::default(),
            pretty_json: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedPaths) -> Result<Self, LedError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller saves
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedPaths) -> Result<(), LedError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Set a single setting from its key and textual value
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), LedError> {
        let invalid = || LedError::Config(format!("Invalid value for {}: {}", key, value));
        match key {
            "audit_enabled" => self.audit_enabled = parse_bool(value).ok_or_else(invalid)?,
            "pretty_json" => self.pretty_json = parse_bool(value).ok_or_else(invalid)?,
            "export_format" => self.export_format = ExportFormat::parse(value).ok_or_else(invalid)?,
            other => {
                return Err(LedError::Config(format!(
                    "Unknown setting '{}'. Known settings: audit_enabled, pretty_json, export_format",
                    other
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
