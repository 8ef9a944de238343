//! Path management for the LED configurator
//!
//! ## Path Resolution Order
//!
//! 1. `LEDCONF_DATA_DIR` environment variable (if set)
//! 2. Unix: `$XDG_CONFIG_HOME/led-configurator` or `~/.config/led-configurator`
//! 3. Windows: `%APPDATA%\led-configurator`

use std::path::{Path, PathBuf};

use crate::error::LedError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "LEDCONF_DATA_DIR";

const APP_DIR_NAME: &str = "led-configurator";

/// All paths used by the configurator
#[derive(Debug, Clone)]
pub struct LedPaths {
    base_dir: PathBuf,
}

impl LedPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be found.
    pub fn new() -> Result<Self, LedError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// User preferences
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// The saved LED configuration
    pub fn configuration_file(&self) -> PathBuf {
        self.base_dir.join("led_config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Default target directory for exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Create the base and export directories
    pub fn ensure_directories(&self) -> Result<(), LedError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| LedError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                LedError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LedError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
