//! Configuration repository for JSON storage
//!
//! Manages loading and saving the LED configuration to led_config.json.
//! Only configurations that pass validation are ever written.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::LedError;
use crate::models::LedConfiguration;

use super::file_io::{read_json_optional, write_json_atomic};

/// Repository for the saved configuration
pub struct ConfigurationRepository {
    path: PathBuf,
    data: RwLock<Option<LedConfiguration>>,
}

impl ConfigurationRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    /// Load the configuration from disk
    ///
    /// A missing file leaves the repository empty. A file that does not
    /// validate is refused and nothing is loaded.
    pub fn load(&self) -> Result<(), LedError> {
        let loaded: Option<LedConfiguration> = read_json_optional(&self.path)?;
        if let Some(config) = &loaded {
            config.validate().map_err(|e| {
                LedError::Storage(format!("{} is invalid: {}", self.path.display(), e))
            })?;
        }
        debug!(path = %self.path.display(), found = loaded.is_some(), "loaded configuration");

        let mut data = self
            .data
            .write()
            .map_err(|e| LedError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = loaded;
        Ok(())
    }

    /// Write the held configuration to disk
    pub fn save(&self) -> Result<(), LedError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        match data.as_ref() {
            Some(config) => {
                config.validate()?;
                write_json_atomic(&self.path, config)
            }
            None => Ok(()),
        }
    }

    /// The held configuration, if any
    pub fn get(&self) -> Result<Option<LedConfiguration>, LedError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Replace the held configuration, returning the previous one
    ///
    /// The new configuration must validate; on failure nothing changes.
    pub fn replace(&self, config: LedConfiguration) -> Result<Option<LedConfiguration>, LedError> {
        config.validate()?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.replace(config))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupSettings, HardwareConfig, IndexRange, LedGroup};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ConfigurationRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ConfigurationRepository::new(temp_dir.path().join("led_config.json"));
        (temp_dir, repo)
    }

    fn sample() -> LedConfiguration {
        LedConfiguration::new(
            HardwareConfig::with_led_count(12),
            vec![LedGroup::new(IndexRange::new(0, 4), GroupSettings::Joystick {})],
        )
    }

    #[test]
    fn test_empty_repository() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.get().unwrap().is_none());
        // Nothing to write
        repo.save().unwrap();
        assert!(!repo.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();
        let config = sample();

        assert!(repo.replace(config.clone()).unwrap().is_none());
        repo.save().unwrap();

        let reloaded = ConfigurationRepository::new(repo.path().clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.get().unwrap(), Some(config));
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        repo.replace(sample()).unwrap();

        let mut broken = sample();
        broken.hardware.led_count = 2;
        let err = repo.replace(broken).unwrap_err();
        assert!(err.is_validation());

        // The previous configuration is kept
        assert_eq!(repo.get().unwrap().unwrap().hardware.led_count, 12);
    }

    #[test]
    fn test_load_refuses_overlapping_groups() {
        let (_temp_dir, repo) = create_test_repo();
        let config = LedConfiguration::new(
            HardwareConfig::with_led_count(20),
            vec![
                LedGroup::new(IndexRange::new(0, 10), GroupSettings::Joystick {}),
                LedGroup::new(IndexRange::new(5, 15), GroupSettings::Joystick {}),
            ],
        );
        std::fs::write(repo.path(), serde_json::to_string(&config).unwrap()).unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.to_string().contains("is invalid"));
        assert!(repo.get().unwrap().is_none());
    }
}
