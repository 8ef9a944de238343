//! Configuration service
//!
//! Edits to a saved configuration outside the wizard. Every edit goes through
//! the same pure model functions the wizard uses, then is saved and audited.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{LedError, LedResult};
use crate::models::{
    self, GroupId, GroupSettings, HardwareConfig, IndexRange, LedConfiguration, LedGroup,
};
use crate::storage::Storage;

/// Audit ID used for the hardware block and the configuration as a whole
const HARDWARE_ENTITY_ID: &str = "hardware";
const CONFIGURATION_ENTITY_ID: &str = "configuration";

/// Service for the saved LED configuration
pub struct ConfigurationService<'a> {
    storage: &'a Storage,
}

impl<'a> ConfigurationService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The saved configuration, if any
    pub fn get(&self) -> LedResult<Option<LedConfiguration>> {
        self.storage.configuration.get()
    }

    /// The saved configuration, or a not-found error
    pub fn require(&self) -> LedResult<LedConfiguration> {
        self.get()?.ok_or_else(|| {
            LedError::configuration_not_found(self.storage.paths().configuration_file().display().to_string())
        })
    }

    /// Save a complete configuration, e.g. from the wizard or an import
    pub fn save_configuration(&self, config: LedConfiguration) -> LedResult<LedConfiguration> {
        config.validate()?;
        let previous = self.commit(config.clone())?;

        match previous {
            Some(before) => self.storage.log_update(
                EntityType::Configuration,
                CONFIGURATION_ENTITY_ID,
                None,
                &before,
                &config,
            )?,
            None => self.storage.log_create(
                EntityType::Configuration,
                CONFIGURATION_ENTITY_ID,
                None,
                &config,
            )?,
        }

        info!(
            groups = config.groups.len(),
            led_count = config.hardware.led_count,
            "configuration saved"
        );
        Ok(config)
    }

    /// Replace the hardware block
    ///
    /// Creates a configuration without groups when none exists yet. The chain
    /// may not shrink below an existing group.
    pub fn set_hardware(&self, hardware: HardwareConfig) -> LedResult<HardwareConfig> {
        models::validate_hardware(&hardware)?;

        let current = self.get()?;
        let groups = current.as_ref().map(|c| c.groups.clone()).unwrap_or_default();
        models::validate_chain(&hardware, &groups)?;

        self.commit(LedConfiguration::new(hardware.clone(), groups))?;

        match current {
            Some(before) => self.storage.log_update(
                EntityType::Hardware,
                HARDWARE_ENTITY_ID,
                None,
                &before.hardware,
                &hardware,
            )?,
            None => self.storage.log_create(
                EntityType::Hardware,
                HARDWARE_ENTITY_ID,
                None,
                &hardware,
            )?,
        }

        Ok(hardware)
    }

    /// Add a group to the saved configuration
    pub fn add_group(&self, range: IndexRange, settings: GroupSettings) -> LedResult<LedGroup> {
        let mut config = self.require()?;
        let group = LedGroup::new(range, settings);

        config.groups = models::add_group(&config.groups, group.clone(), config.hardware.led_count)?;
        self.commit(config)?;

        self.storage.log_create(
            EntityType::Group,
            group.id.short(),
            Some(group.to_string()),
            &group,
        )?;

        Ok(group)
    }

    /// Replace a group's range and settings, keeping its ID and position
    pub fn update_group(
        &self,
        id: GroupId,
        range: IndexRange,
        settings: GroupSettings,
    ) -> LedResult<LedGroup> {
        let mut config = self.require()?;
        let before = config
            .group(id)
            .cloned()
            .ok_or_else(|| LedError::group_not_found(id.short()))?;

        let led_count = config.hardware.led_count;
        config.groups = models::update_group(&config.groups, id, LedGroup::new(range, settings), led_count)?;
        let after = config
            .group(id)
            .cloned()
            .ok_or_else(|| LedError::group_not_found(id.short()))?;
        self.commit(config)?;

        self.storage.log_update(
            EntityType::Group,
            id.short(),
            Some(after.to_string()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    /// Remove a group, freeing its range
    pub fn remove_group(&self, id: GroupId) -> LedResult<LedGroup> {
        let mut config = self.require()?;
        let removed = config
            .group(id)
            .cloned()
            .ok_or_else(|| LedError::group_not_found(id.short()))?;

        config.groups = models::remove_group(&config.groups, id)?;
        self.commit(config)?;

        self.storage.log_delete(
            EntityType::Group,
            id.short(),
            Some(removed.to_string()),
            &removed,
        )?;

        Ok(removed)
    }

    /// Groups in creation order
    pub fn list_groups(&self) -> LedResult<Vec<LedGroup>> {
        Ok(self.get()?.map(|c| c.groups).unwrap_or_default())
    }

    /// Find a group by short ID (`grp-1a2b`), full UUID or 1-based position
    pub fn find_group(&self, identifier: &str) -> LedResult<Option<LedGroup>> {
        let groups = self.list_groups()?;
        let identifier = identifier.trim();

        if let Ok(position) = identifier.parse::<usize>() {
            if let Some(group) = position.checked_sub(1).and_then(|i| groups.get(i)) {
                return Ok(Some(group.clone()));
            }
        }

        if let Ok(id) = identifier.parse::<GroupId>() {
            if let Some(group) = groups.iter().find(|g| g.id == id) {
                return Ok(Some(group.clone()));
            }
        }

        Ok(groups.into_iter().find(|g| g.id.matches_short(identifier)))
    }

    /// Like `find_group`, but missing groups are an error
    pub fn require_group(&self, identifier: &str) -> LedResult<LedGroup> {
        self.find_group(identifier)?
            .ok_or_else(|| LedError::group_not_found(identifier))
    }

    /// Unassigned ranges of the saved chain
    pub fn free_ranges(&self) -> LedResult<Vec<IndexRange>> {
        Ok(self.require()?.free_ranges())
    }

    /// Re-validate the configuration file on disk
    pub fn validate_saved(&self) -> LedResult<LedConfiguration> {
        let path = self.storage.paths().configuration_file();
        if !path.exists() {
            return Err(LedError::configuration_not_found(path.display().to_string()));
        }
        let config: LedConfiguration = crate::storage::read_json_required(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Swap in `config` and persist it, restoring the previous one if saving fails
    fn commit(&self, config: LedConfiguration) -> LedResult<Option<LedConfiguration>> {
        let previous = self.storage.configuration.replace(config)?;
        if let Err(err) = self.storage.configuration.save() {
            if let Some(old) = previous {
                self.storage.configuration.replace(old)?;
            }
            return Err(err);
        }
        Ok(previous)
    }
}
