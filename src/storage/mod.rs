//! Storage layer for the LED configurator
//!
//! JSON file storage with atomic writes plus the audit log that records
//! every saved change.

pub mod configuration;
pub mod file_io;

pub use configuration::ConfigurationRepository;
pub use file_io::{read_json_optional, read_json_required, write_json_atomic};

use serde::Serialize;
use tracing::warn;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedPaths;
use crate::error::LedError;

/// Storage coordinator: the configuration repository and its audit trail
pub struct Storage {
    paths: LedPaths,
    pub configuration: ConfigurationRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create storage rooted at `paths`, creating directories as needed
    pub fn new(paths: LedPaths) -> Result<Self, LedError> {
        paths.ensure_directories()?;

        Ok(Self {
            configuration: ConfigurationRepository::new(paths.configuration_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    pub fn paths(&self) -> &LedPaths {
        &self.paths
    }

    /// Turn audit logging on or off (from user settings)
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit_enabled = enabled;
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LedError> {
        self.configuration.load()
    }

    /// Whether a configuration has been saved before
    pub fn is_initialized(&self) -> bool {
        self.configuration.exists()
    }

    /// Record a created entity
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LedError> {
        self.write_audit(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record a changed entity; unchanged entities are not logged
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), LedError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        if diff.is_none() {
            return Ok(());
        }
        self.write_audit(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    /// Record a removed entity
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LedError> {
        self.write_audit(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    fn write_audit(&self, entry: AuditEntry) -> Result<(), LedError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&entry).inspect_err(|e| {
            warn!(error = %e, "failed to write audit entry");
        })
    }
}
