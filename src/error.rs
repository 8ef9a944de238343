//! Custom error types for the LED configurator
//!
//! `ValidationError` is the recoverable taxonomy produced by the configuration
//! model. `LedError` is the crate-wide error used by storage, services and the
//! command line.

use thiserror::Error;

use crate::models::{GroupId, GroupType, IndexRange};
use crate::wizard::WizardError;

/// Validation failures for hardware settings and LED groups
///
/// None of these are fatal: they block a forward step until the user fixes
/// the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A numeric field is outside its declared bound
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A required field is absent or unparsable
    #[error("{field} is missing or malformed")]
    MissingField { field: &'static str },

    /// The candidate range intersects a group that already exists
    #[error("LEDs {candidate} overlap the {existing_type} group at {existing}")]
    RangeOverlap {
        candidate: IndexRange,
        existing: IndexRange,
        existing_type: GroupType,
    },

    /// The range is empty or reaches past the end of the chain
    #[error("LEDs {range} do not fit a chain of {led_count} LEDs")]
    RangeOutOfBounds { range: IndexRange, led_count: u32 },

    /// The group settings do not add up to the range length
    #[error("{group_type} settings do not match the range: {reason}")]
    SettingsMismatch {
        group_type: GroupType,
        reason: String,
    },

    /// No group with this ID exists
    #[error("No LED group with ID {0}")]
    UnknownGroup(GroupId),

    /// Two groups carry the same ID
    #[error("More than one LED group has ID {0}")]
    DuplicateGroup(GroupId),
}

impl ValidationError {
    /// Build an `OutOfRange` error from any integer-like value
    pub fn out_of_range(field: &'static str, value: impl Into<i64>, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            min,
            max,
        }
    }

    /// Build a `SettingsMismatch` error
    pub fn mismatch(group_type: GroupType, reason: impl Into<String>) -> Self {
        Self::SettingsMismatch {
            group_type,
            reason: reason.into(),
        }
    }
}

/// The main error type for LED configurator operations
#[derive(Error, Debug)]
pub enum LedError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Model validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Rejected wizard transitions
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Interactive setup errors
    #[error("Setup error: {0}")]
    Setup(String),
}

impl LedError {
    /// Create a "not found" error for LED groups
    pub fn group_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "LED group",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for the saved configuration
    pub fn configuration_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "LED configuration",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error, directly or through the wizard
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Wizard(WizardError::Invalid(_))
        )
    }
}

impl From<std::io::Error> for LedError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LedError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for LED configurator operations
pub type LedResult<T> = Result<T, LedError>;
