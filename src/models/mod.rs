//! Configuration data model
//!
//! Hardware settings for the LED chain, the groups partitioning it, and the
//! pure validation functions that keep the two consistent.

pub mod configuration;
pub mod group;
pub mod hardware;
pub mod ids;

pub use configuration::{
    add_group, free_ranges, remove_group, update_group, validate_chain, validate_configuration,
    validate_group, validate_hardware, LedConfiguration, CONFIGURATION_SCHEMA_VERSION,
};
pub use group::{
    ButtonId, GroupSettings, GroupType, IndexRange, LedGroup, RgbColor, StatusRole, WrapPattern,
};
pub use hardware::{ColorFormat, DataPin, HardwareConfig, LedModuleType};
pub use ids::GroupId;
