//! Service layer for the LED configurator
//!
//! Business logic on top of the storage layer: validation through the model
//! functions, persistence, and audit logging.

pub mod configuration;

pub use configuration::ConfigurationService;
