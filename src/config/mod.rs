//! Configuration module for the LED configurator
//!
//! This module provides:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedPaths;
pub use settings::Settings;
