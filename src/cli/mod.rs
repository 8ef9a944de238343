//! CLI command handlers
//!
//! Bridges the clap argument parsing with the configuration service.

pub mod config;
pub mod export;
pub mod group;
pub mod hardware;
pub mod history;
pub mod wizard;

pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, handle_import_command, handle_validate_command};
pub use group::{handle_group_command, GroupCommands};
pub use hardware::{handle_hardware_command, HardwareCommands};
pub use history::handle_history_command;
pub use wizard::{handle_show_command, handle_wizard_command};
