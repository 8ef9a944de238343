//! LED Configurator - step-by-step setup for addressable LED chains
//!
//! This library holds the configuration model and wizard controller behind
//! the `ledconf` command. A chain of addressable LEDs hangs off one data pin;
//! the wizard collects its hardware description and splits it into groups
//! (buttons, joystick, status LEDs, case strips and matrices) that never
//! overlap and never reach past the end of the chain.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Hardware, groups and the pure validation functions
//! - `wizard`: Step sequence, actions and the transition controller
//! - `error`: Custom error types
//! - `config`: Path resolution and user settings
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Edits to the saved configuration
//! - `export`: JSON and YAML export/import
//! - `display`: Plain-text formatting
//! - `setup`: Interactive line-oriented wizard
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use led_configurator::models::HardwareConfig;
//! use led_configurator::wizard::{Action, HardwareEdit, NavigationResult, WizardController, WizardStep};
//!
//! let mut wizard = WizardController::new(HardwareConfig::default());
//! wizard.dispatch(Action::Next);
//! wizard.dispatch(Action::EditHardware(HardwareEdit::LedCount(32)));
//! assert_eq!(wizard.dispatch(Action::Next), NavigationResult::Moved(WizardStep::GroupSelect));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod setup;
pub mod storage;
pub mod wizard;

pub use error::{LedError, LedResult, ValidationError};
