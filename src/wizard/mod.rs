//! LED configurator wizard
//!
//! A finite-state machine over ordered steps that builds a validated
//! [`LedConfiguration`](crate::models::LedConfiguration).
//!
//! ```text
//! Welcome -> Hardware -> GroupSelect <-> GroupConfig
//!                             |
//!                             v
//!                          Confirm -> Complete
//! ```
//!
//! The presentation layer reads the current [`WizardState`], turns user input
//! into [`Action`]s and hands them to [`WizardController::dispatch`]. It never
//! validates anything itself; refused actions show up in
//! [`WizardController::last_error`].

pub mod action;
pub mod controller;
pub mod state;
pub mod step;

pub use action::{Action, GroupDraft, HardwareEdit};
pub use controller::{transition, NavigationResult, WizardController};
pub use state::WizardState;
pub use step::WizardStep;

use thiserror::Error;

use crate::error::ValidationError;

/// Why the wizard refused an action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// The data entered at this step does not validate
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The action makes no sense at this step
    #[error("cannot {action} on step '{step}'")]
    InvalidAction {
        step: WizardStep,
        action: &'static str,
    },

    /// The wizard has reached Complete
    #[error("the wizard is already complete")]
    Finished,
}

impl WizardError {
    /// The underlying validation failure, if that is what this is
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
