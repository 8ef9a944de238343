//! Interactive wizard driver
//!
//! Shows the screen for the controller's current step, dispatches whatever
//! the screen returns and prints refusals. Saving is left to the caller.

use std::io::{BufRead, Write};

use tracing::debug;

use super::prompt::Prompter;
use super::steps::{self, Command};
use crate::display::{format_step_header, format_step_list};
use crate::error::LedResult;
use crate::models::{HardwareConfig, LedConfiguration};
use crate::wizard::{NavigationResult, WizardController, WizardStep};

/// Result of running the setup wizard
#[derive(Debug, Clone, PartialEq)]
pub struct SetupResult {
    /// Whether the wizard reached Complete
    pub completed: bool,
    /// The collected configuration when completed
    pub configuration: Option<LedConfiguration>,
}

impl SetupResult {
    fn cancelled() -> Self {
        Self {
            completed: false,
            configuration: None,
        }
    }
}

/// Terminal front end for a [`WizardController`]
pub struct SetupWizard {
    controller: WizardController,
}

impl SetupWizard {
    /// Start from scratch with the given hardware defaults
    pub fn new(hardware: HardwareConfig) -> Self {
        Self {
            controller: WizardController::new(hardware),
        }
    }

    /// Start prefilled from a saved configuration
    pub fn from_configuration(config: LedConfiguration) -> Self {
        Self {
            controller: WizardController::from_configuration(config),
        }
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    /// Run the wizard until it completes or the user quits
    pub fn run<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> LedResult<SetupResult> {
        loop {
            let step = self.controller.current_step();
            if step.is_terminal() {
                break;
            }

            p.say(format_step_header(step))?;
            if step == WizardStep::Welcome {
                p.say(format_step_list(step))?;
            }
            let state = self.controller.state();
            let command = match step {
                WizardStep::Welcome => steps::welcome::run(p)?,
                WizardStep::Hardware => steps::hardware::run(p, &state.hardware)?,
                WizardStep::GroupSelect => steps::group::select(p, state)?,
                WizardStep::GroupConfig => steps::group::configure(p, state)?,
                WizardStep::Confirm => steps::confirm::run(p, state)?,
                WizardStep::Complete => break,
            };

            let actions = match command {
                Command::Quit => {
                    debug!(step = %step, "wizard cancelled");
                    p.say("Wizard cancelled. Nothing was saved.")?;
                    return Ok(SetupResult::cancelled());
                }
                Command::Dispatch(actions) => actions,
            };

            for action in actions {
                if let NavigationResult::Blocked(err) = self.controller.dispatch(action) {
                    p.say(format!("  ! {}", err))?;
                    break;
                }
            }
        }

        p.say("")?;
        p.say("Configuration complete.")?;
        Ok(SetupResult {
            completed: true,
            configuration: self.controller.finished_configuration(),
        })
    }
}
