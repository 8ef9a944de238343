//! Wizard controller
//!
//! `transition` is the pure state machine: it takes a snapshot and an action
//! and returns the next snapshot or the reason the action was refused.
//! `WizardController` owns the one live snapshot and swaps it only when a
//! transition succeeds.

use tracing::{debug, info};

use super::action::Action;
use super::state::WizardState;
use super::step::WizardStep;
use super::WizardError;
use crate::error::ValidationError;
use crate::models::{
    add_group, remove_group, update_group, validate_configuration, HardwareConfig,
    LedConfiguration,
};

/// Compute the state following `action`
///
/// Forward moves validate the data entered at the current step; backward
/// moves are always accepted and leave hardware and groups untouched.
pub fn transition(state: &WizardState, action: Action) -> Result<WizardState, WizardError> {
    let step = state.current_step;
    if step.is_terminal() {
        return Err(WizardError::Finished);
    }

    let mut next = state.clone();

    match (step, action) {
        (_, Action::Back) => {
            let target = step.previous().ok_or(WizardError::InvalidAction {
                step,
                action: "back",
            })?;
            go_back(&mut next, target);
        }
        (_, Action::GoTo(target)) if target < step => go_back(&mut next, target),

        (WizardStep::Welcome, Action::Next) => next.current_step = WizardStep::Hardware,

        (WizardStep::Hardware, Action::EditHardware(edit)) => edit.apply(&mut next.hardware),
        (WizardStep::Hardware, Action::SetHardware(hardware)) => next.hardware = hardware,
        (WizardStep::Hardware, Action::Next) => {
            // Groups seeded from a saved configuration are checked here too
            validate_configuration(&next.hardware, &next.groups)?;
            next.current_step = WizardStep::GroupSelect;
        }

        (WizardStep::GroupSelect, Action::SelectGroupType(group_type)) => {
            next.pending_group_type = Some(group_type);
            next.editing_group = None;
            next.current_step = WizardStep::GroupConfig;
        }
        (WizardStep::GroupSelect, Action::EditGroup(id)) => {
            let group_type = next
                .groups
                .iter()
                .find(|g| g.id == id)
                .map(|g| g.group_type())
                .ok_or(ValidationError::UnknownGroup(id))?;
            next.pending_group_type = Some(group_type);
            next.editing_group = Some(id);
            next.current_step = WizardStep::GroupConfig;
        }
        (WizardStep::GroupSelect, Action::RemoveGroup(id)) => {
            next.groups = remove_group(&next.groups, id)?;
        }
        (WizardStep::GroupSelect, Action::Next) => {
            validate_configuration(&next.hardware, &next.groups)?;
            next.current_step = WizardStep::Confirm;
        }

        (WizardStep::GroupConfig, Action::SubmitGroup(draft)) => {
            let pending = next.pending_group_type.ok_or(WizardError::InvalidAction {
                step,
                action: "submit group",
            })?;
            if draft.settings.group_type() != pending {
                return Err(ValidationError::mismatch(
                    pending,
                    format!("settings are for a {} group", draft.settings.group_type()),
                )
                .into());
            }

            let led_count = next.hardware.led_count;
            let candidate = draft.into_group();
            next.groups = match next.editing_group {
                Some(id) => update_group(&next.groups, id, candidate, led_count)?,
                None => add_group(&next.groups, candidate, led_count)?,
            };
            next.pending_group_type = None;
            next.editing_group = None;
            next.current_step = WizardStep::GroupSelect;
        }

        (WizardStep::Confirm, Action::Next) => next.current_step = WizardStep::Complete,

        (step, action) => {
            return Err(WizardError::InvalidAction {
                step,
                action: action.name(),
            })
        }
    }

    Ok(next)
}

/// Move back to `target`, dropping any half-finished group sub-flow
fn go_back(state: &mut WizardState, target: WizardStep) {
    if target < WizardStep::GroupConfig {
        state.pending_group_type = None;
        state.editing_group = None;
    }

    state.current_step = if target == WizardStep::GroupConfig && state.pending_group_type.is_none() {
        WizardStep::GroupSelect
    } else {
        target
    };
}

/// Outcome of dispatching an action
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationResult {
    /// Accepted, now on this step
    Moved(WizardStep),

    /// Refused; state is unchanged
    Blocked(WizardError),

    /// Accepted and the wizard reached Complete
    Completed,
}

impl NavigationResult {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

/// Owner of the live wizard state
#[derive(Debug, Clone)]
pub struct WizardController {
    state: WizardState,
    last_error: Option<WizardError>,
}

impl WizardController {
    /// Start a new wizard with the given hardware defaults
    pub fn new(hardware: HardwareConfig) -> Self {
        Self::from_state(WizardState::new(hardware))
    }

    /// Start a wizard prefilled from a saved configuration
    pub fn from_configuration(config: LedConfiguration) -> Self {
        Self::from_state(WizardState::from_configuration(config))
    }

    /// Resume from an existing snapshot
    pub fn from_state(state: WizardState) -> Self {
        Self {
            state,
            last_error: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.current_step
    }

    /// Error from the most recent refused action, cleared by the next success
    pub fn last_error(&self) -> Option<&WizardError> {
        self.last_error.as_ref()
    }

    pub fn progress(&self) -> f32 {
        self.state.current_step.progress()
    }

    pub fn is_finished(&self) -> bool {
        self.state.current_step.is_terminal()
    }

    /// Apply an action, swapping in the new state only on success
    pub fn dispatch(&mut self, action: Action) -> NavigationResult {
        let from = self.state.current_step;
        let name = action.name();

        match transition(&self.state, action) {
            Ok(next) => {
                debug!(from = %from, to = %next.current_step, action = name, "wizard transition");
                self.state = next;
                self.last_error = None;
                if self.state.current_step.is_terminal() {
                    NavigationResult::Completed
                } else {
                    NavigationResult::Moved(self.state.current_step)
                }
            }
            Err(err) => {
                info!(step = %from, action = name, error = %err, "wizard action refused");
                self.last_error = Some(err.clone());
                NavigationResult::Blocked(err)
            }
        }
    }

    /// The validated configuration, available once the wizard is complete
    pub fn finished_configuration(&self) -> Option<LedConfiguration> {
        self.is_finished().then(|| self.state.to_configuration())
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(HardwareConfig::default())
    }
}
