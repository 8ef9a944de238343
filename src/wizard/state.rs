//! Wizard state
//!
//! One snapshot of everything the wizard has collected. Transitions never
//! edit a snapshot in place; they build the next one.

use serde::{Deserialize, Serialize};

use super::step::WizardStep;
use crate::models::{
    validate_configuration, GroupId, GroupType, HardwareConfig, LedConfiguration, LedGroup,
};

/// Wizard state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    /// Step currently shown
    pub current_step: WizardStep,

    /// Hardware being edited
    pub hardware: HardwareConfig,

    /// Groups in creation order
    pub groups: Vec<LedGroup>,

    /// Group type being configured in the group sub-flow
    pub pending_group_type: Option<GroupType>,

    /// Group being replaced when the sub-flow was entered through an edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing_group: Option<GroupId>,
}

impl WizardState {
    /// Fresh state at Welcome with the given hardware defaults
    pub fn new(hardware: HardwareConfig) -> Self {
        Self {
            current_step: WizardStep::Welcome,
            hardware,
            groups: Vec::new(),
            pending_group_type: None,
            editing_group: None,
        }
    }

    /// State at Welcome prefilled from a saved configuration
    pub fn from_configuration(config: LedConfiguration) -> Self {
        Self {
            groups: config.groups,
            ..Self::new(config.hardware)
        }
    }

    /// Hardware passes validation and every group still fits
    ///
    /// No minimum group count applies: hardware alone is a complete setup.
    pub fn is_complete(&self) -> bool {
        validate_configuration(&self.hardware, &self.groups).is_ok()
    }

    /// Copy out the configuration collected so far
    pub fn to_configuration(&self) -> LedConfiguration {
        LedConfiguration::new(self.hardware.clone(), self.groups.clone())
    }

    /// Group being edited, if any
    pub fn editing(&self) -> Option<&LedGroup> {
        self.editing_group
            .and_then(|id| self.groups.iter().find(|g| g.id == id))
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(HardwareConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupSettings, IndexRange};

    #[test]
    fn test_new_state() {
        let state = WizardState::default();
        assert_eq!(state.current_step, WizardStep::Welcome);
        assert!(state.groups.is_empty());
        assert!(state.pending_group_type.is_none());
        // led_count defaults to zero
        assert!(!state.is_complete());
    }

    #[test]
    fn test_complete_without_groups() {
        let state = WizardState::new(HardwareConfig::with_led_count(8));
        assert!(state.is_complete());
    }

    #[test]
    fn test_from_configuration() {
        let group = LedGroup::new(IndexRange::new(0, 4), GroupSettings::Joystick {});
        let config = LedConfiguration::new(HardwareConfig::with_led_count(8), vec![group.clone()]);

        let state = WizardState::from_configuration(config.clone());
        assert_eq!(state.current_step, WizardStep::Welcome);
        assert_eq!(state.groups, vec![group]);
        assert_eq!(state.to_configuration(), config);
    }
}
