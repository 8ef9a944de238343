//! Wizard step definitions
//!
//! The ordered steps of the LED configurator and the derived progress value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wizard step, in forward order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum WizardStep {
    /// Introduction, no data entry
    #[default]
    Welcome,

    /// Data pin, LED type, chain length and brightness
    Hardware,

    /// List configured groups and pick the next group type
    GroupSelect,

    /// Range and settings for the pending group
    GroupConfig,

    /// Read-only summary
    Confirm,

    /// Terminal step; the configuration is ready for delivery
    Complete,
}

impl WizardStep {
    /// Steps counted by the progress indicator (everything after Welcome)
    pub const TOTAL_STEPS: usize = 5;

    /// All steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Welcome,
            WizardStep::Hardware,
            WizardStep::GroupSelect,
            WizardStep::GroupConfig,
            WizardStep::Confirm,
            WizardStep::Complete,
        ]
    }

    /// Zero-based position, Welcome is 0
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Welcome => 0,
            WizardStep::Hardware => 1,
            WizardStep::GroupSelect => 2,
            WizardStep::GroupConfig => 3,
            WizardStep::Confirm => 4,
            WizardStep::Complete => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Welcome => "Start Page",
            WizardStep::Hardware => "Hardware Configuration",
            WizardStep::GroupSelect => "Group Configuration",
            WizardStep::GroupConfig => "Group Settings",
            WizardStep::Confirm => "Confirm Configuration",
            WizardStep::Complete => "Configuration Complete",
        }
    }

    /// Get next step in forward order
    pub fn next(&self) -> Option<WizardStep> {
        Self::all().get(self.index() + 1).copied()
    }

    /// Get previous step
    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::all()[i])
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WizardStep::Complete)
    }

    /// Progress fraction in `[0, 1]`; Welcome counts as zero
    pub fn progress(&self) -> f32 {
        let done = self.index().saturating_sub(1) as f32;
        done / (Self::TOTAL_STEPS - 1) as f32
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order() {
        let steps = WizardStep::all();
        assert_eq!(steps.len(), 6);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
        assert!(WizardStep::Welcome < WizardStep::Complete);
    }

    #[test]
    fn test_next_and_previous() {
        assert_eq!(WizardStep::Welcome.next(), Some(WizardStep::Hardware));
        assert_eq!(WizardStep::Confirm.next(), Some(WizardStep::Complete));
        assert_eq!(WizardStep::Complete.next(), None);

        assert_eq!(WizardStep::Welcome.previous(), None);
        assert_eq!(WizardStep::GroupConfig.previous(), Some(WizardStep::GroupSelect));
    }

    #[test]
    fn test_progress() {
        assert_eq!(WizardStep::Welcome.progress(), 0.0);
        assert_eq!(WizardStep::Hardware.progress(), 0.0);
        assert_eq!(WizardStep::GroupSelect.progress(), 0.25);
        assert_eq!(WizardStep::GroupConfig.progress(), 0.5);
        assert_eq!(WizardStep::Confirm.progress(), 0.75);
        assert_eq!(WizardStep::Complete.progress(), 1.0);
    }

    #[test]
    fn test_titles() {
        assert_eq!(WizardStep::Hardware.to_string(), "Hardware Configuration");
        assert!(WizardStep::Complete.is_terminal());
        assert!(!WizardStep::Confirm.is_terminal());
    }
}
