//! Wizard actions
//!
//! Every user interaction reaches the controller as one discrete action.

use std::fmt;

use super::step::WizardStep;
use crate::models::{
    ColorFormat, DataPin, GroupId, GroupSettings, GroupType, HardwareConfig, IndexRange,
    LedGroup, LedModuleType,
};

/// A single hardware field edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardwareEdit {
    DataPin(DataPin),
    ModuleType(LedModuleType),
    ColorFormat(ColorFormat),
    LedCount(u32),
    Brightness(u32),
    KeepOnDuringSuspend(bool),
    MaxCurrent(Option<u32>),
    DataClock(Option<u32>),
}

impl HardwareEdit {
    /// Apply the edit to a hardware draft
    pub fn apply(self, hardware: &mut HardwareConfig) {
        match self {
            Self::DataPin(pin) => hardware.data_pin = pin,
            Self::ModuleType(module_type) => hardware.module_type = module_type,
            Self::ColorFormat(format) => hardware.color_format = format,
            Self::LedCount(count) => hardware.led_count = count,
            Self::Brightness(percent) => hardware.brightness_percent = percent,
            Self::KeepOnDuringSuspend(keep) => hardware.keep_on_during_suspend = keep,
            Self::MaxCurrent(milliamps) => hardware.max_current_milliamps = milliamps,
            Self::DataClock(khz) => hardware.data_clock_khz = khz,
        }
    }
}

/// Range and settings proposed for the pending group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDraft {
    pub range: IndexRange,
    pub settings: GroupSettings,
}

impl GroupDraft {
    pub fn new(range: IndexRange, settings: GroupSettings) -> Self {
        Self { range, settings }
    }

    pub fn into_group(self) -> LedGroup {
        LedGroup::new(self.range, self.settings)
    }
}

impl From<&LedGroup> for GroupDraft {
    fn from(group: &LedGroup) -> Self {
        Self::new(group.range, group.settings.clone())
    }
}

/// User action proposed to the wizard controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move forward from the current step
    Next,

    /// Move to the previous step
    Back,

    /// Jump to a strictly earlier step
    GoTo(WizardStep),

    /// Change one hardware field
    EditHardware(HardwareEdit),

    /// Replace the hardware draft as a whole
    SetHardware(HardwareConfig),

    /// Start configuring a new group of this type
    SelectGroupType(GroupType),

    /// Start re-configuring an existing group
    EditGroup(GroupId),

    /// Delete a group
    RemoveGroup(GroupId),

    /// Finish the pending group
    SubmitGroup(GroupDraft),
}

impl Action {
    /// Short name used in errors and logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Back => "back",
            Self::GoTo(_) => "go to",
            Self::EditHardware(_) => "edit hardware",
            Self::SetHardware(_) => "set hardware",
            Self::SelectGroupType(_) => "select group type",
            Self::EditGroup(_) => "edit group",
            Self::RemoveGroup(_) => "remove group",
            Self::SubmitGroup(_) => "submit group",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hardware_edit_apply() {
        let mut hw = HardwareConfig::default();
        HardwareEdit::LedCount(64).apply(&mut hw);
        HardwareEdit::Brightness(80).apply(&mut hw);
        HardwareEdit::ColorFormat(ColorFormat::Rgbw).apply(&mut hw);
        HardwareEdit::MaxCurrent(Some(1500)).apply(&mut hw);

        assert_eq!(hw.led_count, 64);
        assert_eq!(hw.brightness_percent, 80);
        assert_eq!(hw.color_format, ColorFormat::Rgbw);
        assert_eq!(hw.max_current_milliamps, Some(1500));
    }

    #[test]
    fn test_draft_from_group() {
        let group = LedGroup::new(IndexRange::new(2, 6), GroupSettings::Joystick {});
        let draft = GroupDraft::from(&group);
        assert_eq!(draft.range, group.range);
        assert_eq!(draft.settings, group.settings);
    }
}
