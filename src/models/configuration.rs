//! Configuration model operations
//!
//! Pure validation and construction functions over hardware settings and the
//! group list. Nothing here mutates its inputs: every edit returns a new group
//! list so a caller can keep the previous one when validation fails.

use serde::{Deserialize, Serialize};

use super::group::{IndexRange, LedGroup};
use super::hardware::HardwareConfig;
use super::ids::GroupId;
use crate::error::ValidationError;

/// Current schema version of the saved configuration document
pub const CONFIGURATION_SCHEMA_VERSION: u32 = 1;

/// A complete LED setup: hardware plus its groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedConfiguration {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    pub hardware: HardwareConfig,

    /// Groups in creation order
    #[serde(default)]
    pub groups: Vec<LedGroup>,
}

fn default_schema_version() -> u32 {
    CONFIGURATION_SCHEMA_VERSION
}

impl LedConfiguration {
    pub fn new(hardware: HardwareConfig, groups: Vec<LedGroup>) -> Self {
        Self {
            schema_version: CONFIGURATION_SCHEMA_VERSION,
            hardware,
            groups,
        }
    }

    /// Validate everything: hardware, chain coverage and every group
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_configuration(&self.hardware, &self.groups)
    }

    /// Find a group by ID
    pub fn group(&self, id: GroupId) -> Option<&LedGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Number of LEDs assigned to some group
    pub fn assigned_led_count(&self) -> u32 {
        self.groups.iter().map(|g| g.range.len()).sum()
    }

    /// Unassigned index ranges of the chain
    pub fn free_ranges(&self) -> Vec<IndexRange> {
        free_ranges(&self.groups, self.hardware.led_count)
    }
}

/// Validate hardware settings on their own
pub fn validate_hardware(hardware: &HardwareConfig) -> Result<(), ValidationError> {
    hardware.validate()
}

/// Check that the chain is long enough for every group
pub fn validate_chain(hardware: &HardwareConfig, groups: &[LedGroup]) -> Result<(), ValidationError> {
    match groups.iter().find(|g| g.range.end > hardware.led_count) {
        Some(group) => Err(ValidationError::RangeOutOfBounds {
            range: group.range,
            led_count: hardware.led_count,
        }),
        None => Ok(()),
    }
}

/// Validate a candidate group against the existing ones
///
/// Checks run in order: overlap with an existing group, bounds of the chain,
/// then the type-specific length invariant. `existing` must not contain the
/// candidate itself.
pub fn validate_group(
    existing: &[LedGroup],
    candidate: &LedGroup,
    led_count: u32,
) -> Result<(), ValidationError> {
    if let Some(other) = existing
        .iter()
        .find(|g| g.range.overlaps(&candidate.range))
    {
        return Err(ValidationError::RangeOverlap {
            candidate: candidate.range,
            existing: other.range,
            existing_type: other.group_type(),
        });
    }

    if !candidate.range.fits(led_count) {
        return Err(ValidationError::RangeOutOfBounds {
            range: candidate.range,
            led_count,
        });
    }

    candidate.validate_settings()
}

/// Return a new list with `candidate` appended
pub fn add_group(
    groups: &[LedGroup],
    candidate: LedGroup,
    led_count: u32,
) -> Result<Vec<LedGroup>, ValidationError> {
    if groups.iter().any(|g| g.id == candidate.id) {
        return Err(ValidationError::DuplicateGroup(candidate.id));
    }
    validate_group(groups, &candidate, led_count)?;
    let mut next = groups.to_vec();
    next.push(candidate);
    Ok(next)
}

/// Return a new list without the group `id`, freeing its range
pub fn remove_group(groups: &[LedGroup], id: GroupId) -> Result<Vec<LedGroup>, ValidationError> {
    if !groups.iter().any(|g| g.id == id) {
        return Err(ValidationError::UnknownGroup(id));
    }
    Ok(groups.iter().filter(|g| g.id != id).cloned().collect())
}

/// Return a new list with group `id` replaced by `candidate` at the same position
///
/// The candidate is re-validated against every other group; it takes over the
/// replaced group's ID.
pub fn update_group(
    groups: &[LedGroup],
    id: GroupId,
    mut candidate: LedGroup,
    led_count: u32,
) -> Result<Vec<LedGroup>, ValidationError> {
    let position = groups
        .iter()
        .position(|g| g.id == id)
        .ok_or(ValidationError::UnknownGroup(id))?;

    candidate.id = id;
    let mut next = groups.to_vec();
    next.remove(position);
    validate_group(&next, &candidate, led_count)?;

    next.insert(position, candidate);
    Ok(next)
}

/// Validate hardware, chain coverage and every group against the others
pub fn validate_configuration(
    hardware: &HardwareConfig,
    groups: &[LedGroup],
) -> Result<(), ValidationError> {
    validate_hardware(hardware)?;
    validate_chain(hardware, groups)?;
    for (i, group) in groups.iter().enumerate() {
        if groups[..i].iter().any(|g| g.id == group.id) {
            return Err(ValidationError::DuplicateGroup(group.id));
        }
    }
    for (i, group) in groups.iter().enumerate() {
        // Earlier groups were already checked against this one
        validate_group(&groups[i + 1..], group, hardware.led_count)?;
    }
    Ok(())
}

/// Unassigned gaps of a chain of `led_count` LEDs, in index order
pub fn free_ranges(groups: &[LedGroup], led_count: u32) -> Vec<IndexRange> {
    let mut taken: Vec<IndexRange> = groups.iter().map(|g| g.range).collect();
    taken.sort();

    let mut free = Vec::new();
    let mut cursor = 0;
    for range in taken {
        if range.start > cursor {
            free.push(IndexRange::new(cursor, range.start.min(led_count)));
        }
        cursor = cursor.max(range.end);
        if cursor >= led_count {
            break;
        }
    }
    if cursor < led_count {
        free.push(IndexRange::new(cursor, led_count));
    }
    free.retain(|r| !r.is_empty());
    free
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::group::{ButtonId, GroupSettings, GroupType, RgbColor, StatusRole};

    fn buttons(range: IndexRange) -> LedGroup {
        LedGroup::new(
            range,
            GroupSettings::Buttons {
                leds_per_button: 2,
                button_order: ButtonId::all()[..8].to_vec(),
            },
        )
    }

    fn status(range: IndexRange) -> LedGroup {
        LedGroup::new(
            range,
            GroupSettings::StatusLeds {
                role: StatusRole::PlayerIndicator,
                color: RgbColor::new(0, 0, 255),
            },
        )
    }

    fn strip(range: IndexRange, leds_per_strip: u32, strip_count: u32) -> LedGroup {
        LedGroup::new(
            range,
            GroupSettings::CaseStrip {
                leds_per_strip,
                strip_count,
            },
        )
    }

    #[test]
    fn test_buttons_then_status_scenario() {
        let groups = add_group(&[], buttons(IndexRange::new(0, 16)), 100).unwrap();
        assert_eq!(groups.len(), 1);

        let err = add_group(&groups, status(IndexRange::new(10, 12)), 100).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::RangeOverlap {
                existing_type: GroupType::Buttons,
                ..
            }
        ));

        let groups = add_group(&groups, status(IndexRange::new(16, 20)), 100).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].group_type(), GroupType::StatusLeds);
    }

    #[test]
    fn test_case_strip_scenario() {
        assert!(add_group(&[], strip(IndexRange::new(0, 20), 10, 2), 30).is_ok());
        assert!(matches!(
            add_group(&[], strip(IndexRange::new(0, 20), 10, 3), 30),
            Err(ValidationError::SettingsMismatch { .. })
        ));
    }

    #[test]
    fn test_overlap_reported_before_other_failures() {
        let groups = vec![buttons(IndexRange::new(0, 16))];
        // Both overlapping and out of bounds with broken settings
        let candidate = strip(IndexRange::new(8, 200), 1, 1);
        assert!(matches!(
            validate_group(&groups, &candidate, 100),
            Err(ValidationError::RangeOverlap { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(matches!(
            validate_group(&[], &status(IndexRange::new(98, 101)), 100),
            Err(ValidationError::RangeOutOfBounds { led_count: 100, .. })
        ));
        assert!(matches!(
            validate_group(&[], &status(IndexRange::new(5, 5)), 100),
            Err(ValidationError::RangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_add_does_not_touch_input() {
        let groups = vec![buttons(IndexRange::new(0, 16))];
        let before = groups.clone();
        let _ = add_group(&groups, status(IndexRange::new(16, 18)), 100).unwrap();
        let _ = add_group(&groups, status(IndexRange::new(0, 2)), 100).unwrap_err();
        assert_eq!(groups, before);
    }

    #[test]
    fn test_remove_frees_range() {
        let first = buttons(IndexRange::new(0, 16));
        let id = first.id;
        let groups = vec![first];

        let groups = remove_group(&groups, id).unwrap();
        assert!(groups.is_empty());
        assert!(add_group(&groups, status(IndexRange::new(0, 4)), 100).is_ok());

        assert_eq!(remove_group(&groups, id), Err(ValidationError::UnknownGroup(id)));
    }

    #[test]
    fn test_update_revalidates_against_others_only() {
        let a = status(IndexRange::new(0, 4));
        let b = status(IndexRange::new(4, 8));
        let a_id = a.id;
        let groups = vec![a, b];

        // Growing into its own old range is fine
        let moved = update_group(&groups, a_id, status(IndexRange::new(0, 3)), 100).unwrap();
        assert_eq!(moved[0].id, a_id);
        assert_eq!(moved[0].range, IndexRange::new(0, 3));
        assert_eq!(moved[1].range, IndexRange::new(4, 8));

        // Growing into the neighbour is not
        assert!(matches!(
            update_group(&groups, a_id, status(IndexRange::new(0, 6)), 100),
            Err(ValidationError::RangeOverlap { .. })
        ));

        let missing = GroupId::new();
        assert_eq!(
            update_group(&groups, missing, status(IndexRange::new(9, 10)), 100),
            Err(ValidationError::UnknownGroup(missing))
        );
    }

    #[test]
    fn test_validate_chain() {
        let groups = vec![buttons(IndexRange::new(0, 16))];
        assert!(validate_chain(&HardwareConfig::with_led_count(16), &groups).is_ok());
        assert!(matches!(
            validate_chain(&HardwareConfig::with_led_count(15), &groups),
            Err(ValidationError::RangeOutOfBounds { led_count: 15, .. })
        ));
    }

    #[test]
    fn test_configuration_validate() {
        let config = LedConfiguration::new(HardwareConfig::with_led_count(30), vec![]);
        assert!(config.validate().is_ok());

        let config = LedConfiguration::new(
            HardwareConfig::with_led_count(30),
            vec![strip(IndexRange::new(0, 20), 10, 2), status(IndexRange::new(20, 22))],
        );
        assert!(config.validate().is_ok());
        assert_eq!(config.assigned_led_count(), 22);
    }

    #[test]
    fn test_shared_id_does_not_hide_overlap() {
        let first = LedGroup::new(IndexRange::new(0, 10), GroupSettings::Joystick {});
        let mut second = LedGroup::new(IndexRange::new(5, 15), GroupSettings::Joystick {});
        second.id = first.id;

        let groups = vec![first.clone(), second.clone()];
        assert_eq!(
            validate_configuration(&HardwareConfig::with_led_count(20), &groups),
            Err(ValidationError::DuplicateGroup(first.id))
        );
        assert_eq!(
            add_group(&[first.clone()], second, 20),
            Err(ValidationError::DuplicateGroup(first.id))
        );

        // Distinct IDs still report the overlap itself
        let other = LedGroup::new(IndexRange::new(5, 15), GroupSettings::Joystick {});
        assert!(matches!(
            validate_configuration(&HardwareConfig::with_led_count(20), &[first, other]),
            Err(ValidationError::RangeOverlap { .. })
        ));
    }

    #[test]
    fn test_free_ranges() {
        let groups = vec![
            status(IndexRange::new(20, 22)),
            buttons(IndexRange::new(0, 16)),
        ];
        assert_eq!(
            free_ranges(&groups, 30),
            vec![IndexRange::new(16, 20), IndexRange::new(22, 30)]
        );
        assert_eq!(free_ranges(&[], 10), vec![IndexRange::new(0, 10)]);
        assert!(free_ranges(&[status(IndexRange::new(0, 10))], 10).is_empty());
    }
}
