//! Group screens
//!
//! `select` lists the groups collected so far and picks what to do next;
//! `configure` asks for the range and type-specific settings of the pending
//! group.

use std::io::{BufRead, Write};

use super::Command;
use crate::display::{format_free_ranges, format_group_list};
use crate::error::LedResult;
use crate::models::{
    free_ranges, ButtonId, GroupId, GroupSettings, GroupType, IndexRange, LedGroup, RgbColor,
    StatusRole, WrapPattern,
};
use crate::setup::prompt::Prompter;
use crate::wizard::{Action, GroupDraft, WizardState};

/// What the user picked on the group list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add(GroupType),
    Edit(GroupId),
    Remove(GroupId),
    Done,
}

pub fn select<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    state: &WizardState,
) -> LedResult<Command> {
    let led_count = state.hardware.led_count;

    p.say(format_group_list(&state.groups))?;
    p.say(format_free_ranges(&free_ranges(&state.groups, led_count)))?;
    p.say("")?;
    p.say("Group types:")?;
    for group_type in GroupType::all() {
        p.say(format!("  {}. {}", group_type.code(), group_type))?;
    }
    p.say("Enter a group type to add a group, 'e <#>' to edit, 'r <#>' to remove, 'n' to continue.")?;

    let choice = answer!(p.field("Choice", Some("n"), |s| parse_choice(s, &state.groups))?);

    let action = match choice {
        Choice::Add(group_type) => Action::SelectGroupType(group_type),
        Choice::Edit(id) => Action::EditGroup(id),
        Choice::Remove(id) => Action::RemoveGroup(id),
        Choice::Done => Action::Next,
    };
    Ok(Command::Dispatch(vec![action]))
}

fn parse_choice(s: &str, groups: &[LedGroup]) -> Result<Choice, String> {
    let input = s.trim().to_lowercase();
    if matches!(input.as_str(), "n" | "next" | "done" | "continue") {
        return Ok(Choice::Done);
    }

    if let Some((verb, target)) = input.split_once(' ') {
        match verb {
            "e" | "edit" => return lookup(target, groups).map(Choice::Edit),
            "r" | "rm" | "remove" => return lookup(target, groups).map(Choice::Remove),
            _ => {}
        }
    }

    GroupType::parse(&input)
        .map(Choice::Add)
        .ok_or_else(|| format!("'{}' is not a group type or command", s.trim()))
}

/// Resolve a 1-based list position or a short group ID
fn lookup(target: &str, groups: &[LedGroup]) -> Result<GroupId, String> {
    let target = target.trim();
    let by_position = target
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| groups.get(i));

    by_position
        .or_else(|| groups.iter().find(|g| g.id.matches_short(target)))
        .map(|g| g.id)
        .ok_or_else(|| format!("No group '{}'", target))
}

pub fn configure<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    state: &WizardState,
) -> LedResult<Command> {
    let Some(group_type) = state.pending_group_type else {
        return Ok(Command::back());
    };
    let editing = state.editing();
    let led_count = state.hardware.led_count;

    match editing {
        Some(group) => p.say(format!("Editing {} (LEDs {})", group_type, group.range))?,
        None => p.say(format!("New {} group", group_type))?,
    }

    let others: Vec<LedGroup> = state
        .groups
        .iter()
        .filter(|g| Some(g.id) != state.editing_group)
        .cloned()
        .collect();
    let free = free_ranges(&others, led_count);
    p.say(format_free_ranges(&free))?;

    let range_default = editing
        .map(|g| g.range)
        .or_else(|| free.first().copied())
        .map(|r| format!("{}..{}", r.start, r.end));
    let range = answer!(p.field(
        "LED range (start..end, end exclusive)",
        range_default.as_deref(),
        |s| s.parse::<IndexRange>().map_err(|e| e.to_string()),
    )?);

    let base = editing
        .filter(|g| g.group_type() == group_type)
        .map(|g| g.settings.clone())
        .unwrap_or_else(|| GroupSettings::default_for(group_type, range.len()));

    let settings = match base {
        GroupSettings::Buttons {
            leds_per_button: base_per_button,
            button_order,
        } => {
            let leds_per_button = answer!(p.field(
                "LEDs per button",
                Some(&base_per_button.to_string()),
                parse_count,
            )?);

            let order = if leds_per_button == base_per_button {
                button_order
            } else {
                let fits = range.len() / leds_per_button.max(1);
                ButtonId::all().iter().copied().take(fits as usize).collect()
            };
            let names: Vec<String> = ButtonId::all().iter().map(ToString::to_string).collect();
            p.say(format!("Buttons: {}", names.join(" ")))?;
            let order_default: Vec<String> = order.iter().map(ToString::to_string).collect();
            let order_default = order_default.join(",");
            let button_order = answer!(p.field(
                "Button order",
                (!order_default.is_empty()).then_some(order_default.as_str()),
                |s| ButtonId::parse_list(s).map_err(|_| format!("Unknown button in '{}'", s)),
            )?);

            GroupSettings::Buttons {
                leds_per_button,
                button_order,
            }
        }
        GroupSettings::Joystick {} => GroupSettings::Joystick {},
        GroupSettings::StatusLeds { role, color } => {
            let role = answer!(p.field("Role (player, turbo or a name)", Some(&role.to_string()), |s| {
                StatusRole::parse(s).ok_or_else(|| "A role is required.".to_string())
            })?);
            let color = answer!(p.field("Color (#rrggbb)", Some(&color.to_string()), |s| {
                s.parse::<RgbColor>()
                    .map_err(|_| format!("'{}' is not a #rrggbb color", s))
            })?);
            GroupSettings::StatusLeds { role, color }
        }
        GroupSettings::CaseStrip {
            leds_per_strip,
            strip_count,
        } => {
            let (leds_per_strip, strip_count) =
                answer!(ask_strips(p, leds_per_strip, strip_count)?);
            GroupSettings::CaseStrip {
                leds_per_strip,
                strip_count,
            }
        }
        GroupSettings::CaseMatrix {
            leds_per_strip,
            strip_count,
            wrap_pattern,
        } => {
            let (leds_per_strip, strip_count) =
                answer!(ask_strips(p, leds_per_strip, strip_count)?);
            let wrap_pattern = answer!(p.field(
                "Wiring (serpentine/parallel)",
                Some(&wrap_pattern.to_string().to_lowercase()),
                |s| WrapPattern::parse(s).ok_or_else(|| format!("Unknown wiring '{}'", s)),
            )?);
            GroupSettings::CaseMatrix {
                leds_per_strip,
                strip_count,
                wrap_pattern,
            }
        }
    };

    Ok(Command::Dispatch(vec![Action::SubmitGroup(GroupDraft::new(
        range, settings,
    ))]))
}

fn ask_strips<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    leds_per_strip: u32,
    strip_count: u32,
) -> LedResult<crate::setup::prompt::Reply<(u32, u32)>> {
    use crate::setup::prompt::Reply;

    let per_strip = match p.field("LEDs per strip", Some(&leds_per_strip.to_string()), parse_count)? {
        Reply::Value(v) => v,
        Reply::Back => return Ok(Reply::Back),
        Reply::Quit => return Ok(Reply::Quit),
    };
    let count = p.field("Number of strips", Some(&strip_count.to_string()), parse_count)?;
    Ok(count.map(|count| (per_strip, count)))
}

fn parse_count(s: &str) -> Result<u32, String> {
    s.parse::<u32>()
        .map_err(|_| format!("'{}' is not a whole number", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HardwareConfig;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn state_with_groups(led_count: u32, groups: Vec<LedGroup>) -> WizardState {
        let mut state = WizardState::new(HardwareConfig::with_led_count(led_count));
        state.groups = groups;
        state
    }

    fn joystick(start: u32, end: u32) -> LedGroup {
        LedGroup::new(IndexRange::new(start, end), GroupSettings::Joystick {})
    }

    fn single_action(command: Command) -> Action {
        let Command::Dispatch(mut actions) = command else {
            panic!("expected actions");
        };
        assert_eq!(actions.len(), 1);
        actions.remove(0)
    }

    #[test]
    fn test_select_group_type() {
        let state = state_with_groups(20, vec![]);
        let action = single_action(select(&mut prompter("5\n"), &state).unwrap());
        assert_eq!(action, Action::SelectGroupType(GroupType::CaseMatrix));

        let action = single_action(select(&mut prompter("status leds\n"), &state).unwrap());
        assert_eq!(action, Action::SelectGroupType(GroupType::StatusLeds));
    }

    #[test]
    fn test_select_defaults_to_next() {
        let state = state_with_groups(20, vec![]);
        let action = single_action(select(&mut prompter("\n"), &state).unwrap());
        assert_eq!(action, Action::Next);
    }

    #[test]
    fn test_select_edit_and_remove() {
        let first = joystick(0, 4);
        let second = joystick(4, 8);
        let state = state_with_groups(20, vec![first.clone(), second.clone()]);

        let action = single_action(select(&mut prompter("e 2\n"), &state).unwrap());
        assert_eq!(action, Action::EditGroup(second.id));

        let input = format!("r {}\n", first.id.short());
        let action = single_action(select(&mut prompter(&input), &state).unwrap());
        assert_eq!(action, Action::RemoveGroup(first.id));
    }

    #[test]
    fn test_select_unknown_group_is_asked_again() {
        let state = state_with_groups(20, vec![joystick(0, 4)]);
        let mut p = prompter("e 9\nwat\nn\n");
        let action = single_action(select(&mut p, &state).unwrap());
        assert_eq!(action, Action::Next);

        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.contains("No group '9'"));
        assert!(output.contains("'wat' is not a group type"));
    }

    #[test]
    fn test_configure_without_pending_type_goes_back() {
        let state = state_with_groups(20, vec![]);
        assert_eq!(configure(&mut prompter(""), &state).unwrap(), Command::back());
    }

    #[test]
    fn test_configure_joystick_takes_first_free_range() {
        let mut state = state_with_groups(20, vec![joystick(0, 4)]);
        state.pending_group_type = Some(GroupType::Joystick);

        let action = single_action(configure(&mut prompter("\n"), &state).unwrap());
        assert_eq!(
            action,
            Action::SubmitGroup(GroupDraft::new(
                IndexRange::new(4, 20),
                GroupSettings::Joystick {}
            ))
        );
    }

    #[test]
    fn test_configure_buttons() {
        let mut state = state_with_groups(20, vec![]);
        state.pending_group_type = Some(GroupType::Buttons);

        // range, LEDs per button, order
        let input = "0..8\n2\nb1,b2,b3,b4\n";
        let action = single_action(configure(&mut prompter(input), &state).unwrap());
        assert_eq!(
            action,
            Action::SubmitGroup(GroupDraft::new(
                IndexRange::new(0, 8),
                GroupSettings::Buttons {
                    leds_per_button: 2,
                    button_order: vec![ButtonId::B1, ButtonId::B2, ButtonId::B3, ButtonId::B4],
                }
            ))
        );
    }

    #[test]
    fn test_configure_buttons_default_order_follows_count() {
        let mut state = state_with_groups(20, vec![]);
        state.pending_group_type = Some(GroupType::Buttons);

        let action = single_action(configure(&mut prompter("0..4\n2\n\n"), &state).unwrap());
        let Action::SubmitGroup(draft) = action else {
            panic!("expected a draft");
        };
        assert_eq!(
            draft.settings,
            GroupSettings::Buttons {
                leds_per_button: 2,
                button_order: vec![ButtonId::Up, ButtonId::Down],
            }
        );
    }

    #[test]
    fn test_configure_matrix() {
        let mut state = state_with_groups(100, vec![]);
        state.pending_group_type = Some(GroupType::CaseMatrix);

        let input = "40..100\n20\n3\nparallel\n";
        let action = single_action(configure(&mut prompter(input), &state).unwrap());
        assert_eq!(
            action,
            Action::SubmitGroup(GroupDraft::new(
                IndexRange::new(40, 100),
                GroupSettings::CaseMatrix {
                    leds_per_strip: 20,
                    strip_count: 3,
                    wrap_pattern: WrapPattern::Parallel,
                }
            ))
        );
    }

    #[test]
    fn test_configure_edit_keeps_existing_values() {
        let status = LedGroup::new(
            IndexRange::new(16, 18),
            GroupSettings::StatusLeds {
                role: StatusRole::Turbo,
                color: RgbColor::new(255, 0, 0),
            },
        );
        let mut state = state_with_groups(20, vec![joystick(0, 16), status.clone()]);
        state.pending_group_type = Some(GroupType::StatusLeds);
        state.editing_group = Some(status.id);

        // range, role, color all left at their defaults
        let action = single_action(configure(&mut prompter("\n\n\n"), &state).unwrap());
        assert_eq!(action, Action::SubmitGroup(GroupDraft::from(&status)));
    }

    #[test]
    fn test_configure_back() {
        let mut state = state_with_groups(20, vec![]);
        state.pending_group_type = Some(GroupType::CaseStrip);
        assert_eq!(configure(&mut prompter("0..20\nback\n"), &state).unwrap(), Command::back());
    }
}
