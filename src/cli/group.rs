//! LED group CLI commands
//!
//! Adds, edits and removes groups on the saved configuration. Settings not
//! given on the command line start from the group's current settings, or
//! from the defaults for its type.

use clap::{Args, Subcommand};

use crate::display::{format_free_ranges, format_group_details, format_group_list};
use crate::error::LedResult;
use crate::models::{
    ButtonId, GroupSettings, GroupType, IndexRange, RgbColor, StatusRole, WrapPattern,
};
use crate::services::ConfigurationService;
use crate::storage::Storage;

/// Group subcommands
#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// List configured groups
    List,

    /// Show one group
    Show {
        /// Group number, short ID or UUID
        group: String,
    },

    /// Add a group
    Add {
        /// Group type (buttons, joystick, status, strip, matrix or 1-5)
        #[arg(value_parser = parse_group_type)]
        group_type: GroupType,

        /// LED range, end exclusive (e.g. 0..16)
        #[arg(short, long, value_parser = parse_range)]
        range: IndexRange,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Edit a group; unspecified fields keep their value
    Edit {
        /// Group number, short ID or UUID
        group: String,

        /// Change the group type
        #[arg(long = "type", value_parser = parse_group_type)]
        group_type: Option<GroupType>,

        /// New LED range, end exclusive
        #[arg(short, long, value_parser = parse_range)]
        range: Option<IndexRange>,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Remove a group, freeing its LEDs
    #[command(alias = "rm")]
    Remove {
        /// Group number, short ID or UUID
        group: String,
    },

    /// Show LED ranges not assigned to any group
    Free,
}

/// Type-specific settings; each applies only to the types that use it
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsArgs {
    /// LEDs under each button (buttons)
    #[arg(long)]
    pub per_button: Option<u32>,

    /// Button order, comma separated (buttons)
    #[arg(long, value_delimiter = ',', value_parser = parse_button)]
    pub buttons: Option<Vec<ButtonId>>,

    /// What the LEDs report: player, turbo or any name (status)
    #[arg(long, value_parser = parse_role)]
    pub role: Option<StatusRole>,

    /// Color as #rrggbb (status)
    #[arg(long, value_parser = parse_color)]
    pub color: Option<RgbColor>,

    /// LEDs per strip (strip, matrix)
    #[arg(long)]
    pub per_strip: Option<u32>,

    /// Number of strips (strip, matrix)
    #[arg(long)]
    pub strips: Option<u32>,

    /// Strip wiring: serpentine or parallel (matrix)
    #[arg(long, value_parser = parse_wrap)]
    pub wrap: Option<WrapPattern>,
}

impl SettingsArgs {
    /// Apply the given fields on top of `base`
    ///
    /// Changing the LEDs per button without giving an order re-derives the
    /// default order for the new button count.
    pub fn apply(&self, base: GroupSettings, range_len: u32) -> GroupSettings {
        match base {
            GroupSettings::Buttons {
                leds_per_button,
                button_order,
            } => {
                let per_button = self.per_button.unwrap_or(leds_per_button);
                let order = match (&self.buttons, per_button == leds_per_button) {
                    (Some(buttons), _) => buttons.clone(),
                    (None, true) => button_order,
                    (None, false) => ButtonId::all()
                        .iter()
                        .copied()
                        .take((range_len / per_button.max(1)) as usize)
                        .collect(),
                };
                GroupSettings::Buttons {
                    leds_per_button: per_button,
                    button_order: order,
                }
            }
            GroupSettings::Joystick {} => GroupSettings::Joystick {},
            GroupSettings::StatusLeds { role, color } => GroupSettings::StatusLeds {
                role: self.role.clone().unwrap_or(role),
                color: self.color.unwrap_or(color),
            },
            GroupSettings::CaseStrip {
                leds_per_strip,
                strip_count,
            } => GroupSettings::CaseStrip {
                leds_per_strip: self.per_strip.unwrap_or(leds_per_strip),
                strip_count: self.strips.unwrap_or(strip_count),
            },
            GroupSettings::CaseMatrix {
                leds_per_strip,
                strip_count,
                wrap_pattern,
            } => GroupSettings::CaseMatrix {
                leds_per_strip: self.per_strip.unwrap_or(leds_per_strip),
                strip_count: self.strips.unwrap_or(strip_count),
                wrap_pattern: self.wrap.unwrap_or(wrap_pattern),
            },
        }
    }
}

fn parse_group_type(s: &str) -> Result<GroupType, String> {
    GroupType::parse(s).ok_or_else(|| format!("unknown group type '{}'", s))
}

fn parse_range(s: &str) -> Result<IndexRange, String> {
    s.parse::<IndexRange>()
        .map_err(|_| format!("'{}' is not a range like 0..16", s))
}

fn parse_button(s: &str) -> Result<ButtonId, String> {
    ButtonId::parse(s).ok_or_else(|| format!("unknown button '{}'", s))
}

fn parse_role(s: &str) -> Result<StatusRole, String> {
    StatusRole::parse(s).ok_or_else(|| "role must not be empty".to_string())
}

fn parse_color(s: &str) -> Result<RgbColor, String> {
    s.parse::<RgbColor>()
        .map_err(|_| format!("'{}' is not a #rrggbb color", s))
}

fn parse_wrap(s: &str) -> Result<WrapPattern, String> {
    WrapPattern::parse(s).ok_or_else(|| format!("unknown wiring '{}'", s))
}

/// Handle a group command
pub fn handle_group_command(storage: &Storage, cmd: GroupCommands) -> LedResult<()> {
    let service = ConfigurationService::new(storage);

    match cmd {
        GroupCommands::List => {
            let groups = service.list_groups()?;
            println!("{}", format_group_list(&groups).trim_end());
        }

        GroupCommands::Show { group } => {
            let group = service.require_group(&group)?;
            print!("{}", format_group_details(&group));
        }

        GroupCommands::Add {
            group_type,
            range,
            settings,
        } => {
            let base = GroupSettings::default_for(group_type, range.len());
            let group = service.add_group(range, settings.apply(base, range.len()))?;

            println!("Added {} group {}", group.group_type(), group.id.short());
            println!("  LEDs:     {} ({} LEDs)", group.range, group.range.len());
            println!("  Settings: {}", group.settings.summary());
        }

        GroupCommands::Edit {
            group,
            group_type,
            range,
            settings,
        } => {
            let existing = service.require_group(&group)?;
            let range = range.unwrap_or(existing.range);
            let base = match group_type {
                Some(t) if t != existing.group_type() => GroupSettings::default_for(t, range.len()),
                _ => existing.settings.clone(),
            };

            let updated =
                service.update_group(existing.id, range, settings.apply(base, range.len()))?;
            println!("Updated group {}", updated.id.short());
            print!("{}", format_group_details(&updated));
        }

        GroupCommands::Remove { group } => {
            let group = service.require_group(&group)?;
            let removed = service.remove_group(group.id)?;
            println!(
                "Removed {} group {} (LEDs {} are free again)",
                removed.group_type(),
                removed.id.short(),
                removed.range
            );
        }

        GroupCommands::Free => {
            println!("{}", format_free_ranges(&service.free_ranges()?));
        }
    }

    Ok(())
}
