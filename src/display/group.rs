//! LED group display formatting
//!
//! Group tables for `group list`, the wizard's group screen and the confirm
//! summary.

use crate::models::{IndexRange, LedConfiguration, LedGroup};

/// Format groups as a numbered table
pub fn format_group_list(groups: &[LedGroup]) -> String {
    if groups.is_empty() {
        return "No LED groups configured.".to_string();
    }

    let type_width = groups
        .iter()
        .map(|g| g.group_type().to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = format!(
        "{:>3}  {:<12}  {:<type_width$}  {:<10}  {:>5}  {}\n",
        "#",
        "ID",
        "Type",
        "LEDs",
        "Count",
        "Settings",
        type_width = type_width,
    );
    output.push_str(&format!(
        "{:->3}  {:-<12}  {:-<type_width$}  {:-<10}  {:->5}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        type_width = type_width,
    ));

    for (i, group) in groups.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<12}  {:<type_width$}  {:<10}  {:>5}  {}\n",
            i + 1,
            group.id.short(),
            group.group_type().to_string(),
            group.range.to_string(),
            group.range.len(),
            group.settings.summary(),
            type_width = type_width,
        ));
    }

    output
}

/// Format a single group
pub fn format_group_details(group: &LedGroup) -> String {
    format!(
        "Group:    {}\nID:       {}\nLEDs:     {} ({} LEDs)\nSettings: {}\n",
        group.group_type(),
        group.id.short(),
        group.range,
        group.range.len(),
        group.settings.summary(),
    )
}

/// Format unassigned chain ranges
pub fn format_free_ranges(free: &[IndexRange]) -> String {
    if free.is_empty() {
        return "Every LED is assigned to a group.".to_string();
    }
    let ranges: Vec<String> = free
        .iter()
        .map(|r| format!("{} ({} LEDs)", r, r.len()))
        .collect();
    format!("Free: {}", ranges.join(", "))
}

/// Format a whole configuration for the confirm step and `show`
pub fn format_configuration_summary(config: &LedConfiguration) -> String {
    let mut output = String::from("Hardware\n");
    output.push_str(&super::format_hardware_details(&config.hardware));
    output.push('\n');

    output.push_str(&format!("Groups ({})\n", config.groups.len()));
    output.push_str(&format_group_list(&config.groups));
    if !output.ends_with('\n') {
        output.push('\n');
    }

    output.push_str(&format!(
        "\n{} of {} LEDs assigned. {}\n",
        config.assigned_led_count(),
        config.hardware.led_count,
        format_free_ranges(&config.free_ranges())
    ));
    output
}
