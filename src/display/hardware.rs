//! Hardware display formatting

use crate::models::HardwareConfig;

/// Format the hardware block as an aligned detail view
pub fn format_hardware_details(hardware: &HardwareConfig) -> String {
    let mut rows = vec![
        ("Data pin", hardware.data_pin.to_string()),
        ("LED type", hardware.module_type.to_string()),
        (
            "Color format",
            format!(
                "{} ({} channels)",
                hardware.color_format,
                hardware.color_format.channel_count()
            ),
        ),
        ("LED count", hardware.led_count.to_string()),
        ("Brightness", format!("{}%", hardware.brightness_percent)),
        (
            "On in suspend",
            if hardware.keep_on_during_suspend { "yes" } else { "no" }.to_string(),
        ),
    ];

    if let Some(ma) = hardware.max_current_milliamps {
        rows.push(("Max current", format!("{} mA", ma)));
    }
    if let Some(khz) = hardware.data_clock_khz {
        rows.push(("Data clock", format!("{} kHz", khz)));
    }

    rows.iter()
        .map(|(label, value)| format!("  {:<14} {}\n", format!("{}:", label), value))
        .collect()
}
