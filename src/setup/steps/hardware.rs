//! Hardware screen

use std::io::{BufRead, Write};

use super::Command;
use crate::error::LedResult;
use crate::models::hardware::MAX_DATA_PIN;
use crate::models::{ColorFormat, DataPin, HardwareConfig, LedModuleType};
use crate::setup::prompt::Prompter;
use crate::wizard::Action;

pub fn run<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    current: &HardwareConfig,
) -> LedResult<Command> {
    let data_pin = answer!(p.field(
        &format!("Data pin (GP0-GP{})", MAX_DATA_PIN),
        Some(&current.data_pin.to_string()),
        |s| DataPin::parse(s).map_err(|e| e.to_string()),
    )?);

    p.say("LED types:")?;
    for module_type in LedModuleType::all() {
        p.say(format!("  {}. {}", module_type.code(), module_type.label()))?;
    }
    let module_type = answer!(p.field(
        "LED type",
        Some(&current.module_type.code().to_string()),
        |s| LedModuleType::parse(s).ok_or_else(|| format!("Unknown LED type '{}'", s)),
    )?);

    p.say("Color formats:")?;
    for format in ColorFormat::all() {
        p.say(format!("  {}. {}", format.code(), format.label()))?;
    }
    let color_format = answer!(p.field(
        "Color format",
        Some(&current.color_format.code().to_string()),
        |s| ColorFormat::parse(s).ok_or_else(|| format!("Unknown color format '{}'", s)),
    )?);

    let count_default = (current.led_count > 0).then(|| current.led_count.to_string());
    let led_count = answer!(p.field("Number of LEDs", count_default.as_deref(), |s| {
        s.parse::<u32>()
            .map_err(|_| format!("'{}' is not a whole number", s))
    })?);

    let brightness_percent = answer!(p.field(
        "Brightness (%)",
        Some(&current.brightness_percent.to_string()),
        |s| s
            .trim_end_matches('%')
            .parse::<u32>()
            .map_err(|_| format!("'{}' is not a percentage", s)),
    )?);

    let keep_on_during_suspend =
        answer!(p.confirm("Keep LEDs on while the host is suspended?", current.keep_on_during_suspend)?);

    let has_advanced = current.max_current_milliamps.is_some() || current.data_clock_khz.is_some();
    let (max_current_milliamps, data_clock_khz) =
        if answer!(p.confirm("Configure advanced options?", has_advanced)?) {
            let max_current = answer!(p.field(
                "Max current in mA ('none' for no limit)",
                Some(&optional_default(current.max_current_milliamps)),
                parse_optional,
            )?);
            let data_clock = answer!(p.field(
                "Data clock in kHz ('none' for the default)",
                Some(&optional_default(current.data_clock_khz)),
                parse_optional,
            )?);
            (max_current, data_clock)
        } else {
            (current.max_current_milliamps, current.data_clock_khz)
        };

    let hardware = HardwareConfig {
        data_pin,
        module_type,
        color_format,
        led_count,
        brightness_percent,
        keep_on_during_suspend,
        max_current_milliamps,
        data_clock_khz,
    };

    Ok(Command::Dispatch(vec![
        Action::SetHardware(hardware),
        Action::Next,
    ]))
}

fn optional_default(value: Option<u32>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

fn parse_optional(s: &str) -> Result<Option<u32>, String> {
    match s.trim().to_lowercase().as_str() {
        "none" | "-" => Ok(None),
        other => other
            .parse::<u32>()
            .map(Some)
            .map_err(|_| format!("'{}' is not a whole number", s)),
    }
}
