//! Hardware CLI commands
//!
//! Shows and edits the hardware block of the saved configuration.

use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::format_hardware_details;
use crate::error::LedResult;
use crate::models::{ColorFormat, DataPin, HardwareConfig, LedModuleType};
use crate::services::ConfigurationService;
use crate::storage::Storage;

/// Hardware subcommands
#[derive(Subcommand, Debug)]
pub enum HardwareCommands {
    /// Show the saved hardware settings
    Show,

    /// Change hardware settings; unspecified fields keep their value
    Set(HardwareArgs),
}

/// Hardware fields settable from the command line
#[derive(Args, Debug, Default, Clone)]
pub struct HardwareArgs {
    /// Data pin (e.g. GP0 or 0)
    #[arg(long, value_parser = parse_pin)]
    pub pin: Option<DataPin>,

    /// LED type (ws2812b, sk6812, sk6812emini, sk6805 or its number)
    #[arg(long, value_parser = parse_led_type)]
    pub led_type: Option<LedModuleType>,

    /// Color format (grb, rgb, grbw, rgbw or its number)
    #[arg(long, value_parser = parse_color_format)]
    pub color_format: Option<ColorFormat>,

    /// Number of LEDs on the chain
    #[arg(long)]
    pub count: Option<u32>,

    /// Brightness in percent
    #[arg(long)]
    pub brightness: Option<u32>,

    /// Keep LEDs lit while the host is suspended
    #[arg(long)]
    pub keep_on: Option<bool>,

    /// Current limit in mA (0 clears it)
    #[arg(long)]
    pub max_current: Option<u32>,

    /// Data clock in kHz (0 clears it)
    #[arg(long)]
    pub data_clock: Option<u32>,
}

impl HardwareArgs {
    /// Apply the given fields on top of `hardware`
    pub fn apply(&self, mut hardware: HardwareConfig) -> HardwareConfig {
        if let Some(pin) = self.pin {
            hardware.data_pin = pin;
        }
        if let Some(module_type) = self.led_type {
            hardware.module_type = module_type;
        }
        if let Some(format) = self.color_format {
            hardware.color_format = format;
        }
        if let Some(count) = self.count {
            hardware.led_count = count;
        }
        if let Some(brightness) = self.brightness {
            hardware.brightness_percent = brightness;
        }
        if let Some(keep_on) = self.keep_on {
            hardware.keep_on_during_suspend = keep_on;
        }
        if let Some(milliamps) = self.max_current {
            hardware.max_current_milliamps = (milliamps > 0).then_some(milliamps);
        }
        if let Some(khz) = self.data_clock {
            hardware.data_clock_khz = (khz > 0).then_some(khz);
        }
        hardware
    }
}

fn parse_pin(s: &str) -> Result<DataPin, String> {
    DataPin::parse(s).map_err(|e| e.to_string())
}

fn parse_led_type(s: &str) -> Result<LedModuleType, String> {
    LedModuleType::parse(s).ok_or_else(|| format!("unknown LED type '{}'", s))
}

fn parse_color_format(s: &str) -> Result<ColorFormat, String> {
    ColorFormat::parse(s).ok_or_else(|| format!("unknown color format '{}'", s))
}

/// Handle a hardware command
pub fn handle_hardware_command(
    storage: &Storage,
    settings: &Settings,
    cmd: HardwareCommands,
) -> LedResult<()> {
    let service = ConfigurationService::new(storage);

    match cmd {
        HardwareCommands::Show => {
            let config = service.require()?;
            print!("{}", format_hardware_details(&config.hardware));
        }

        HardwareCommands::Set(args) => {
            let current = service
                .get()?
                .map(|c| c.hardware)
                .unwrap_or_else(|| settings.default_hardware.clone());

            let hardware = service.set_hardware(args.apply(current))?;
            println!("Hardware updated: {}", hardware);
        }
    }

    Ok(())
}
