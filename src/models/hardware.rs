//! Hardware model
//!
//! Describes the physical LED chain: the data pin driving it, the LED chip and
//! its channel order, how many LEDs exist and the global brightness ceiling.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Highest GPIO number on the controller's pin bank
pub const MAX_DATA_PIN: u8 = 29;

/// Upper bound for the brightness ceiling, in percent
pub const MAX_BRIGHTNESS_PERCENT: u32 = 100;

/// Addressable LED chip variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LedModuleType {
    #[default]
    #[serde(rename = "WS2812B")]
    Ws2812b,
    #[serde(rename = "SK6812")]
    Sk6812,
    #[serde(rename = "SK6812E_MINI")]
    Sk6812eMini,
    #[serde(rename = "SK6805")]
    Sk6805,
}

impl LedModuleType {
    /// All module types in display order
    pub fn all() -> &'static [Self] {
        &[Self::Ws2812b, Self::Sk6812, Self::Sk6812eMini, Self::Sk6805]
    }

    /// Numeric code used by the device firmware
    pub fn code(&self) -> u8 {
        match self {
            Self::Ws2812b => 0,
            Self::Sk6812 => 1,
            Self::Sk6812eMini => 2,
            Self::Sk6805 => 3,
        }
    }

    /// Label shown in selection lists
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ws2812b => "WS2812B (most common)",
            Self::Sk6812 => "SK6812",
            Self::Sk6812eMini => "SK6812-E MINI",
            Self::Sk6805 => "SK6805",
        }
    }

    /// Parse from a name or numeric code
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "0" | "WS2812B" | "WS2812" => Some(Self::Ws2812b),
            "1" | "SK6812" => Some(Self::Sk6812),
            "2" | "SK6812EMINI" => Some(Self::Sk6812eMini),
            "3" | "SK6805" => Some(Self::Sk6805),
            _ => None,
        }
    }
}

impl fmt::Display for LedModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ws2812b => write!(f, "WS2812B"),
            Self::Sk6812 => write!(f, "SK6812"),
            Self::Sk6812eMini => write!(f, "SK6812-E MINI"),
            Self::Sk6805 => write!(f, "SK6805"),
        }
    }
}

/// Channel order on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorFormat {
    #[default]
    Grb,
    Rgb,
    Grbw,
    Rgbw,
}

impl ColorFormat {
    /// All color formats in display order
    pub fn all() -> &'static [Self] {
        &[Self::Grb, Self::Rgb, Self::Grbw, Self::Rgbw]
    }

    /// Numeric code used by the device firmware
    pub fn code(&self) -> u8 {
        match self {
            Self::Grb => 0,
            Self::Rgb => 1,
            Self::Grbw => 2,
            Self::Rgbw => 3,
        }
    }

    /// Number of color channels per LED
    pub fn channel_count(&self) -> u8 {
        if self.has_white_channel() {
            4
        } else {
            3
        }
    }

    /// Whether the format carries a dedicated white channel
    pub fn has_white_channel(&self) -> bool {
        matches!(self, Self::Grbw | Self::Rgbw)
    }

    /// Label shown in selection lists
    pub fn label(&self) -> &'static str {
        match self {
            Self::Grb => "GRB (most common)",
            Self::Rgb => "RGB",
            Self::Grbw => "GRBW",
            Self::Rgbw => "RGBW",
        }
    }

    /// Parse from a name or numeric code
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "0" | "GRB" => Some(Self::Grb),
            "1" | "RGB" => Some(Self::Rgb),
            "2" | "GRBW" => Some(Self::Grbw),
            "3" | "RGBW" => Some(Self::Rgbw),
            _ => None,
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grb => write!(f, "GRB"),
            Self::Rgb => write!(f, "RGB"),
            Self::Grbw => write!(f, "GRBW"),
            Self::Rgbw => write!(f, "RGBW"),
        }
    }
}

/// GPIO pin driving the LED chain
///
/// Only pins that exist on the controller can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DataPin(u8);

impl DataPin {
    /// Create a pin, rejecting GPIO numbers the controller does not have
    pub fn new(gpio: u8) -> Result<Self, ValidationError> {
        if gpio > MAX_DATA_PIN {
            return Err(ValidationError::out_of_range(
                "data_pin",
                gpio,
                0,
                MAX_DATA_PIN as i64,
            ));
        }
        Ok(Self(gpio))
    }

    /// GPIO number
    pub fn gpio(&self) -> u8 {
        self.0
    }

    /// Every selectable pin
    pub fn all() -> impl Iterator<Item = DataPin> {
        (0..=MAX_DATA_PIN).map(DataPin)
    }

    /// Parse `12`, `GP12`, `GPIO12` or `PIN12`
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let upper = s.trim().to_uppercase();
        let digits = ["GPIO", "GP", "PIN"]
            .iter()
            .find_map(|p| upper.strip_prefix(p))
            .unwrap_or(&upper);
        let gpio: u8 = digits
            .parse()
            .map_err(|_| ValidationError::MissingField { field: "data_pin" })?;
        Self::new(gpio)
    }
}

impl TryFrom<u8> for DataPin {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DataPin> for u8 {
    fn from(pin: DataPin) -> Self {
        pin.0
    }
}

impl fmt::Display for DataPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GP{}", self.0)
    }
}

/// Hardware description of the whole LED chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareConfig {
    /// The single data line driving the chain
    pub data_pin: DataPin,

    /// LED chip variant
    pub module_type: LedModuleType,

    /// Channel order
    pub color_format: ColorFormat,

    /// Total LEDs physically present on the chain
    pub led_count: u32,

    /// Global brightness ceiling applied on the device
    pub brightness_percent: u32,

    /// Keep LEDs lit while the host is suspended
    #[serde(default)]
    pub keep_on_during_suspend: bool,

    /// Optional current budget for the whole chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_current_milliamps: Option<u32>,

    /// Optional data clock override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_clock_khz: Option<u32>,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            data_pin: DataPin::default(),
            module_type: LedModuleType::default(),
            color_format: ColorFormat::default(),
            led_count: 0,
            brightness_percent: 50,
            keep_on_during_suspend: false,
            max_current_milliamps: None,
            data_clock_khz: None,
        }
    }
}

impl HardwareConfig {
    /// Create a hardware description for a chain of `led_count` LEDs
    pub fn with_led_count(led_count: u32) -> Self {
        Self {
            led_count,
            ..Self::default()
        }
    }

    /// Validate the hardware fields on their own
    ///
    /// Chain coverage against existing groups is checked separately by
    /// [`validate_chain`](crate::models::configuration::validate_chain).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.brightness_percent > MAX_BRIGHTNESS_PERCENT {
            return Err(ValidationError::out_of_range(
                "brightness_percent",
                self.brightness_percent,
                0,
                MAX_BRIGHTNESS_PERCENT as i64,
            ));
        }

        if self.led_count == 0 {
            return Err(ValidationError::out_of_range(
                "led_count",
                self.led_count,
                1,
                u32::MAX as i64,
            ));
        }

        if self.max_current_milliamps == Some(0) {
            return Err(ValidationError::MissingField {
                field: "max_current_milliamps",
            });
        }

        if self.data_clock_khz == Some(0) {
            return Err(ValidationError::MissingField {
                field: "data_clock_khz",
            });
        }

        Ok(())
    }
}

impl fmt::Display for HardwareConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} {} on {} at {}%",
            self.led_count, self.module_type, self.color_format, self.data_pin, self.brightness_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let hw = HardwareConfig::default();
        assert_eq!(hw.data_pin.gpio(), 0);
        assert_eq!(hw.module_type, LedModuleType::Ws2812b);
        assert_eq!(hw.color_format, ColorFormat::Grb);
        assert_eq!(hw.brightness_percent, 50);
        assert!(!hw.keep_on_during_suspend);
        // Chain length has to be entered by the user
        assert!(hw.validate().is_err());
    }

    #[test]
    fn test_validation_bounds() {
        let mut hw = HardwareConfig::with_led_count(100);
        assert!(hw.validate().is_ok());

        hw.brightness_percent = 100;
        assert!(hw.validate().is_ok());

        hw.brightness_percent = 150;
        assert!(matches!(
            hw.validate(),
            Err(ValidationError::OutOfRange { field: "brightness_percent", .. })
        ));

        hw.brightness_percent = 0;
        hw.led_count = 0;
        assert!(matches!(
            hw.validate(),
            Err(ValidationError::OutOfRange { field: "led_count", .. })
        ));
    }

    #[test]
    fn test_advanced_fields() {
        let mut hw = HardwareConfig::with_led_count(10);
        hw.max_current_milliamps = Some(500);
        hw.data_clock_khz = Some(800);
        assert!(hw.validate().is_ok());

        hw.max_current_milliamps = Some(0);
        assert_eq!(
            hw.validate(),
            Err(ValidationError::MissingField {
                field: "max_current_milliamps"
            })
        );

        hw.max_current_milliamps = None;
        hw.data_clock_khz = Some(0);
        assert_eq!(
            hw.validate(),
            Err(ValidationError::MissingField {
                field: "data_clock_khz"
            })
        );
    }

    #[test]
    fn test_channel_count() {
        assert_eq!(ColorFormat::Grb.channel_count(), 3);
        assert_eq!(ColorFormat::Rgb.channel_count(), 3);
        assert_eq!(ColorFormat::Grbw.channel_count(), 4);
        assert_eq!(ColorFormat::Rgbw.channel_count(), 4);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(LedModuleType::parse("ws2812b"), Some(LedModuleType::Ws2812b));
        assert_eq!(LedModuleType::parse("SK6812-E MINI"), Some(LedModuleType::Sk6812eMini));
        assert_eq!(LedModuleType::parse("3"), Some(LedModuleType::Sk6805));
        assert_eq!(LedModuleType::parse("apa102"), None);

        assert_eq!(ColorFormat::parse("rgbw"), Some(ColorFormat::Rgbw));
        assert_eq!(ColorFormat::parse("0"), Some(ColorFormat::Grb));
        assert_eq!(ColorFormat::parse("bgr"), None);
    }

    #[test]
    fn test_data_pin() {
        assert_eq!(DataPin::parse("GP12").unwrap().gpio(), 12);
        assert_eq!(DataPin::parse("pin3").unwrap().gpio(), 3);
        assert_eq!(DataPin::parse("28").unwrap().gpio(), 28);
        assert!(matches!(
            DataPin::parse("30"),
            Err(ValidationError::OutOfRange { field: "data_pin", .. })
        ));
        assert!(matches!(
            DataPin::parse("led"),
            Err(ValidationError::MissingField { field: "data_pin" })
        ));
        assert_eq!(DataPin::all().count(), 30);
    }

    #[test]
    fn test_serialization() {
        let mut hw = HardwareConfig::with_led_count(42);
        hw.module_type = LedModuleType::Sk6812eMini;
        hw.color_format = ColorFormat::Grbw;
        hw.data_clock_khz = Some(800);

        let json = serde_json::to_string(&hw).unwrap();
        assert!(json.contains("\"SK6812E_MINI\""));
        assert!(json.contains("\"GRBW\""));
        assert!(!json.contains("max_current_milliamps"));

        let back: HardwareConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(hw, back);
    }

    #[test]
    fn test_deserialize_rejects_unknown_pin() {
        let json = r#"{"data_pin":40,"module_type":"WS2812B","color_format":"GRB","led_count":1,"brightness_percent":10}"#;
        assert!(serde_json::from_str::<HardwareConfig>(json).is_err());
    }
}
