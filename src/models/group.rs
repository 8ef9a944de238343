//! LED group model
//!
//! A group is a contiguous slice of the chain with a behavioral role
//! (buttons, status LEDs, case lighting) and settings specific to that role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::GroupId;
use crate::error::ValidationError;

/// Behavioral role of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupType {
    Buttons,
    Joystick,
    StatusLeds,
    CaseStrip,
    CaseMatrix,
}

impl GroupType {
    /// All group types in selection order
    pub fn all() -> &'static [Self] {
        &[
            Self::Buttons,
            Self::Joystick,
            Self::StatusLeds,
            Self::CaseStrip,
            Self::CaseMatrix,
        ]
    }

    /// Numeric code used in selection lists
    pub fn code(&self) -> u8 {
        match self {
            Self::Buttons => 1,
            Self::Joystick => 2,
            Self::StatusLeds => 3,
            Self::CaseStrip => 4,
            Self::CaseMatrix => 5,
        }
    }

    /// Parse from a name or selection code
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "1" | "buttons" | "button" => Some(Self::Buttons),
            "2" | "joystick" | "stick" => Some(Self::Joystick),
            "3" | "statusleds" | "status" => Some(Self::StatusLeds),
            "4" | "casestrip" | "caseledstrip" | "strip" => Some(Self::CaseStrip),
            "5" | "casematrix" | "caseledmatrix" | "matrix" => Some(Self::CaseMatrix),
            _ => None,
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buttons => write!(f, "Buttons"),
            Self::Joystick => write!(f, "Joystick"),
            Self::StatusLeds => write!(f, "Status LEDs"),
            Self::CaseStrip => write!(f, "Case LED strip"),
            Self::CaseMatrix => write!(f, "Case LED matrix"),
        }
    }
}

/// Half-open interval `[start, end)` of LED indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: u32,
    pub end: u32,
}

impl IndexRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Range of `len` LEDs beginning at `start`
    pub fn with_len(start: u32, len: u32) -> Self {
        Self::new(start, start.saturating_add(len))
    }

    /// Number of LEDs covered (zero for empty or inverted ranges)
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the two ranges share at least one LED
    pub fn overlaps(&self, other: &IndexRange) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }

    /// Whether the range is non-empty and lies within `[0, led_count)`
    pub fn fits(&self, led_count: u32) -> bool {
        !self.is_empty() && self.end <= led_count
    }

    pub fn contains(&self, index: u32) -> bool {
        self.start <= index && index < self.end
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl FromStr for IndexRange {
    type Err = ValidationError;

    /// Accepts `start..end` or `start-end` (end exclusive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MissingField { field: "range" };
        let (start, end) = s
            .split_once("..")
            .or_else(|| s.split_once('-'))
            .ok_or_else(malformed)?;
        let start = start.trim().parse().map_err(|_| malformed())?;
        let end = end.trim().parse().map_err(|_| malformed())?;
        Ok(Self::new(start, end))
    }
}

/// Physical controller input a button LED sits under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonId {
    Up,
    Down,
    Left,
    Right,
    B1,
    B2,
    B3,
    B4,
    L1,
    R1,
    L2,
    R2,
    S1,
    S2,
    L3,
    R3,
    A1,
    A2,
}

impl ButtonId {
    /// All buttons in their default chain order
    pub fn all() -> &'static [Self] {
        use ButtonId::*;
        &[
            Up, Down, Left, Right, B1, B2, B3, B4, L1, R1, L2, R2, S1, S2, L3, R3, A1, A2,
        ]
    }

    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|b| b.to_string().eq_ignore_ascii_case(wanted))
    }

    /// Parse a comma or whitespace separated list of buttons
    pub fn parse_list(s: &str) -> Result<Vec<Self>, ValidationError> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| Self::parse(part).ok_or(ValidationError::MissingField { field: "button_order" }))
            .collect()
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// What a status LED reports
///
/// Serialized as a map (`{kind: Custom, name: ...}`) so a custom name that
/// reads like a built-in role survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name")]
pub enum StatusRole {
    PlayerIndicator,
    Turbo,
    Custom(String),
}

impl StatusRole {
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "" => None,
            "player" | "playerindicator" => Some(Self::PlayerIndicator),
            "turbo" => Some(Self::Turbo),
            _ => Some(Self::Custom(trimmed.to_string())),
        }
    }
}

impl fmt::Display for StatusRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerIndicator => write!(f, "Player indicator"),
            Self::Turbo => write!(f, "Turbo"),
            Self::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = ValidationError;

    /// Parse `#rrggbb` or `rrggbb`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MissingField { field: "color" };
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(malformed());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| malformed());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// How consecutive strips of a matrix are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WrapPattern {
    /// Every other strip runs backwards
    #[default]
    Serpentine,
    /// All strips run in the same direction
    Parallel,
}

impl WrapPattern {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "serpentine" | "zigzag" | "s" => Some(Self::Serpentine),
            "parallel" | "p" => Some(Self::Parallel),
            _ => None,
        }
    }
}

impl fmt::Display for WrapPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Settings specific to each group type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "group_type")]
pub enum GroupSettings {
    Buttons {
        leds_per_button: u32,
        button_order: Vec<ButtonId>,
    },
    Joystick {},
    StatusLeds {
        role: StatusRole,
        color: RgbColor,
    },
    CaseStrip {
        leds_per_strip: u32,
        strip_count: u32,
    },
    CaseMatrix {
        leds_per_strip: u32,
        strip_count: u32,
        wrap_pattern: WrapPattern,
    },
}

impl GroupSettings {
    /// The group type these settings belong to
    pub fn group_type(&self) -> GroupType {
        match self {
            Self::Buttons { .. } => GroupType::Buttons,
            Self::Joystick {} => GroupType::Joystick,
            Self::StatusLeds { .. } => GroupType::StatusLeds,
            Self::CaseStrip { .. } => GroupType::CaseStrip,
            Self::CaseMatrix { .. } => GroupType::CaseMatrix,
        }
    }

    /// Reasonable starting settings for a group type covering `range_len` LEDs
    pub fn default_for(group_type: GroupType, range_len: u32) -> Self {
        match group_type {
            GroupType::Buttons => Self::Buttons {
                leds_per_button: 1,
                button_order: ButtonId::all()
                    .iter()
                    .copied()
                    .take(range_len as usize)
                    .collect(),
            },
            GroupType::Joystick => Self::Joystick {},
            GroupType::StatusLeds => Self::StatusLeds {
                role: StatusRole::PlayerIndicator,
                color: RgbColor::WHITE,
            },
            GroupType::CaseStrip => Self::CaseStrip {
                leds_per_strip: range_len,
                strip_count: 1,
            },
            GroupType::CaseMatrix => Self::CaseMatrix {
                leds_per_strip: range_len,
                strip_count: 1,
                wrap_pattern: WrapPattern::default(),
            },
        }
    }

    /// Check the type-specific length invariant against the range length
    pub fn validate_length(&self, range_len: u32) -> Result<(), ValidationError> {
        let group_type = self.group_type();
        match self {
            Self::Buttons {
                leds_per_button,
                button_order,
            } => {
                if *leds_per_button == 0 {
                    return Err(ValidationError::mismatch(
                        group_type,
                        "each button needs at least one LED",
                    ));
                }
                let expected = u64::from(*leds_per_button) * button_order.len() as u64;
                if expected != u64::from(range_len) {
                    return Err(ValidationError::mismatch(
                        group_type,
                        format!(
                            "{} buttons x {} LEDs = {}, but the range holds {}",
                            button_order.len(),
                            leds_per_button,
                            expected,
                            range_len
                        ),
                    ));
                }
            }
            Self::Joystick {} | Self::StatusLeds { .. } => {}
            Self::CaseStrip {
                leds_per_strip,
                strip_count,
            }
            | Self::CaseMatrix {
                leds_per_strip,
                strip_count,
                ..
            } => {
                if *leds_per_strip == 0 || *strip_count == 0 {
                    return Err(ValidationError::mismatch(
                        group_type,
                        "strip length and strip count must be positive",
                    ));
                }
                let expected = u64::from(*leds_per_strip) * u64::from(*strip_count);
                if expected != u64::from(range_len) {
                    return Err(ValidationError::mismatch(
                        group_type,
                        format!(
                            "{} x {} = {}, but the range holds {}",
                            leds_per_strip, strip_count, expected, range_len
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    /// One-line description for group listings
    pub fn summary(&self) -> String {
        match self {
            Self::Buttons {
                leds_per_button,
                button_order,
            } => {
                let order: Vec<String> = button_order.iter().map(ToString::to_string).collect();
                format!("{} LED(s) per button: {}", leds_per_button, order.join(" "))
            }
            Self::Joystick {} => "no extra settings".to_string(),
            Self::StatusLeds { role, color } => format!("{} in {}", role, color),
            Self::CaseStrip {
                leds_per_strip,
                strip_count,
            } => format!("{} strip(s) of {} LEDs", strip_count, leds_per_strip),
            Self::CaseMatrix {
                leds_per_strip,
                strip_count,
                wrap_pattern,
            } => format!(
                "{} x {} matrix, {} wiring",
                strip_count, leds_per_strip, wrap_pattern
            ),
        }
    }
}

/// A contiguous slice of the chain with a role and its settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedGroup {
    /// Unique identifier
    pub id: GroupId,

    /// LEDs covered by the group
    pub range: IndexRange,

    /// Type-specific settings; the variant determines the group type
    pub settings: GroupSettings,
}

impl LedGroup {
    /// Create a new group
    pub fn new(range: IndexRange, settings: GroupSettings) -> Self {
        Self {
            id: GroupId::new(),
            range,
            settings,
        }
    }

    pub fn group_type(&self) -> GroupType {
        self.settings.group_type()
    }

    /// Validate the group's settings against its own range
    pub fn validate_settings(&self) -> Result<(), ValidationError> {
        self.settings.validate_length(self.range.len())
    }
}

impl fmt::Display for LedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.group_type(), self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_overlap() {
        let a = IndexRange::new(0, 16);
        assert!(a.overlaps(&IndexRange::new(10, 12)));
        assert!(a.overlaps(&IndexRange::new(15, 20)));
        assert!(!a.overlaps(&IndexRange::new(16, 20)));
        assert!(!a.overlaps(&IndexRange::new(5, 5)));
    }

    #[test]
    fn test_range_fits() {
        assert!(IndexRange::new(0, 100).fits(100));
        assert!(!IndexRange::new(90, 101).fits(100));
        assert!(!IndexRange::new(4, 4).fits(100));
        assert!(!IndexRange::new(8, 4).fits(100));
    }

    #[test]
    fn test_range_parse() {
        assert_eq!("0..16".parse::<IndexRange>().unwrap(), IndexRange::new(0, 16));
        assert_eq!("16-20".parse::<IndexRange>().unwrap(), IndexRange::new(16, 20));
        assert!("16".parse::<IndexRange>().is_err());
        assert!("a..b".parse::<IndexRange>().is_err());
    }

    #[test]
    fn test_group_type_parse() {
        assert_eq!(GroupType::parse("status-leds"), Some(GroupType::StatusLeds));
        assert_eq!(GroupType::parse("Case LED matrix"), Some(GroupType::CaseMatrix));
        assert_eq!(GroupType::parse("4"), Some(GroupType::CaseStrip));
        assert_eq!(GroupType::parse("keyboard"), None);
    }

    #[test]
    fn test_button_list_parse() {
        let order = ButtonId::parse_list("b1, b2 up,Down").unwrap();
        assert_eq!(order, vec![ButtonId::B1, ButtonId::B2, ButtonId::Up, ButtonId::Down]);
        assert!(ButtonId::parse_list("B1,B9").is_err());
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("#ff8000".parse::<RgbColor>().unwrap(), RgbColor::new(255, 128, 0));
        assert_eq!("00ff00".parse::<RgbColor>().unwrap().to_string(), "#00ff00");
        assert!("#fff".parse::<RgbColor>().is_err());
        assert!("#gg0000".parse::<RgbColor>().is_err());
    }

    #[test]
    fn test_buttons_length() {
        let settings = GroupSettings::Buttons {
            leds_per_button: 2,
            button_order: ButtonId::all()[..8].to_vec(),
        };
        assert!(settings.validate_length(16).is_ok());
        assert!(matches!(
            settings.validate_length(15),
            Err(ValidationError::SettingsMismatch { group_type: GroupType::Buttons, .. })
        ));

        let zero = GroupSettings::Buttons {
            leds_per_button: 0,
            button_order: vec![],
        };
        assert!(zero.validate_length(0).is_err());
    }

    #[test]
    fn test_strip_length() {
        let strip = GroupSettings::CaseStrip {
            leds_per_strip: 10,
            strip_count: 2,
        };
        assert!(strip.validate_length(20).is_ok());

        let wrong = GroupSettings::CaseStrip {
            leds_per_strip: 10,
            strip_count: 3,
        };
        assert!(matches!(
            wrong.validate_length(20),
            Err(ValidationError::SettingsMismatch { .. })
        ));

        let matrix = GroupSettings::CaseMatrix {
            leds_per_strip: 4,
            strip_count: 4,
            wrap_pattern: WrapPattern::Parallel,
        };
        assert!(matrix.validate_length(16).is_ok());
        assert!(matrix.validate_length(12).is_err());
    }

    #[test]
    fn test_defaults_satisfy_length() {
        for &group_type in GroupType::all() {
            let settings = GroupSettings::default_for(group_type, 6);
            assert_eq!(settings.group_type(), group_type);
            assert!(settings.validate_length(6).is_ok(), "{}", group_type);
        }
    }

    #[test]
    fn test_settings_serialization_is_tagged() {
        let settings = GroupSettings::StatusLeds {
            role: StatusRole::Turbo,
            color: RgbColor::new(1, 2, 3),
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["group_type"], "StatusLeds");
        assert_eq!(json["role"], serde_json::json!({"kind": "Turbo"}));

        let custom = serde_json::to_value(StatusRole::Custom("Auth".into())).unwrap();
        assert_eq!(custom, serde_json::json!({"kind": "Custom", "name": "Auth"}));
        let back: GroupSettings = serde_json::from_value(json).unwrap();
        assert_eq!(back, settings);

        let joystick = serde_json::to_value(GroupSettings::Joystick {}).unwrap();
        assert_eq!(joystick, serde_json::json!({"group_type": "Joystick"}));
        let back: GroupSettings = serde_json::from_value(joystick).unwrap();
        assert_eq!(back, GroupSettings::Joystick {});
    }

    #[test]
    fn test_custom_role_keeps_its_exact_name() {
        for name in ["turbo", "Player indicator", " padded "] {
            let role = StatusRole::Custom(name.to_string());
            let json = serde_json::to_string(&role).unwrap();
            let back: StatusRole = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role, "{}", json);

            let settings = GroupSettings::StatusLeds {
                role: role.clone(),
                color: RgbColor::new(255, 0, 0),
            };
            let yaml = serde_yaml::to_string(&settings).unwrap();
            let back: GroupSettings = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(back, settings, "{}", yaml);
        }
    }

    #[test]
    fn test_status_role_parse() {
        assert_eq!(StatusRole::parse("player"), Some(StatusRole::PlayerIndicator));
        assert_eq!(StatusRole::parse("TURBO"), Some(StatusRole::Turbo));
        assert_eq!(
            StatusRole::parse("Auth mode"),
            Some(StatusRole::Custom("Auth mode".into()))
        );
        assert_eq!(StatusRole::parse("  "), None);
    }
}
