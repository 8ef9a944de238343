//! Export and import of LED configurations
//!
//! A configuration is exported together with a small envelope (schema
//! version, timestamp, app version, summary counts) so that files can be
//! checked before they are imported on another machine.
//! - JSON: machine-readable
//! - YAML: human-readable, with a comment header

pub mod json;
pub mod yaml;

use std::path::Path;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{LedError, LedResult};
use crate::models::{IndexRange, LedConfiguration};

pub use json::{export_json, import_from_json};
pub use yaml::{export_yaml, import_from_yaml};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Exported configuration with its envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub configuration: LedConfiguration,

    pub metadata: ExportMetadata,
}

/// Summary of the exported configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub group_count: usize,

    pub assigned_led_count: u32,

    pub free_led_count: u32,

    /// Chain ranges not covered by any group
    pub free_ranges: Vec<IndexRange>,
}

impl ConfigurationExport {
    pub fn new(configuration: LedConfiguration) -> Self {
        let free_ranges = configuration.free_ranges();
        let metadata = ExportMetadata {
            group_count: configuration.groups.len(),
            assigned_led_count: configuration.assigned_led_count(),
            free_led_count: free_ranges.iter().map(IndexRange::len).sum(),
            free_ranges,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            configuration,
            metadata,
        }
    }

    /// Check the schema version and re-validate the configuration
    pub fn validate(&self) -> LedResult<()> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(LedError::Import(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            )));
        }

        self.configuration
            .validate()
            .map_err(|e| LedError::Import(format!("Exported configuration is invalid: {}", e)))
    }
}

/// Write `configuration` to `writer` in the given format
pub fn export_configuration<W: std::io::Write>(
    configuration: &LedConfiguration,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> LedResult<ConfigurationExport> {
    let export = ConfigurationExport::new(configuration.clone());
    match format {
        ExportFormat::Json => export_json(&export, writer, pretty)?,
        ExportFormat::Yaml => export_yaml(&export, writer)?,
    }
    Ok(export)
}

/// Read and validate an export file; the format follows the extension
pub fn import_file(path: &Path) -> LedResult<ConfigurationExport> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| LedError::Import(format!("Failed to read {}: {}", path.display(), e)))?;

    match ExportFormat::from_path(path).unwrap_or_default() {
        ExportFormat::Json => import_from_json(&contents),
        ExportFormat::Yaml => import_from_yaml(&contents),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupSettings, HardwareConfig, LedGroup};
    use tempfile::TempDir;

    fn sample() -> LedConfiguration {
        LedConfiguration::new(
            HardwareConfig::with_led_count(30),
            vec![LedGroup::new(
                IndexRange::new(0, 20),
                GroupSettings::CaseStrip {
                    leds_per_strip: 10,
                    strip_count: 2,
                },
            )],
        )
    }

    #[test]
    fn test_metadata() {
        let export = ConfigurationExport::new(sample());
        assert_eq!(export.metadata.group_count, 1);
        assert_eq!(export.metadata.assigned_led_count, 20);
        assert_eq!(export.metadata.free_led_count, 10);
        assert_eq!(export.metadata.free_ranges, vec![IndexRange::new(20, 30)]);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_schema_mismatch() {
        let mut export = ConfigurationExport::new(sample());
        export.schema_version = "0.1.0".into();
        assert!(matches!(export.validate(), Err(LedError::Import(_))));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.yml")), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::from_path(Path::new("a.JSON")), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_path(Path::new("a.txt")), None);
    }

    #[test]
    fn test_import_file_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        for format in [ExportFormat::Json, ExportFormat::Yaml] {
            let path = temp_dir.path().join(format!("leds.{}", format.extension()));
            let mut file = std::fs::File::create(&path).unwrap();
            export_configuration(&sample(), format, &mut file, true).unwrap();

            let imported = import_file(&path).unwrap();
            assert_eq!(imported.configuration.groups.len(), 1);
        }
    }
}
