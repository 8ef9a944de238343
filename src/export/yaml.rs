//! YAML export
//!
//! Human-readable configuration with a comment header.

use std::io::Write;

use super::ConfigurationExport;
use crate::error::{LedError, LedResult};

/// Write an export as YAML
pub fn export_yaml<W: Write>(export: &ConfigurationExport, writer: &mut W) -> LedResult<()> {
    let hardware = &export.configuration.hardware;
    let header = format!(
        "# LED Configurator Export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         #\n\
         # Chain: {}\n\
         # Groups: {} ({} of {} LEDs assigned)\n\n",
        export.exported_at,
        export.app_version,
        hardware,
        export.metadata.group_count,
        export.metadata.assigned_led_count,
        hardware.led_count,
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| LedError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| LedError::Export(e.to_string()))
}

/// Parse and validate a YAML export
pub fn import_from_yaml(yaml_str: &str) -> LedResult<ConfigurationExport> {
    let export: ConfigurationExport =
        serde_yaml::from_str(yaml_str).map_err(|e| LedError::Import(e.to_string()))?;
    export.validate()?;
    Ok(export)
}
