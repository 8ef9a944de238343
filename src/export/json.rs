//! JSON export

use std::io::Write;

use super::ConfigurationExport;
use crate::error::{LedError, LedResult};

/// Write an export as JSON
pub fn export_json<W: Write>(
    export: &ConfigurationExport,
    writer: &mut W,
    pretty: bool,
) -> LedResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    }
    .map_err(|e| LedError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| LedError::Export(e.to_string()))
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> LedResult<ConfigurationExport> {
    let export: ConfigurationExport =
        serde_json::from_str(json_str).map_err(|e| LedError::Import(e.to_string()))?;
    export.validate()?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HardwareConfig, LedConfiguration};

    #[test]
    fn test_compact_output_is_one_line() {
        let export = ConfigurationExport::new(LedConfiguration::new(
            HardwareConfig::with_led_count(4),
            vec![],
        ));
        let mut out = Vec::new();
        export_json(&export, &mut out, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(r#""schema_version":"1.0.0""#));
    }

    #[test]
    fn test_import_rejects_invalid_configuration() {
        let mut export = ConfigurationExport::new(LedConfiguration::new(
            HardwareConfig::with_led_count(4),
            vec![],
        ));
        export.configuration.hardware.brightness_percent = 120;
        let json = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json).unwrap_err();
        assert!(err.to_string().contains("brightness_percent"));
    }

    #[test]
    fn test_import_garbage() {
        assert!(matches!(import_from_json("[]"), Err(LedError::Import(_))));
    }
}
