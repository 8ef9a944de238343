//! CLI commands for export, import and validation
//!
//! Export writes the saved configuration as a JSON or YAML document; import
//! reads one back, validates it and replaces the saved configuration.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::Settings;
use crate::error::{LedError, LedResult};
use crate::export::{export_configuration, import_file, ExportFormat};
use crate::services::ConfigurationService;
use crate::storage::Storage;

/// Handle the export command
///
/// Without `--output` the file lands in the data directory's `exports/`
/// folder, named after the current time. `-` writes to stdout.
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
) -> LedResult<()> {
    let service = ConfigurationService::new(storage);
    let config = service.require()?;

    let format = format
        .or_else(|| output.as_deref().and_then(ExportFormat::from_path))
        .unwrap_or(settings.export_format);

    if output.as_deref() == Some(Path::new("-")) {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        export_configuration(&config, format, &mut writer, settings.pretty_json)?;
        writer.flush()?;
        return Ok(());
    }

    let output = match output {
        Some(path) => path,
        None => {
            let dir = storage.paths().export_dir();
            std::fs::create_dir_all(&dir).map_err(|e| {
                LedError::Export(format!("Failed to create {}: {}", dir.display(), e))
            })?;
            dir.join(format!(
                "led_config_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        }
    };

    let file = File::create(&output).map_err(|e| {
        LedError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    let export = export_configuration(&config, format, &mut writer, settings.pretty_json)?;
    writer.flush()?;

    println!("Configuration exported to: {}", output.display());
    println!(
        "  Format: {}  Groups: {}  LEDs assigned: {} of {}",
        format,
        export.metadata.group_count,
        export.metadata.assigned_led_count,
        config.hardware.led_count
    );

    Ok(())
}

/// Handle the import command
pub fn handle_import_command(storage: &Storage, file: &Path) -> LedResult<()> {
    if !file.exists() {
        return Err(LedError::Import(format!("File not found: {}", file.display())));
    }

    let export = import_file(file)?;
    let service = ConfigurationService::new(storage);
    let config = service.save_configuration(export.configuration)?;

    println!("Imported configuration from: {}", file.display());
    println!("  Exported at: {}", export.exported_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("  Hardware:    {}", config.hardware);
    println!("  Groups:      {}", config.groups.len());

    Ok(())
}

/// Handle the validate command
///
/// Checks the saved configuration file, or an export file when one is given.
pub fn handle_validate_command(storage: &Storage, file: Option<&Path>) -> LedResult<()> {
    let config = match file {
        Some(path) => import_file(path)?.configuration,
        None => ConfigurationService::new(storage).validate_saved()?,
    };

    println!(
        "Configuration is valid: {} LEDs, {} group(s), {} LEDs assigned",
        config.hardware.led_count,
        config.groups.len(),
        config.assigned_led_count()
    );
    Ok(())
}
