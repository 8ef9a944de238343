//! Settings CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_hardware_details;
use crate::error::LedResult;
use crate::storage::Storage;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,

    /// Change a setting (audit_enabled, pretty_json, export_format)
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },

    /// Use the saved hardware as the starting point for fresh wizard runs
    #[command(name = "default-hardware")]
    DefaultHardware,
}

/// Handle a config command
pub fn handle_config_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> LedResult<()> {
    let paths = storage.paths();

    match cmd {
        ConfigCommands::Show => {
            println!("LED Configurator Settings");
            println!("=========================");
            println!("Data directory:     {}", paths.base_dir().display());
            println!("Configuration file: {}", paths.configuration_file().display());
            println!("Audit log:          {}", paths.audit_log().display());
            println!("Export directory:   {}", paths.export_dir().display());
            println!();
            println!("audit_enabled:  {}", settings.audit_enabled);
            println!("pretty_json:    {}", settings.pretty_json);
            println!("export_format:  {}", settings.export_format);
            println!();
            println!("Default hardware for new wizard runs:");
            print!("{}", format_hardware_details(&settings.default_hardware));
        }

        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(paths)?;
            println!("Set {} = {}", key, value);
        }

        ConfigCommands::DefaultHardware => {
            let config = crate::services::ConfigurationService::new(storage).require()?;
            settings.default_hardware = config.hardware;
            settings.save(paths)?;
            println!("Default hardware set to: {}", settings.default_hardware);
        }
    }

    Ok(())
}
