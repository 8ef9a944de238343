//! Wizard and summary commands

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::format_configuration_summary;
use crate::error::LedResult;
use crate::services::ConfigurationService;
use crate::setup::{Prompter, SetupWizard};
use crate::storage::Storage;

/// Run the interactive wizard and save the result
///
/// The wizard starts from the saved configuration unless `fresh` is set or
/// nothing is saved yet, in which case it starts from the default hardware.
pub fn handle_wizard_command<R: BufRead, W: Write>(
    storage: &Storage,
    settings: &Settings,
    fresh: bool,
    prompter: &mut Prompter<R, W>,
) -> LedResult<bool> {
    let service = ConfigurationService::new(storage);

    let mut wizard = match service.get()? {
        Some(config) if !fresh => SetupWizard::from_configuration(config),
        _ => SetupWizard::new(settings.default_hardware.clone()),
    };

    let result = wizard.run(prompter)?;
    let Some(config) = result.configuration else {
        return Ok(false);
    };

    let config = service.save_configuration(config)?;
    prompter.say(format!(
        "Saved {} group(s) to {}",
        config.groups.len(),
        storage.paths().configuration_file().display()
    ))?;
    Ok(true)
}

/// Print the saved configuration
pub fn handle_show_command(storage: &Storage) -> LedResult<()> {
    let config = ConfigurationService::new(storage).require()?;
    print!("{}", format_configuration_summary(&config));
    Ok(())
}
