use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use led_configurator::cli::{
    handle_config_command, handle_export_command, handle_group_command, handle_hardware_command,
    handle_history_command, handle_import_command, handle_show_command, handle_validate_command,
    handle_wizard_command, ConfigCommands, GroupCommands, HardwareCommands,
};
use led_configurator::config::{LedPaths, Settings};
use led_configurator::export::ExportFormat;
use led_configurator::logging;
use led_configurator::setup::Prompter;
use led_configurator::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledconf",
    version,
    about = "Step-by-step configurator for addressable LED chains",
    long_about = "ledconf walks through the hardware of an addressable LED chain \
                  (data pin, LED type, length, brightness) and splits the chain into \
                  groups for buttons, status LEDs and case lighting. The result is \
                  saved as JSON and can be exported as JSON or YAML."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive configuration wizard
    Wizard {
        /// Start from the default hardware instead of the saved configuration
        #[arg(long)]
        fresh: bool,
    },

    /// Show the saved configuration
    Show,

    /// Hardware settings
    #[command(subcommand, alias = "hw")]
    Hardware(HardwareCommands),

    /// LED groups
    #[command(subcommand)]
    Group(GroupCommands),

    /// Export the saved configuration
    Export {
        /// Output format (defaults to the export_format setting)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file, or '-' for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the saved configuration with an exported one
    Import {
        /// JSON or YAML export file
        file: PathBuf,
    },

    /// Check the saved configuration, or an export file
    Validate {
        /// Export file to check instead of the saved configuration
        file: Option<PathBuf>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Paths and settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = LedPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths)?;
    storage.set_audit_enabled(settings.audit_enabled);
    storage.load_all()?;

    match cli.command {
        Some(Commands::Wizard { fresh }) => {
            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
            handle_wizard_command(&storage, &settings, fresh, &mut prompter)?;
        }
        Some(Commands::Show) => handle_show_command(&storage)?,
        Some(Commands::Hardware(cmd)) => handle_hardware_command(&storage, &settings, cmd)?,
        Some(Commands::Group(cmd)) => handle_group_command(&storage, cmd)?,
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, &settings, format, output)?
        }
        Some(Commands::Import { file }) => handle_import_command(&storage, &file)?,
        Some(Commands::Validate { file }) => handle_validate_command(&storage, file.as_deref())?,
        Some(Commands::History { limit }) => handle_history_command(&storage, limit)?,
        Some(Commands::Config(cmd)) => handle_config_command(&storage, &mut settings, cmd)?,
        None => {
            if storage.is_initialized() {
                handle_show_command(&storage)?;
            } else {
                println!("No LED configuration saved yet.");
                println!();
                println!("Run 'ledconf wizard' to create one, or 'ledconf --help' for all commands.");
            }
        }
    }

    Ok(())
}
