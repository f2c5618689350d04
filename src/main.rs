use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_audit_command, handle_config_command, handle_history_command, run_interactive,
};
use expense_tracker::config::paths::DATA_DIR_ENV;
use expense_tracker::config::{Settings, SettingsUpdate, TrackerPaths};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses, set named budgets and get warned when spending \
                  goes over them. Run without a command to open the interactive menu."
)]
struct Cli {
    /// Directory holding data.json and the other tracker files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Shell,

    /// Show resolved paths and settings, optionally changing settings
    Config {
        /// Record changes in the audit log
        #[arg(long, value_name = "BOOL")]
        audit: Option<bool>,

        /// Draw the pie chart in the terminal
        #[arg(long, value_name = "BOOL")]
        interactive_chart: Option<bool>,

        /// Wait for Enter after a spending table
        #[arg(long, value_name = "BOOL")]
        pause_after_table: Option<bool>,
    },

    /// Export the current data to history.json
    History,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::resolve(cli.data_dir)?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths, &settings)?;

    let mut stdout = io::stdout();
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_interactive(&storage, &settings)?,
        Commands::Config {
            audit,
            interactive_chart,
            pause_after_table,
        } => {
            let update = SettingsUpdate {
                audit_enabled: audit,
                interactive_chart,
                pause_after_table,
            };
            handle_config_command(&storage, &mut settings, &update, &mut stdout)?
        }
        Commands::History => handle_history_command(&storage, &mut stdout)?,
        Commands::Audit { limit } => handle_audit_command(&storage, limit, &mut stdout)?,
    }

    Ok(())
}
