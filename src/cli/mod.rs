//! CLI command handlers
//!
//! The interactive shell plus the handlers behind the non-interactive
//! subcommands.

pub mod input;
pub mod menu;
pub mod shell;

pub use menu::{MenuCommand, ReportScope};
pub use shell::{run_interactive, Shell};

use std::io::Write;

use crate::config::settings::{Settings, SettingsUpdate};
use crate::error::TrackerResult;
use crate::storage::Storage;

/// Save any requested setting changes, then print resolved paths and settings
pub fn handle_config_command<W: Write>(
    storage: &Storage,
    settings: &mut Settings,
    update: &SettingsUpdate,
    out: &mut W,
) -> TrackerResult<()> {
    let paths = storage.paths();

    if !update.is_empty() {
        settings.apply(update);
        settings.save(paths)?;
        writeln!(out, "Settings saved to {}", paths.settings_file().display())?;
        writeln!(out)?;
    }

    writeln!(out, "Expense Tracker Configuration")?;
    writeln!(out, "=============================")?;
    writeln!(out, "Data directory: {}", paths.base_dir().display())?;
    writeln!(out, "Data file:      {}", paths.data_file().display())?;
    writeln!(out, "History file:   {}", paths.history_file().display())?;
    writeln!(out, "Settings file:  {}", paths.settings_file().display())?;
    writeln!(out, "Audit log:      {}", paths.audit_log().display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Audit log enabled:  {}", settings.audit_enabled)?;
    writeln!(out, "  Interactive chart:  {}", settings.interactive_chart)?;
    writeln!(out, "  Pause after table:  {}", settings.pause_after_table)?;
    Ok(())
}

/// Export the current document to the history file
pub fn handle_history_command<W: Write>(storage: &Storage, out: &mut W) -> TrackerResult<()> {
    let document = storage.load()?;
    storage.save_history(&document)?;

    writeln!(
        out,
        "Exported {} expenses and {} budgets to {}",
        document.expenses.len(),
        document.budgets.len(),
        storage.paths().history_file().display()
    )?;
    Ok(())
}

/// Print the most recent audit log entries
pub fn handle_audit_command<W: Write>(
    storage: &Storage,
    limit: usize,
    out: &mut W,
) -> TrackerResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        writeln!(out, "No audit entries.")?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(out, "{}", entry.format_human_readable())?;
    }
    Ok(())
}
