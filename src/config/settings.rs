//! User settings for the expense tracker
//!
//! Every field has a default, so a missing or partial `settings.json` is fine.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Record every mutation in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Draw the pie chart in the terminal when stdout is a TTY
    #[serde(default = "default_true")]
    pub interactive_chart: bool,

    /// Wait for Enter after printing a spending table
    #[serde(default = "default_true")]
    pub pause_after_table: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audit_enabled: true,
            interactive_chart: true,
            pause_after_table: true,
        }
    }
}

/// Changes requested from the command line; `None` leaves a field as is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub audit_enabled: Option<bool>,
    pub interactive_chart: Option<bool>,
    pub pause_after_table: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.audit_enabled.is_none()
            && self.interactive_chart.is_none()
            && self.pause_after_table.is_none()
    }
}

impl Settings {
    /// Apply the fields set in `update`
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(value) = update.audit_enabled {
            self.audit_enabled = value;
        }
        if let Some(value) = update.interactive_chart {
            self.interactive_chart = value;
        }
        if let Some(value) = update.pause_after_table {
            self.pause_after_table = value;
        }
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_base_dir()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TrackerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
