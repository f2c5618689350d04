//! Path management for the expense tracker
//!
//! All files live side by side in a single base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or the `EXPENSE_TRACKER_DIR` environment variable
//! 2. The current working directory

use std::path::PathBuf;

use crate::error::TrackerError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all tracker files
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from an optional explicit directory
    ///
    /// Falls back to the current working directory, matching the fixed
    /// relative filenames the tracker has always used.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, TrackerError> {
        let base_dir = match explicit {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                TrackerError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// The document holding expenses and budgets
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("data.json")
    }

    /// Write-only snapshot of the document
    pub fn history_file(&self) -> PathBuf {
        self.base_dir.join("history.json")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_base_dir(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }
}
