//! Storage layer for the expense tracker
//!
//! `Storage` is the only gateway to durable state. Every operation loads the
//! whole document, works on an owned copy and writes the whole document back;
//! no handle is held between calls.
//!
//! There is no locking. Two processes sharing a data file can lose updates
//! (the last full write wins).

pub mod file_io;

pub use file_io::{read_json, write_json_atomic, JsonFile};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::TrackerError;
use crate::models::Document;

/// Storage coordinator for the document, the history export and the audit log
pub struct Storage {
    paths: TrackerPaths,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths, settings: &Settings) -> Result<Self, TrackerError> {
        paths.ensure_base_dir()?;

        let audit = if settings.audit_enabled {
            AuditLogger::new(paths.audit_log())
        } else {
            AuditLogger::disabled(paths.audit_log())
        };

        Ok(Self { paths, audit })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load the document
    ///
    /// A missing file is created with the empty document. A file that does not
    /// parse is reported on stderr and overwritten with the empty document; no
    /// copy of the bad file is kept.
    pub fn load(&self) -> Result<Document, TrackerError> {
        let path = self.paths.data_file();

        match read_json::<Document, _>(&path)? {
            JsonFile::Parsed(document) => Ok(document),
            JsonFile::Missing => {
                let document = Document::empty();
                write_json_atomic(&path, &document)?;
                Ok(document)
            }
            JsonFile::Corrupt(reason) => {
                eprintln!("Error: The JSON file is corrupt. Resetting file.");
                let document = Document::empty();
                write_json_atomic(&path, &document)?;
                self.audit
                    .log(&AuditEntry::reset(path.display().to_string(), reason))?;
                Ok(document)
            }
        }
    }

    /// Overwrite the document on disk
    pub fn save(&self, document: &Document) -> Result<(), TrackerError> {
        write_json_atomic(self.paths.data_file(), document)
    }

    /// Write a snapshot of the document to the history file
    ///
    /// Nothing reads the history file back.
    pub fn save_history(&self, document: &Document) -> Result<(), TrackerError> {
        let path = self.paths.history_file();
        write_json_atomic(&path, document)?;
        self.audit.log(&AuditEntry::export(
            path.display().to_string(),
            document.expenses.len(),
            document.budgets.len(),
        ))
    }

    /// Record a created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Result<(), TrackerError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity))
    }

    /// Record a replaced entity in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
    ) -> Result<(), TrackerError> {
        self.audit
            .log(&AuditEntry::update(entity_type, entity_id, before, after))
    }
}
