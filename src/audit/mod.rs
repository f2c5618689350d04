//! Audit logging for the expense tracker
//!
//! Records every change to the document in an append-only, line-delimited
//! JSON log (`audit.log`).
//!
//! - `AuditEntry`: timestamp, operation, entity and optional after-value.
//! - `AuditLogger`: appends entries and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Expense, "1", &expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
