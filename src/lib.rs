//! Expense Tracker - terminal-based personal expense tracker
//!
//! Records dated, categorized expenses, keeps named budgets, warns when the
//! running total goes over a budget, and shows category breakdowns as a pie
//! chart or a plain table. All state lives in one JSON document.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, budgets and the persisted document
//! - `storage`: JSON document store with atomic writes
//! - `audit`: Append-only audit log
//! - `services`: Ledger, budget registry and budget alerting
//! - `reports`: Category breakdown, pie chart model and spending table
//! - `tui`: Terminal chart view
//! - `cli`: Interactive menu shell and subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::models::Amount;
//! use expense_tracker::services::LedgerService;
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::resolve(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let added = LedgerService::new(&storage).add_expense("2024-01-01", "Food", Amount::new(50.0))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
