//! Core data models for the expense tracker
//!
//! This module contains the data structures that make up the persisted
//! document: expenses, budgets and the document itself.

pub mod amount;
pub mod budget;
pub mod document;
pub mod expense;

pub use amount::Amount;
pub use budget::{Budget, BudgetRegistry};
pub use document::Document;
pub use expense::{total_of, Expense};
