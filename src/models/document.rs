//! The persisted document
//!
//! One document holds the entire state of an installation.

use serde::{Deserialize, Serialize};

use super::budget::BudgetRegistry;
use super::expense::Expense;

/// All persisted state: the live ledger and the budget registry
///
/// Both keys are always written, even when empty. A key missing from the
/// file is read back as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub budgets: BudgetRegistry,
}

impl Document {
    /// The empty document written on first run and after a reset
    pub fn empty() -> Self {
        Self::default()
    }
}
