//! Report selection
//!
//! Reports run over either the live ledger or a budget picked from the
//! registry. A selection carries everything the chart and table need.

use super::table::BudgetLabel;
use crate::models::{Budget, Document, Expense};

/// The expenses a report runs over, with their title and header
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSelection {
    pub title: String,
    pub expenses: Vec<Expense>,
    pub budget: BudgetLabel,
    /// Shown by the chart when `expenses` is empty
    pub empty_message: String,
}

impl ReportSelection {
    /// The live ledger
    pub fn current(document: &Document) -> Self {
        Self {
            title: "Current Expenses".to_string(),
            expenses: document.expenses.clone(),
            budget: BudgetLabel::NotApplicable,
            empty_message: "No current expenses to analyze.".to_string(),
        }
    }

    /// A budget's own expense list
    pub fn historical(name: &str, budget: &Budget) -> Self {
        Self {
            title: format!("Expenses for Budget '{}'", name),
            expenses: budget.expenses.clone(),
            budget: BudgetLabel::Amount(budget.amount),
            empty_message: format!("No expenses recorded under the budget '{}'.", name),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
