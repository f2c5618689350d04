//! Expense ledger service
//!
//! Appends expenses to the live ledger. Every addition is followed by a
//! budget check.

use crate::audit::EntityType;
use crate::error::TrackerResult;
use crate::models::{Amount, Expense};
use crate::storage::Storage;

use super::alert::{AlertService, BudgetAlert};

/// Result of adding an expense
#[derive(Debug, Clone)]
pub struct ExpenseAdded {
    pub expense: Expense,
    /// Budgets exceeded once the expense was recorded
    pub alerts: Vec<BudgetAlert>,
}

impl ExpenseAdded {
    /// Confirmation line shown to the user
    pub fn confirmation(&self) -> String {
        format!(
            "Expense Added: {} - {} on {}",
            self.expense.category, self.expense.amount, self.expense.date
        )
    }
}

/// Service for the expense ledger
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append an expense and run the budget check
    ///
    /// The date and category are stored as given; the amount has already been
    /// parsed at the prompt.
    pub fn add_expense(
        &self,
        date: &str,
        category: &str,
        amount: Amount,
    ) -> TrackerResult<ExpenseAdded> {
        let mut document = self.storage.load()?;

        let expense = Expense::new(date, category, amount);
        document.expenses.push(expense.clone());
        self.storage.save(&document)?;

        self.storage.log_create(
            EntityType::Expense,
            document.expenses.len().to_string(),
            &expense,
        )?;

        let alerts = AlertService::new(self.storage).check_budget()?;

        Ok(ExpenseAdded { expense, alerts })
    }

    /// All expenses in the live ledger, in insertion order
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        Ok(self.storage.load()?.expenses)
    }
}
