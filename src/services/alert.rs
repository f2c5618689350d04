//! Budget alerting
//!
//! Compares the live ledger total against every registered budget.

use crate::error::TrackerResult;
use crate::models::{total_of, Amount, Document};
use crate::storage::Storage;

/// A budget whose amount is below the ledger total
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub budget_name: String,
    pub budget_amount: Amount,
    pub total_spent: Amount,
}

impl BudgetAlert {
    /// Message shown to the user
    pub fn message(&self) -> String {
        format!(
            "❌ Alert: Total expenses exceeded the budget '{}'.",
            self.budget_name
        )
    }
}

/// Alerts for every budget strictly below the ledger total, in registry order
///
/// Only the live ledger is summed; a budget's own expense list is ignored.
pub fn exceeded_budgets(document: &Document) -> Vec<BudgetAlert> {
    let total = total_of(&document.expenses);

    document
        .budgets
        .iter()
        .filter(|(_, budget)| budget.amount < total)
        .map(|(name, budget)| BudgetAlert {
            budget_name: name.to_string(),
            budget_amount: budget.amount,
            total_spent: total,
        })
        .collect()
}

/// Service for budget checks against the stored document
pub struct AlertService<'a> {
    storage: &'a Storage,
}

impl<'a> AlertService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the document and check every budget against the ledger total
    pub fn check_budget(&self) -> TrackerResult<Vec<BudgetAlert>> {
        let document = self.storage.load()?;
        Ok(exceeded_budgets(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Expense};

    fn document(amounts: &[f64], budgets: &[(&str, f64)]) -> Document {
        let mut doc = Document::empty();
        for amount in amounts {
            doc.expenses
                .push(Expense::new("2024-01-01", "Food", Amount::new(*amount)));
        }
        for (name, amount) in budgets {
            doc.budgets.insert(*name, Budget::new(Amount::new(*amount)));
        }
        doc
    }

    #[test]
    fn test_alert_when_total_exceeds_budget() {
        let doc = document(&[50.0, 30.0], &[("Groceries", 70.0)]);

        let alerts = exceeded_budgets(&doc);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].budget_name, "Groceries");
        assert_eq!(alerts[0].total_spent, Amount::new(80.0));
        assert_eq!(
            alerts[0].message(),
            "❌ Alert: Total expenses exceeded the budget 'Groceries'."
        );
    }

    #[test]
    fn test_no_alert_under_budget() {
        let doc = document(&[50.0, 30.0], &[("Groceries", 90.0)]);
        assert!(exceeded_budgets(&doc).is_empty());
    }

    #[test]
    fn test_equal_total_is_not_exceeded() {
        let doc = document(&[50.0, 30.0], &[("Exact", 80.0)]);
        assert!(exceeded_budgets(&doc).is_empty());
    }

    #[test]
    fn test_every_exceeded_budget_reported_in_order() {
        let doc = document(&[100.0], &[("Small", 10.0), ("Large", 1000.0), ("Medium", 99.0)]);

        let names: Vec<_> = exceeded_budgets(&doc)
            .into_iter()
            .map(|a| a.budget_name)
            .collect();

        assert_eq!(names, vec!["Small", "Medium"]);
    }

    #[test]
    fn test_nested_budget_expenses_are_ignored() {
        let mut doc = document(&[10.0], &[]);
        let mut budget = Budget::new(Amount::new(20.0));
        budget
            .expenses
            .push(Expense::new("2024-01-01", "Food", Amount::new(500.0)));
        doc.budgets.insert("Padded", budget);

        assert!(exceeded_budgets(&doc).is_empty());
    }

    #[test]
    fn test_empty_ledger_against_negative_budget() {
        let doc = document(&[], &[("Negative", -1.0)]);
        assert_eq!(exceeded_budgets(&doc).len(), 1);
    }
}
