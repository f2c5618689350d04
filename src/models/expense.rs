//! Expense model
//!
//! A single dated, categorized expense. Expenses are never edited or removed
//! once written.

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// A recorded expense
///
/// `date` is free-form text (nominally `YYYY-MM-DD`) and is never validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: String,
    pub category: String,
    pub amount: Amount,
}

impl Expense {
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: Amount) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
        }
    }
}

/// Sum the amounts of a set of expenses
pub fn total_of(expenses: &[Expense]) -> Amount {
    expenses.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_field_names() {
        let expense = Expense::new("2024-01-01", "Food", Amount::new(50.0));
        let json = serde_json::to_value(&expense).unwrap();

        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["category"], "Food");
        assert_eq!(json["amount"], 50.0);
    }

    #[test]
    fn test_total_of() {
        let expenses = vec![
            Expense::new("2024-01-01", "Food", Amount::new(50.0)),
            Expense::new("2024-01-02", "Rent", Amount::new(-10.0)),
        ];
        assert_eq!(total_of(&expenses), Amount::new(40.0));
        assert_eq!(total_of(&[]), Amount::zero());
    }

    #[test]
    fn test_free_form_date_accepted() {
        let expense = Expense::new("yesterday", "", Amount::new(1.0));
        assert_eq!(expense.date, "yesterday");
        assert!(expense.category.is_empty());
    }
}
