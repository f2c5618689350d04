//! Spending table
//!
//! Plain-text listing of expenses with Date, Category and Amount columns.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Amount, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date.clone(),
            category: expense.category.clone(),
            amount: expense.amount.to_string(),
        }
    }
}

/// What the "Budget:" header shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetLabel {
    /// Live ledger, printed as "N/A"
    NotApplicable,
    Amount(Amount),
}

impl std::fmt::Display for BudgetLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetLabel::NotApplicable => write!(f, "N/A"),
            BudgetLabel::Amount(amount) => write!(f, "{}", amount),
        }
    }
}

/// A table of expenses under a budget header
#[derive(Debug, Clone)]
pub struct SpendingTable<'a> {
    pub budget: BudgetLabel,
    pub expenses: &'a [Expense],
}

impl<'a> SpendingTable<'a> {
    pub fn new(budget: BudgetLabel, expenses: &'a [Expense]) -> Self {
        Self { budget, expenses }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Render the header line and the table
    ///
    /// Returns `None` when there is nothing to list.
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let rows: Vec<ExpenseRow> = self.expenses.iter().map(ExpenseRow::from).collect();
        let mut table = Table::new(rows);
        table
            .with(Style::blank())
            .modify(Columns::last(), Alignment::right());

        Some(format!("Budget: {}\n\n{}", self.budget, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expenses() -> Vec<Expense> {
        vec![
            Expense::new("2024-01-01", "Food", Amount::new(50.0)),
            Expense::new("2024-01-02", "Entertainment", Amount::new(1234.5)),
        ]
    }

    #[test]
    fn test_budget_label_display() {
        assert_eq!(BudgetLabel::NotApplicable.to_string(), "N/A");
        assert_eq!(BudgetLabel::Amount(Amount::new(70.0)).to_string(), "70.00");
    }

    #[test]
    fn test_render_current() {
        let expenses = expenses();
        let output = SpendingTable::new(BudgetLabel::NotApplicable, &expenses)
            .render()
            .unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Budget: N/A");
        assert_eq!(lines[1], "");

        let header = lines[2];
        let date_col = header.find("Date").unwrap();
        let category_col = header.find("Category").unwrap();
        let amount_col = header.find("Amount").unwrap();
        assert!(date_col < category_col && category_col < amount_col);

        assert!(output.contains("2024-01-01"));
        assert!(output.contains("Entertainment"));
        assert!(output.contains("1234.50"));
        assert!(output.find("Food").unwrap() < output.find("Entertainment").unwrap());
    }

    #[test]
    fn test_render_historical_header() {
        let expenses = expenses();
        let output = SpendingTable::new(BudgetLabel::Amount(Amount::new(90.0)), &expenses)
            .render()
            .unwrap();

        assert!(output.starts_with("Budget: 90.00\n"));
    }

    #[test]
    fn test_empty_renders_nothing() {
        let table = SpendingTable::new(BudgetLabel::NotApplicable, &[]);
        assert!(table.is_empty());
        assert!(table.render().is_none());
    }
}
