//! Category breakdown
//!
//! Sums expenses per category. Categories keep the order in which they first
//! appear so output is deterministic.

use crate::models::{Amount, Expense};

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
    /// Number of expenses counted in this bucket
    pub count: usize,
}

/// Per-category totals plus the grand total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub categories: Vec<CategoryTotal>,
    pub total: Amount,
}

impl CategoryBreakdown {
    /// Aggregate a set of expenses by category
    ///
    /// Category names are compared exactly; "Food" and "food" are separate
    /// buckets.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut categories: Vec<CategoryTotal> = Vec::new();
        let mut total = Amount::zero();

        for expense in expenses {
            total += expense.amount;
            match categories
                .iter_mut()
                .find(|c| c.category == expense.category)
            {
                Some(bucket) => {
                    bucket.total += expense.amount;
                    bucket.count += 1;
                }
                None => categories.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                    count: 1,
                }),
            }
        }

        Self { categories, total }
    }

    /// Total for a category, if any expense used it
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Format the breakdown as plain text lines
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Total Expenses: {}\n", self.total));
        output.push_str("Expenses by Category:\n");

        let name_width = self
            .categories
            .iter()
            .map(|c| c.category.chars().count())
            .max()
            .unwrap_or(8)
            .max(8);

        for category in &self.categories {
            output.push_str(&format!(
                "  {:<width$}  {:>12}  ({} {})\n",
                category.category,
                category.total.to_string(),
                category.count,
                if category.count == 1 { "expense" } else { "expenses" },
                width = name_width
            ));
        }

        output
    }
}
