//! Budget registry service
//!
//! Creates or replaces named budgets and resolves budget selections made by
//! position in the menu.

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Budget, Document};
use crate::storage::Storage;

/// Service for named budgets
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set a budget, replacing any budget already stored under `name`
    ///
    /// The replacement starts with an empty expense list.
    pub fn set_budget(&self, name: &str, amount: Amount) -> TrackerResult<Budget> {
        let mut document = self.storage.load()?;

        let budget = Budget::new(amount);
        let previous = document.budgets.insert(name, budget.clone());
        self.storage.save(&document)?;

        match previous {
            Some(before) => {
                self.storage
                    .log_update(EntityType::Budget, name, &before, &budget)?
            }
            None => self.storage.log_create(EntityType::Budget, name, &budget)?,
        }

        Ok(budget)
    }

    /// Budget names in insertion order
    pub fn budget_names(&self) -> TrackerResult<Vec<String>> {
        let document = self.storage.load()?;
        Ok(document.budgets.names().map(str::to_string).collect())
    }
}

/// Resolve a 1-based budget number typed at the prompt
///
/// Non-numeric text and positions outside the registry are both invalid
/// selections.
pub fn select_budget<'d>(
    document: &'d Document,
    input: &str,
) -> TrackerResult<(&'d str, &'d Budget)> {
    let trimmed = input.trim();
    let position: usize = trimmed
        .parse()
        .map_err(|_| TrackerError::InvalidSelection(trimmed.to_string()))?;

    document
        .budgets
        .get_by_position(position)
        .ok_or_else(|| TrackerError::InvalidSelection(trimmed.to_string()))
}
