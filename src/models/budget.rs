//! Budget models
//!
//! A budget is a named target amount. Budgets live in a registry keyed by
//! name that remembers insertion order, so "budget #2" means the same budget
//! across runs.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::amount::Amount;
use super::expense::Expense;

/// A named budget's stored value
///
/// `expenses` is always written empty and nothing fills it; totals are
/// compared against the live ledger instead. The field is kept so existing
/// data files keep their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: Amount,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Budget {
    pub fn new(amount: Amount) -> Self {
        Self {
            amount,
            expenses: Vec::new(),
        }
    }
}

/// Insertion-ordered mapping of budget name to budget
///
/// Serialized as a JSON object. Setting an existing name replaces the value
/// in place and keeps its position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BudgetRegistry {
    entries: Vec<(String, Budget)>,
}

impl BudgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a budget, returning the previous value for that name
    pub fn insert(&mut self, name: impl Into<String>, budget: Budget) -> Option<Budget> {
        let name = name.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(existing, budget));
        }
        self.entries.push((name, budget));
        None
    }

    pub fn get(&self, name: &str) -> Option<&Budget> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, budget)| budget)
    }

    /// Look up a budget by its 1-based position
    pub fn get_by_position(&self, position: usize) -> Option<(&str, &Budget)> {
        position
            .checked_sub(1)
            .and_then(|idx| self.entries.get(idx))
            .map(|(name, budget)| (name.as_str(), budget))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Budget)> {
        self.entries.iter().map(|(name, budget)| (name.as_str(), budget))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for BudgetRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, budget) in &self.entries {
            map.serialize_entry(name, budget)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BudgetRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RegistryVisitor;

        impl<'de> Visitor<'de> for RegistryVisitor {
            type Value = BudgetRegistry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of budget names to budgets")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut registry = BudgetRegistry::new();
                while let Some((name, budget)) = access.next_entry::<String, Budget>()? {
                    // Duplicate keys in the file: last one wins, like a JSON object
                    registry.insert(name, budget);
                }
                Ok(registry)
            }
        }

        deserializer.deserialize_map(RegistryVisitor)
    }
}
