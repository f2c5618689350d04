//! Service layer for the expense tracker
//!
//! Services sit on top of the storage layer. Each call performs its own full
//! load-modify-save cycle and returns plain values; printing is left to the
//! shell.

pub mod alert;
pub mod budget;
pub mod ledger;

pub use alert::{exceeded_budgets, AlertService, BudgetAlert};
pub use budget::{select_budget, BudgetService};
pub use ledger::{ExpenseAdded, LedgerService};
