//! Reports
//!
//! - `breakdown`: totals per category
//! - `chart`: pie chart geometry built from a breakdown
//! - `table`: plain-text expense listing
//! - `selection`: live ledger or a chosen budget as report input

pub mod breakdown;
pub mod chart;
pub mod selection;
pub mod table;

pub use breakdown::{CategoryBreakdown, CategoryTotal};
pub use chart::{PieChart, Wedge};
pub use selection::ReportSelection;
pub use table::{BudgetLabel, SpendingTable};
