//! Menu commands
//!
//! Menu choices typed by the user are parsed into these enums once; the shell
//! dispatches on the enum and never compares raw strings.

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddExpense,
    SetBudget,
    AnalyzeExpenses,
    DisplayTable,
    Exit,
}

impl MenuCommand {
    /// All entries in menu order
    pub const ALL: [MenuCommand; 5] = [
        MenuCommand::AddExpense,
        MenuCommand::SetBudget,
        MenuCommand::AnalyzeExpenses,
        MenuCommand::DisplayTable,
        MenuCommand::Exit,
    ];

    /// Parse a menu number ("1" to "5")
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::SetBudget),
            "3" => Some(Self::AnalyzeExpenses),
            "4" => Some(Self::DisplayTable),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::SetBudget => "Set Budget",
            Self::AnalyzeExpenses => "Analyze Expenses",
            Self::DisplayTable => "Display Spending Table",
            Self::Exit => "Exit",
        }
    }
}

/// Sub-menu choice for reports: the live ledger or a past budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    Current,
    Historical,
}

impl ReportScope {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Current),
            "2" => Some(Self::Historical),
            _ => None,
        }
    }
}
