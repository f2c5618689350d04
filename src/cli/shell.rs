//! Interactive shell
//!
//! A numbered menu read from stdin. Each menu command runs one full
//! load-modify-save cycle through the services and then returns to the menu.
//! Bad numbers (amounts, menu choices, budget numbers) print a message and
//! return to the menu without touching the data file; any other error ends
//! the session.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::{Amount, Document};
use crate::reports::{CategoryBreakdown, PieChart, ReportSelection, SpendingTable};
use crate::services::{select_budget, BudgetService, LedgerService};
use crate::storage::Storage;
use crate::tui::{ChartPresenter, TerminalChart, TextChart};

use super::input::prompt_line;
use super::menu::{MenuCommand, ReportScope};

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The menu loop over an input and output stream
pub struct Shell<'a, R, W, C> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
    charts: C,
}

impl<'a, R, W, C> Shell<'a, R, W, C>
where
    R: BufRead,
    W: Write,
    C: ChartPresenter,
{
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W, charts: C) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
            charts,
        }
    }

    /// Run the menu until Exit or end of input
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("\nChoose an option (1-5): ")? else {
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(());
            };

            let flow = match MenuCommand::from_choice(&choice) {
                Some(command) => self.dispatch(command)?,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, command: MenuCommand) -> TrackerResult<Flow> {
        match command {
            MenuCommand::AddExpense => self.add_expense()?,
            MenuCommand::SetBudget => self.set_budget()?,
            MenuCommand::AnalyzeExpenses => self.analyze_expenses()?,
            MenuCommand::DisplayTable => self.display_table()?,
            MenuCommand::Exit => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        writeln!(self.output, "\n{}", "=".repeat(50))?;
        writeln!(self.output, "     PERSONAL EXPENSE TRACKER")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        for (idx, command) in MenuCommand::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, command.label())?;
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        prompt_line(&mut self.input, &mut self.output, prompt)
    }

    fn add_expense(&mut self) -> TrackerResult<()> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(());
        };
        let Some(amount_text) = self.prompt("Enter amount: ")? else {
            return Ok(());
        };

        // One bad amount abandons this expense; there is no re-prompt
        let Ok(amount) = Amount::parse(&amount_text) else {
            writeln!(self.output, "Invalid amount. Please try again.")?;
            return Ok(());
        };

        let added = LedgerService::new(self.storage).add_expense(&date, &category, amount)?;
        writeln!(self.output, "\n{}", added.confirmation())?;
        for alert in &added.alerts {
            writeln!(self.output, "{}", alert.message())?;
        }
        Ok(())
    }

    fn set_budget(&mut self) -> TrackerResult<()> {
        let Some(name) = self.prompt("Enter a name for this budget: ")? else {
            return Ok(());
        };
        let Some(amount_text) = self.prompt("Enter your budget amount: ")? else {
            return Ok(());
        };

        if name.is_empty() {
            writeln!(self.output, "Budget name cannot be empty.")?;
            return Ok(());
        }
        let Ok(amount) = Amount::parse(&amount_text) else {
            writeln!(self.output, "Invalid budget amount. Please try again.")?;
            return Ok(());
        };

        let budget = BudgetService::new(self.storage).set_budget(&name, amount)?;
        writeln!(self.output, "\nBudget '{}' set to {}", name, budget.amount)?;
        Ok(())
    }

    fn analyze_expenses(&mut self) -> TrackerResult<()> {
        let document = self.storage.load()?;

        writeln!(self.output, "\n1. Current Table Analysis")?;
        writeln!(self.output, "2. Old Table Analysis")?;
        let Some(choice) = self.prompt("Choose an option (1/2): ")? else {
            return Ok(());
        };

        let selection = match ReportScope::from_choice(&choice) {
            Some(ReportScope::Current) => ReportSelection::current(&document),
            Some(ReportScope::Historical) => {
                match self.pick_budget(&document, "No old budgets available for analysis.")? {
                    Some(selection) => selection,
                    None => return Ok(()),
                }
            }
            None => {
                writeln!(self.output, "Invalid choice. Returning to menu.")?;
                return Ok(());
            }
        };

        self.render_chart(&selection)
    }

    fn render_chart(&mut self, selection: &ReportSelection) -> TrackerResult<()> {
        if selection.is_empty() {
            writeln!(self.output, "{}", selection.empty_message)?;
            return Ok(());
        }

        let breakdown = CategoryBreakdown::from_expenses(&selection.expenses);
        write!(self.output, "\n{}", breakdown.format_terminal())?;

        let chart = PieChart::from_breakdown(selection.title.clone(), &breakdown);
        if chart.is_overflowed() {
            writeln!(self.output, "Nothing to chart: the total is too large to draw.")?;
            return Ok(());
        }
        if !chart.is_drawable() {
            writeln!(self.output, "Nothing to chart: no category has a positive total.")?;
            return Ok(());
        }

        self.charts.present(&chart, &mut self.output)
    }

    fn display_table(&mut self) -> TrackerResult<()> {
        writeln!(self.output, "1. Current Spending Table")?;
        writeln!(self.output, "2. Old Spending Table")?;
        let Some(choice) = self.prompt("Choose option (1/2): ")? else {
            return Ok(());
        };

        let document = self.storage.load()?;
        let selection = match ReportScope::from_choice(&choice) {
            Some(ReportScope::Current) => {
                writeln!(self.output, "\nCurrent Spending Table")?;
                ReportSelection::current(&document)
            }
            Some(ReportScope::Historical) => {
                match self.pick_budget(&document, "No old budgets available to display.")? {
                    Some(selection) => selection,
                    None => return Ok(()),
                }
            }
            None => {
                writeln!(self.output, "Invalid option. Returning to menu.")?;
                return Ok(());
            }
        };

        let table = SpendingTable::new(selection.budget, &selection.expenses);
        let Some(rendered) = table.render() else {
            writeln!(self.output, "No expenses to display.")?;
            return Ok(());
        };

        writeln!(self.output, "\n{}", rendered)?;
        if self.settings.pause_after_table {
            self.prompt("\nPress Enter to return to the menu.")?;
        }
        Ok(())
    }

    /// List budgets and read a 1-based choice
    ///
    /// Returns `None`, after telling the user why, when there are no budgets
    /// or the choice is invalid.
    fn pick_budget(
        &mut self,
        document: &Document,
        none_message: &str,
    ) -> TrackerResult<Option<ReportSelection>> {
        if document.budgets.is_empty() {
            writeln!(self.output, "{}", none_message)?;
            return Ok(None);
        }

        writeln!(self.output, "\nAvailable Budgets:")?;
        for (idx, name) in document.budgets.names().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, name)?;
        }

        let Some(choice) = self.prompt("Select a budget by number: ")? else {
            return Ok(None);
        };

        match select_budget(document, &choice) {
            Ok((name, budget)) => Ok(Some(ReportSelection::historical(name, budget))),
            Err(err) if err.is_input_error() => {
                writeln!(self.output, "Invalid selection. Returning to menu.")?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Consume the shell and hand back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Run the shell on the process's stdin and stdout
///
/// Charts open in the terminal view when stdout is a terminal and the
/// setting allows it; otherwise they are printed.
pub fn run_interactive(storage: &Storage, settings: &Settings) -> TrackerResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let charts: Box<dyn ChartPresenter> = if settings.interactive_chart && stdout.is_terminal() {
        Box::new(TerminalChart)
    } else {
        Box::new(TextChart)
    };

    Shell::new(storage, settings, stdin.lock(), stdout, charts).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::{Budget, Expense};
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Records charts instead of drawing them
    #[derive(Default)]
    struct RecordingCharts {
        shown: Vec<PieChart>,
    }

    impl ChartPresenter for &mut RecordingCharts {
        fn present(&mut self, chart: &PieChart, _out: &mut dyn Write) -> TrackerResult<()> {
            self.shown.push(chart.clone());
            Ok(())
        }
    }

    fn create_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (storage, temp_dir)
    }

    fn run_script(storage: &Storage, script: &str, charts: &mut RecordingCharts) -> String {
        let settings = Settings::default();
        let mut shell = Shell::new(storage, &settings, Cursor::new(script.to_string()), Vec::new(), charts);
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    fn run(storage: &Storage, script: &str) -> String {
        let mut charts = RecordingCharts::default();
        run_script(storage, script, &mut charts)
    }

    #[test]
    fn test_exit() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "5\n");

        assert!(output.contains("PERSONAL EXPENSE TRACKER"));
        assert!(output.contains("1. Add Expense"));
        assert!(output.contains("5. Exit"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "");
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "9\n5\n");

        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(output.matches("PERSONAL EXPENSE TRACKER").count(), 2);
    }

    #[test]
    fn test_add_expense_and_alert() {
        let (storage, _temp) = create_storage();
        let output = run(
            &storage,
            "2\nGroceries\n70\n1\n2024-01-01\nFood\n50\n1\n2024-01-02\nFood\n30\n5\n",
        );

        assert!(output.contains("Budget 'Groceries' set to 70.00"));
        assert!(output.contains("Expense Added: Food - 50.00 on 2024-01-01"));
        assert!(output.contains("Expense Added: Food - 30.00 on 2024-01-02"));
        assert_eq!(output.matches("exceeded the budget 'Groceries'").count(), 1);

        let document = storage.load().unwrap();
        assert_eq!(document.expenses.len(), 2);
    }

    #[test]
    fn test_invalid_amount_adds_nothing() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "1\n2024-01-01\nFood\nfifty\n5\n");

        assert!(output.contains("Invalid amount. Please try again."));
        assert!(storage.load().unwrap().expenses.is_empty());
    }

    #[test]
    fn test_invalid_budget_amount_sets_nothing() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "2\nGroceries\nlots\n5\n");

        assert!(output.contains("Invalid budget amount. Please try again."));
        assert!(storage.load().unwrap().budgets.is_empty());
    }

    #[test]
    fn test_empty_budget_name_rejected() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "2\n\n100\n5\n");

        assert!(output.contains("Budget name cannot be empty."));
        assert!(storage.load().unwrap().budgets.is_empty());
    }

    #[test]
    fn test_analyze_current_presents_chart() {
        let (storage, _temp) = create_storage();
        let mut charts = RecordingCharts::default();
        let output = run_script(
            &storage,
            "1\n2024-01-01\nFood\n50\n1\n2024-01-02\nRent\n150\n3\n1\n5\n",
            &mut charts,
        );

        assert!(output.contains("Total Expenses: 200.00"));
        assert_eq!(charts.shown.len(), 1);
        let chart = &charts.shown[0];
        assert_eq!(chart.title, "Current Expenses");
        assert_eq!(chart.wedges[0].label(), "Food 25.0%");
        assert_eq!(chart.wedges[1].label(), "Rent 75.0%");
    }

    #[test]
    fn test_analyze_with_no_expenses() {
        let (storage, _temp) = create_storage();
        let mut charts = RecordingCharts::default();
        let output = run_script(&storage, "3\n1\n5\n", &mut charts);

        assert!(output.contains("No current expenses to analyze."));
        assert!(charts.shown.is_empty());
    }

    #[test]
    fn test_analyze_overflowing_total() {
        let (storage, _temp) = create_storage();
        let mut charts = RecordingCharts::default();
        let script = "1\n2024-01-01\nFood\n1e308\n1\n2024-01-02\nRent\n1e308\n3\n1\n5\n";
        let output = run_script(&storage, script, &mut charts);

        assert!(output.contains("Nothing to chart: the total is too large to draw."));
        assert!(!output.contains("NaN"));
        assert!(charts.shown.is_empty());
    }

    #[test]
    fn test_analyze_historical_without_budgets() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "3\n2\n5\n");
        assert!(output.contains("No old budgets available for analysis."));
    }

    #[test]
    fn test_analyze_historical_empty_budget() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "2\nGroceries\n70\n3\n2\n1\n5\n");

        assert!(output.contains("Available Budgets:\n1. Groceries"));
        assert!(output.contains("No expenses recorded under the budget 'Groceries'."));
    }

    #[test]
    fn test_analyze_historical_with_stored_expenses() {
        let (storage, _temp) = create_storage();
        let mut document = Document::empty();
        let mut budget = Budget::new(Amount::new(100.0));
        budget
            .expenses
            .push(Expense::new("2023-12-01", "Gifts", Amount::new(40.0)));
        document.budgets.insert("December", budget);
        storage.save(&document).unwrap();

        let mut charts = RecordingCharts::default();
        run_script(&storage, "3\n2\n1\n5\n", &mut charts);

        assert_eq!(charts.shown.len(), 1);
        assert_eq!(charts.shown[0].title, "Expenses for Budget 'December'");
    }

    #[test]
    fn test_invalid_budget_selection() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "2\nGroceries\n70\n3\n2\n7\n4\n2\nabc\n5\n");

        assert_eq!(output.matches("Invalid selection. Returning to menu.").count(), 2);
    }

    #[test]
    fn test_invalid_sub_menu_choices() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "3\n9\n4\n9\n5\n");

        assert!(output.contains("Invalid choice. Returning to menu."));
        assert!(output.contains("Invalid option. Returning to menu."));
    }

    #[test]
    fn test_display_current_table() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "1\n2024-01-01\nFood\n50\n4\n1\n\n5\n");

        assert!(output.contains("Current Spending Table"));
        assert!(output.contains("Budget: N/A"));
        assert!(output.contains("2024-01-01"));
        assert!(output.contains("Press Enter to return to the menu."));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_display_table_empty() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "4\n1\n5\n");

        assert!(output.contains("No expenses to display."));
        assert!(!output.contains("Press Enter"));
    }

    #[test]
    fn test_display_table_without_budgets() {
        let (storage, _temp) = create_storage();
        let output = run(&storage, "4\n2\n5\n");
        assert!(output.contains("No old budgets available to display."));
    }

    #[test]
    fn test_table_without_pause() {
        let (storage, _temp) = create_storage();
        LedgerService::new(&storage)
            .add_expense("2024-01-01", "Food", Amount::new(5.0))
            .unwrap();
        let settings = Settings {
            pause_after_table: false,
            ..Settings::default()
        };
        let mut charts = RecordingCharts::default();
        let mut shell = Shell::new(&storage, &settings, Cursor::new("4\n1\n5\n"), Vec::new(), &mut charts);
        shell.run().unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();

        assert!(output.contains("Budget: N/A"));
        assert!(!output.contains("Press Enter"));
        assert!(output.ends_with("Goodbye!\n"));
    }
}
