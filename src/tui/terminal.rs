//! Terminal setup and teardown
//!
//! Enters the alternate screen for the chart view and restores the terminal
//! afterwards, including when the process panics.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::Once;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::PieChart;

use super::chart_view::{ChartAction, ChartView};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

fn terminal_error(err: io::Error) -> TrackerError {
    TrackerError::Terminal(err.to_string())
}

/// Initialize the terminal for drawing
pub fn init_terminal() -> TrackerResult<Tui> {
    // Charts open many times per session; install the hook only once
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal_impl();
            original_hook(panic_info);
        }));
    });

    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    enter_screen(&mut stdout, disable_raw_mode).map_err(terminal_error)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|err| {
        let _ = restore_terminal_impl();
        terminal_error(err)
    })
}

/// Switch to the alternate screen with mouse capture
///
/// Raw mode is already on here; on failure it is turned off again with
/// `leave_raw_mode` before the error is returned.
fn enter_screen<W: Write>(out: &mut W, leave_raw_mode: fn() -> io::Result<()>) -> io::Result<()> {
    if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
        let _ = leave_raw_mode();
        return Err(err);
    }
    Ok(())
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> TrackerResult<()> {
    restore_terminal_impl().map_err(terminal_error)
}

fn restore_terminal_impl() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Show a chart until the user closes it
pub fn run_chart(chart: &PieChart) -> TrackerResult<()> {
    let mut terminal = init_terminal()?;
    let result = chart_loop(&mut terminal, chart);
    // Restore even if drawing failed, then report the first error
    let restored = restore_terminal();
    result.and(restored)
}

fn chart_loop(terminal: &mut Tui, chart: &PieChart) -> TrackerResult<()> {
    let mut view = ChartView::new(chart);

    loop {
        terminal
            .draw(|frame| view.render(frame))
            .map_err(terminal_error)?;

        match event::read().map_err(terminal_error)? {
            Event::Key(key) => {
                if view.handle_key(key) == ChartAction::Close {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => view.handle_mouse(mouse),
            // Resize and anything else just redraws
            _ => {}
        }
    }
}
