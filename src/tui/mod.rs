//! Chart presentation
//!
//! The shell hands finished `PieChart`s to a `ChartPresenter`. In a real
//! terminal the chart opens in a full-screen ratatui view; when output is
//! piped, or the user turned the view off, it is printed as text instead.

pub mod chart_view;
pub mod terminal;

use std::io::Write;

use crate::error::TrackerResult;
use crate::reports::PieChart;

pub use chart_view::{ChartAction, ChartView};
pub use terminal::run_chart;

/// Something that can show a pie chart to the user
pub trait ChartPresenter {
    /// Show the chart
    ///
    /// `out` is the shell's output stream, for presenters that print.
    fn present(&mut self, chart: &PieChart, out: &mut dyn Write) -> TrackerResult<()>;
}

impl<P: ChartPresenter + ?Sized> ChartPresenter for Box<P> {
    fn present(&mut self, chart: &PieChart, out: &mut dyn Write) -> TrackerResult<()> {
        (**self).present(chart, out)
    }
}

/// Prints the chart as a text legend
#[derive(Debug, Default)]
pub struct TextChart;

impl ChartPresenter for TextChart {
    fn present(&mut self, chart: &PieChart, out: &mut dyn Write) -> TrackerResult<()> {
        writeln!(out)?;
        write!(out, "{}", chart.format_text())?;
        Ok(())
    }
}

/// Opens the interactive chart view on the terminal
#[derive(Debug, Default)]
pub struct TerminalChart;

impl ChartPresenter for TerminalChart {
    fn present(&mut self, chart: &PieChart, out: &mut dyn Write) -> TrackerResult<()> {
        out.flush()?;
        run_chart(chart)
    }
}
