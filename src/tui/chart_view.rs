//! Pie chart view
//!
//! Draws a `PieChart` on a braille canvas with a legend beside it. One wedge
//! is always highlighted; arrow keys or the mouse pointer move the highlight
//! and the footer shows that wedge's amount and share.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, List, ListItem, ListState, Paragraph,
    },
    Frame,
};

use crate::reports::PieChart;

const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Red,
    Color::LightCyan,
    Color::LightGreen,
];

/// Color of the wedge at `idx`
pub fn wedge_color(idx: usize) -> Color {
    PALETTE[idx % PALETTE.len()]
}

/// What the event loop should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartAction {
    Continue,
    Close,
}

/// State of an open chart
pub struct ChartView<'a> {
    chart: &'a PieChart,
    selected: usize,
    /// Inner area of the canvas from the last draw, for mouse hit-testing
    canvas_area: Option<Rect>,
}

impl<'a> ChartView<'a> {
    pub fn new(chart: &'a PieChart) -> Self {
        Self {
            chart,
            selected: 0,
            canvas_area: None,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ChartAction {
        if key.kind != KeyEventKind::Press {
            return ChartAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => ChartAction::Close,
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.select_previous();
                ChartAction::Continue
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.select_next();
                ChartAction::Continue
            }
            _ => ChartAction::Continue,
        }
    }

    /// Highlight the wedge under the mouse pointer
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Down(_)
        ) {
            return;
        }

        let Some(area) = self.canvas_area else {
            return;
        };
        if area.width == 0
            || area.height == 0
            || mouse.column < area.x
            || mouse.row < area.y
            || mouse.column >= area.x + area.width
            || mouse.row >= area.y + area.height
        {
            return;
        }

        let (x_bounds, y_bounds) = canvas_bounds(area);
        let col = f64::from(mouse.column - area.x) + 0.5;
        let row = f64::from(mouse.row - area.y) + 0.5;
        let x = x_bounds[0] + col / f64::from(area.width) * (x_bounds[1] - x_bounds[0]);
        let y = y_bounds[1] - row / f64::from(area.height) * (y_bounds[1] - y_bounds[0]);

        if let Some(idx) = self.chart.wedge_at_point(x, y) {
            self.selected = idx;
        }
    }

    fn select_next(&mut self) {
        let count = self.chart.wedges.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    fn select_previous(&mut self) {
        let count = self.chart.wedges.len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let outer = Block::default()
            .title(format!(" {} ", self.chart.title))
            .borders(Borders::ALL);
        let inner = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(inner);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[0]);

        self.render_pie(frame, columns[0]);
        self.render_legend(frame, columns[1]);
        self.render_footer(frame, rows[1]);
    }

    fn render_pie(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        self.canvas_area = Some(inner);

        let (x_bounds, y_bounds) = canvas_bounds(inner);
        let buckets = self.sample_wedges(inner, x_bounds, y_bounds);
        let highlight = self.chart.wedges.get(self.selected).cloned();

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                for (idx, coords) in buckets.iter().enumerate() {
                    ctx.draw(&Points {
                        coords,
                        color: wedge_color(idx),
                    });
                }
                if let Some(wedge) = &highlight {
                    for angle in [wedge.start_angle, wedge.start_angle + wedge.sweep] {
                        let radians = angle.to_radians();
                        ctx.draw(&CanvasLine {
                            x1: 0.0,
                            y1: 0.0,
                            x2: radians.cos(),
                            y2: radians.sin(),
                            color: Color::White,
                        });
                    }
                }
            });

        frame.render_widget(canvas, area);
    }

    /// Braille dot coordinates inside the unit circle, grouped by wedge
    fn sample_wedges(&self, area: Rect, x_bounds: [f64; 2], y_bounds: [f64; 2]) -> Vec<Vec<(f64, f64)>> {
        let mut buckets = vec![Vec::new(); self.chart.wedges.len()];
        let dots_x = usize::from(area.width) * 2;
        let dots_y = usize::from(area.height) * 4;
        if dots_x == 0 || dots_y == 0 {
            return buckets;
        }

        let step_x = (x_bounds[1] - x_bounds[0]) / dots_x as f64;
        let step_y = (y_bounds[1] - y_bounds[0]) / dots_y as f64;

        for ix in 0..dots_x {
            let x = x_bounds[0] + (ix as f64 + 0.5) * step_x;
            for iy in 0..dots_y {
                let y = y_bounds[0] + (iy as f64 + 0.5) * step_y;
                if let Some(idx) = self.chart.wedge_at_point(x, y) {
                    buckets[idx].push((x, y));
                }
            }
        }

        buckets
    }

    fn render_legend(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .chart
            .wedges
            .iter()
            .enumerate()
            .map(|(idx, wedge)| {
                ListItem::new(Line::from(vec![
                    Span::styled("■ ", Style::default().fg(wedge_color(idx))),
                    Span::raw(wedge.label()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title(" Categories ").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let detail = match self.chart.wedges.get(self.selected) {
            Some(wedge) => format!(
                "{}: {} ({:.1}% of {})",
                wedge.category, wedge.amount, wedge.percentage, self.chart.total
            ),
            None => String::new(),
        };

        let footer = Paragraph::new(vec![
            Line::from(detail),
            Line::from(Span::styled(
                "←/→ select  q/Esc/Enter close",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(footer, area);
    }
}

/// Canvas bounds that keep the pie round
///
/// Terminal cells are roughly twice as tall as they are wide.
pub fn canvas_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let width = f64::from(area.width.max(1));
    let height = f64::from(area.height.max(1)) * 2.0;

    if width >= height {
        let half = width / height;
        ([-half, half], [-1.0, 1.0])
    } else {
        let half = height / width;
        ([-1.0, 1.0], [-half, half])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Expense};
    use crate::reports::CategoryBreakdown;
    use crossterm::event::{KeyModifiers, MouseButton};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn chart() -> PieChart {
        let expenses = vec![
            Expense::new("2024-01-01", "Food", Amount::new(50.0)),
            Expense::new("2024-01-02", "Rent", Amount::new(50.0)),
        ];
        PieChart::from_breakdown("Current Expenses", &CategoryBreakdown::from_expenses(&expenses))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_close_keys() {
        let chart = chart();
        let mut view = ChartView::new(&chart);

        assert_eq!(view.handle_key(key(KeyCode::Char('q'))), ChartAction::Close);
        assert_eq!(view.handle_key(key(KeyCode::Esc)), ChartAction::Close);
        assert_eq!(view.handle_key(key(KeyCode::Enter)), ChartAction::Close);
        assert_eq!(view.handle_key(key(KeyCode::Char('x'))), ChartAction::Continue);
    }

    #[test]
    fn test_selection_wraps() {
        let chart = chart();
        let mut view = ChartView::new(&chart);

        view.handle_key(key(KeyCode::Right));
        assert_eq!(view.selected(), 1);
        view.handle_key(key(KeyCode::Right));
        assert_eq!(view.selected(), 0);
        view.handle_key(key(KeyCode::Left));
        assert_eq!(view.selected(), 1);
    }

    #[test]
    fn test_render_shows_title_and_labels() {
        let chart = chart();
        let mut view = ChartView::new(&chart);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|frame| view.render(frame)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Current Expenses"));
        assert!(text.contains("Food 50.0%"));
        assert!(text.contains("Rent 50.0%"));
    }

    #[test]
    fn test_mouse_hover_selects_wedge() {
        let chart = chart();
        let mut view = ChartView::new(&chart);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| view.render(frame)).unwrap();

        let area = view.canvas_area.unwrap();
        let center_col = area.x + area.width / 2;
        let center_row = area.y + area.height / 2;

        // Right of center is the second wedge (counterclockwise from the top)
        view.handle_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: center_col + 3,
            row: center_row,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(view.selected(), 1);

        view.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: center_col - 3,
            row: center_row,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(view.selected(), 0);
    }

    #[test]
    fn test_canvas_bounds_keep_aspect() {
        let (x, y) = canvas_bounds(Rect::new(0, 0, 40, 10));
        assert_eq!(x, [-2.0, 2.0]);
        assert_eq!(y, [-1.0, 1.0]);

        let (x, y) = canvas_bounds(Rect::new(0, 0, 10, 10));
        assert_eq!(x, [-1.0, 1.0]);
        assert_eq!(y, [-2.0, 2.0]);
    }
}
