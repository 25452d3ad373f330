//! Ratatui-based terminal UI.
//!
//! A sidebar holds the controls (date range, rolling window, raw-table toggle,
//! item selection); the main area shows the chart, the statistics table, the
//! optional raw table and the metric summary. Every redraw runs one render pass.

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::app::pipeline::{Dashboard, DashboardView};
use crate::chart::{ChartTheme, SeriesColor};
use crate::config::DashboardConfig;
use crate::domain::{MetricTable, RollingWindow, SummaryRow, TableView, ViewState};
use crate::error::AppError;
use crate::io::TableCache;
use crate::report::fmt_num;

mod plotters_chart;

use plotters_chart::PriceChartWidget;

/// Where `e` writes the chart.
pub const CHART_EXPORT_PATH: &str = "price_chart.svg";

/// Raw-table rows shown before the table is cut off.
const MAX_RAW_ROWS: usize = 12;

/// Start the TUI on an already loaded dashboard.
pub fn run(dashboard: Dashboard, cache: TableCache, config: DashboardConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(dashboard, cache, config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Sidebar controls in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Start,
    End,
    Window,
    Raw,
    Items,
}

impl Focus {
    const ORDER: [Focus; 5] = [Focus::Start, Focus::End, Focus::Window, Focus::Raw, Focus::Items];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// A date being typed into the start or end field.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DateEdit {
    field: Focus,
    input: String,
}

struct App {
    dashboard: Dashboard,
    cache: TableCache,
    config: DashboardConfig,
    state: ViewState,
    focus: Focus,
    /// Index into the alphabetical item list.
    item_cursor: usize,
    editing: Option<DateEdit>,
    status: String,
}

impl App {
    fn new(dashboard: Dashboard, cache: TableCache, config: DashboardConfig) -> Self {
        let state = dashboard.default_view();
        let status = format!(
            "{} rows, {} items loaded.",
            dashboard.table.len(),
            dashboard.table.items().len()
        );
        Self {
            dashboard,
            cache,
            config,
            state,
            focus: Focus::Start,
            item_cursor: 0,
            editing: None,
            status,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply one key press. Returns `true` to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing.is_some() {
            self.handle_date_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Left => self.adjust(-1),
            KeyCode::Right => self.adjust(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.reload(),
            KeyCode::Char('e') => self.export_chart(Path::new(CHART_EXPORT_PATH)),
            _ => {}
        }
        false
    }

    fn item_count(&self) -> usize {
        self.dashboard.table.items().len()
    }

    /// Inside the item list the arrows move the cursor; Up on the first item leaves it.
    fn move_up(&mut self) {
        if self.focus == Focus::Items && self.item_cursor > 0 {
            self.item_cursor -= 1;
        } else if self.focus != Focus::Start {
            self.focus = self.focus.prev();
        }
    }

    fn move_down(&mut self) {
        if self.focus == Focus::Items {
            if self.item_cursor + 1 < self.item_count() {
                self.item_cursor += 1;
            }
        } else {
            self.focus = self.focus.next();
        }
    }

    fn adjust(&mut self, delta: i32) {
        match self.focus {
            Focus::Window => {
                self.state.window = self.state.window.step(delta);
                self.status = format!("Rolling window: {} days", self.state.window.get());
            }
            Focus::Raw => self.toggle_raw(),
            _ => {}
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Start | Focus::End => {
                let current = if self.focus == Focus::Start {
                    self.state.range.start
                } else {
                    self.state.range.end
                };
                self.editing = Some(DateEdit {
                    field: self.focus,
                    input: current.to_string(),
                });
                self.status = "Editing date (YYYY-MM-DD). Enter to apply, Esc to cancel.".to_string();
            }
            Focus::Window => {}
            Focus::Raw => self.toggle_raw(),
            Focus::Items => self.toggle_item_at_cursor(),
        }
    }

    fn toggle_raw(&mut self) {
        self.state.show_raw = !self.state.show_raw;
        self.status = if self.state.show_raw {
            "Showing raw data.".to_string()
        } else {
            "Raw data hidden.".to_string()
        };
    }

    fn toggle_item_at_cursor(&mut self) {
        let Some(item) = self
            .dashboard
            .table
            .sorted_item_names()
            .get(self.item_cursor)
            .map(|s| s.to_string())
        else {
            return;
        };
        self.state.toggle_item(&item);
        self.status = format!("{} item(s) selected.", self.state.items.len());
    }

    fn handle_date_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing = None;
                self.status = "Date edit canceled.".to_string();
            }
            KeyCode::Enter => {
                if let Some(edit) = self.editing.take() {
                    self.apply_date_edit(edit);
                }
            }
            KeyCode::Backspace => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.input.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '/' => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.input.push(c);
                }
            }
            _ => {}
        }
    }

    fn apply_date_edit(&mut self, edit: DateEdit) {
        let trimmed = edit.input.trim();
        let Some(date) = crate::io::ingest::parse_date(trimmed) else {
            self.status = format!(
                "Invalid date '{trimmed}' (expected {}).",
                crate::io::ingest::DATE_FORMATS
            );
            return;
        };

        match edit.field {
            Focus::Start => self.state.range.start = date,
            _ => self.state.range.end = date,
        }
        self.status = if self.state.range.start > self.state.range.end {
            "Start date is after end date; no rows in range.".to_string()
        } else {
            format!("Date range: {} .. {}", self.state.range.start, self.state.range.end)
        };
    }

    /// Drop the cached table and load both files again.
    fn reload(&mut self) {
        self.cache.invalidate(&self.config.data_path);
        match Dashboard::load(&self.cache, &self.config.data_path, &self.config.metrics_path) {
            Ok(dashboard) => {
                let table = &dashboard.table;
                self.state.items.retain(|item| table.series(item).is_some());
                self.item_cursor = self.item_cursor.min(table.items().len().saturating_sub(1));
                self.status = format!("Reloaded: {} rows, {} items.", table.len(), table.items().len());
                self.dashboard = dashboard;
            }
            Err(err) => {
                tracing::warn!(error = %err, "reload failed");
                self.status = format!("Reload failed: {err}");
            }
        }
    }

    fn export_chart(&mut self, path: &Path) {
        let view = self.dashboard.render(&self.state);
        let Some(chart) = &view.chart else {
            self.status = "Nothing to export: no items selected.".to_string();
            return;
        };
        self.status = match crate::chart::write_svg(path, chart, crate::chart::svg::DEFAULT_SIZE) {
            Ok(()) => format!("Wrote chart: {}", path.display()),
            Err(err) => format!("Export failed: {err}"),
        };
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let view = self.dashboard.render(&self.state);

        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        draw_header(frame, chunks[0], &view);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(0)])
            .split(chunks[1]);
        self.draw_sidebar(frame, body[0]);
        draw_main(frame, body[1], &view);

        self.draw_footer(frame, chunks[2]);
    }

    fn draw_sidebar(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let date_field = |field: Focus, value: chrono::NaiveDate| match &self.editing {
            Some(edit) if edit.field == field => format!("{}_", edit.input),
            _ => value.to_string(),
        };

        let mut rows = vec![
            ListItem::new(format!("Start:  {}", date_field(Focus::Start, self.state.range.start))),
            ListItem::new(format!("End:    {}", date_field(Focus::End, self.state.range.end))),
            ListItem::new(format!(
                "Window: ◀ {} ▶ ({}-{})",
                self.state.window.get(),
                RollingWindow::MIN,
                RollingWindow::MAX
            )),
            ListItem::new(format!("Raw:    {}", if self.state.show_raw { "on" } else { "off" })),
            ListItem::new(Line::from(Span::styled(
                format!("Items ({} selected)", self.state.items.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ))),
        ];
        rows.extend(
            self.dashboard
                .table
                .sorted_item_names()
                .into_iter()
                .map(|name| item_row(name, &self.state)),
        );

        let selected = match self.focus {
            Focus::Start => 0,
            Focus::End => 1,
            Focus::Window => 2,
            Focus::Raw => 3,
            Focus::Items => 5 + self.item_cursor,
        };

        let highlight = if self.editing.is_some() {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::Black).bg(Color::White)
        };
        let list = List::new(rows)
            .block(Block::default().title("Controls").borders(Borders::ALL))
            .highlight_style(highlight)
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "Tab/↑↓ focus  Enter edit  Space toggle  ←/→ window  R reload  e export  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn item_row<'a>(name: &'a str, state: &ViewState) -> ListItem<'a> {
    match state.items.iter().position(|i| i == name) {
        Some(i) => ListItem::new(Line::from(vec![
            Span::raw("[x] "),
            Span::styled(
                name,
                Style::default().fg(terminal_color(SeriesColor::for_index(i))),
            ),
        ])),
        None => ListItem::new(format!("[ ] {name}")),
    }
}

/// The palette color as drawn on a dark terminal.
fn terminal_color(color: SeriesColor) -> Color {
    let rgb = ChartTheme::terminal().series_color(color);
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn draw_header(frame: &mut ratatui::Frame<'_>, area: Rect, view: &DashboardView<'_>) {
    let text = Text::from(vec![
        Line::from(Span::styled(
            view.title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(view.instructions, Style::default().fg(Color::Gray))),
    ]);
    let p = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(p, area);
}

fn draw_main(frame: &mut ratatui::Frame<'_>, area: Rect, view: &DashboardView<'_>) {
    let mut constraints = vec![Constraint::Min(10)];
    if let Some(stats) = &view.stats {
        constraints.push(Constraint::Length(table_height(stats.len())));
    }
    if let Some(raw) = view.raw() {
        constraints.push(Constraint::Length(table_height(raw.len().min(MAX_RAW_ROWS))));
    }
    constraints.push(Constraint::Length(table_height(view.metrics.rows.len())));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut slots = chunks.iter().copied();

    if let Some(rect) = slots.next() {
        draw_chart(frame, rect, view);
    }
    if let Some(stats) = &view.stats {
        if let Some(rect) = slots.next() {
            frame.render_widget(stats_table(stats), rect);
        }
    }
    if let Some(raw) = view.raw() {
        if let Some(rect) = slots.next() {
            frame.render_widget(raw_table(raw), rect);
        }
    }
    if let Some(rect) = slots.next() {
        frame.render_widget(metrics_table(view.metrics), rect);
    }
}

/// Borders plus header plus rows.
fn table_height(rows: usize) -> u16 {
    u16::try_from(rows + 3).unwrap_or(u16::MAX)
}

fn draw_chart(frame: &mut ratatui::Frame<'_>, area: Rect, view: &DashboardView<'_>) {
    let title = format!(
        "Price history ({} rows{})",
        view.filtered.len(),
        date_span(&view.filtered)
    );
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Clear, inner);

    let Some(chart) = &view.chart else {
        let msg = Paragraph::new("Select at least one item to chart.")
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(msg, inner);
        return;
    };
    frame.render_widget(PriceChartWidget::new(chart), inner);
}

fn date_span(view: &TableView<'_>) -> String {
    match (view.dates().first(), view.dates().last()) {
        (Some(a), Some(b)) => format!(", {a} .. {b}"),
        _ => String::new(),
    }
}

fn header_row<'a>(cells: impl IntoIterator<Item = &'a str>) -> Row<'a> {
    Row::new(cells.into_iter().map(Cell::from))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}

fn stats_table(rows: &[SummaryRow]) -> Table<'static> {
    let body = rows.iter().map(|r| {
        Row::new(vec![
            r.product.clone(),
            fmt_num(r.p25),
            fmt_num(r.median),
            fmt_num(r.p75),
            fmt_num(r.mean),
        ])
    });
    Table::new(
        body,
        [
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(10),
        ],
    )
    .header(header_row(["Product", "25th Percentile", "Median", "75th Percentile", "Mean"]))
    .block(Block::default().title("Price statistics (full history)").borders(Borders::ALL))
}

fn raw_table<'a>(view: &TableView<'a>) -> Table<'a> {
    let items = view.table().items();
    let mut headers = vec!["date"];
    headers.extend(items.iter().map(|s| s.name.as_str()));

    let body: Vec<Row> = view
        .rows()
        .take(MAX_RAW_ROWS)
        .map(|(date, cells)| {
            let mut row = vec![date.to_string()];
            row.extend(cells.into_iter().map(fmt_num));
            Row::new(row)
        })
        .collect();

    let mut widths = vec![Constraint::Length(10)];
    widths.extend(items.iter().map(|s| Constraint::Length(s.name.chars().count().max(8) as u16)));

    let title = if view.len() > MAX_RAW_ROWS {
        format!("Filtered data (first {MAX_RAW_ROWS} of {} rows)", view.len())
    } else {
        format!("Filtered data ({} rows)", view.len())
    };
    Table::new(body, widths)
        .header(header_row(headers))
        .block(Block::default().title(title).borders(Borders::ALL))
}

fn metrics_table(metrics: &MetricTable) -> Table<'_> {
    let mut headers = vec!["product"];
    headers.extend(metrics.columns.iter().map(String::as_str));

    let body = metrics.rows.iter().map(|r| {
        let mut row = vec![r.product.as_str()];
        row.extend(r.values.iter().map(String::as_str));
        Row::new(row)
    });

    let widths = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let widest = metrics
                .rows
                .iter()
                .map(|r| match i {
                    0 => r.product.chars().count(),
                    _ => r.values.get(i - 1).map_or(0, |v| v.chars().count()),
                })
                .max()
                .unwrap_or(0);
            Constraint::Length(widest.max(h.chars().count()) as u16)
        })
        .collect::<Vec<_>>();

    Table::new(body, widths)
        .header(header_row(headers))
        .block(Block::default().title("Accuracy summary").borders(Borders::ALL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MetricRow, PriceSeries, PriceTable};
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, m, day).unwrap()
    }

    fn app() -> App {
        let dates: Vec<NaiveDate> = d(9, 1).iter_days().take(10).collect();
        let n = dates.len();
        let table = PriceTable::new(
            dates,
            vec![
                PriceSeries {
                    name: "radish".to_string(),
                    values: vec![Some(2.0); n],
                },
                PriceSeries {
                    name: "cabbage".to_string(),
                    values: vec![Some(1.0); n],
                },
            ],
        );
        let metrics = MetricTable {
            columns: vec!["mape".to_string()],
            rows: vec![MetricRow {
                product: "cabbage".to_string(),
                values: vec!["0.1".to_string()],
            }],
        };
        let config = DashboardConfig {
            data_path: PathBuf::from("missing-prices.csv"),
            metrics_path: PathBuf::from("missing-metrics.csv"),
            log_file: None,
        };
        App::new(
            Dashboard::new(Arc::new(table), Arc::new(metrics)),
            TableCache::default(),
            config,
        )
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert!(!app.handle_key(*key));
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn focus_cycles_through_controls() {
        assert_eq!(Focus::Items.next(), Focus::Start);
        assert_eq!(Focus::Start.prev(), Focus::Items);
        assert_eq!(Focus::Start.next().next(), Focus::Window);
    }

    #[test]
    fn typed_start_date_applies_on_enter() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.editing.as_ref().unwrap().input, "2020-09-01");
        for _ in 0.."2020-09-01".len() {
            app.handle_key(KeyCode::Backspace);
        }
        type_text(&mut app, "2020-09-05");
        app.handle_key(KeyCode::Enter);

        assert!(app.editing.is_none());
        assert_eq!(app.state.range.start, d(9, 5));
        assert_eq!(app.dashboard.render(&app.state).filtered.len(), 6);
    }

    #[test]
    fn escape_cancels_and_bad_dates_are_reported() {
        let mut app = app();
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.editing.as_ref().unwrap().field, Focus::End);
        type_text(&mut app, "99");
        app.handle_key(KeyCode::Esc);
        assert!(app.editing.is_none());
        assert_eq!(app.state.range.end, d(9, 10));

        app.handle_key(KeyCode::Enter);
        for _ in 0..12 {
            app.handle_key(KeyCode::Backspace);
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.state.range.end, d(9, 10));
        assert!(app.status.starts_with("Invalid date"));
    }

    #[test]
    fn window_is_clamped() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(app.focus, Focus::Window);
        for _ in 0..40 {
            app.handle_key(KeyCode::Right);
        }
        assert_eq!(app.state.window.get(), RollingWindow::MAX);
        for _ in 0..40 {
            app.handle_key(KeyCode::Left);
        }
        assert_eq!(app.state.window.get(), RollingWindow::MIN);
    }

    #[test]
    fn items_toggle_in_alphabetical_cursor_order() {
        let mut app = app();
        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Items);

        // Cursor 1 is "radish" (list is alphabetical), selected first.
        press(&mut app, &[KeyCode::Down, KeyCode::Char(' '), KeyCode::Up, KeyCode::Char(' ')]);
        assert_eq!(app.state.items, vec!["radish", "cabbage"]);

        let view = app.dashboard.render(&app.state);
        let chart = view.chart.unwrap();
        assert_eq!(chart.lines[0].label, "radish");
        assert_eq!(chart.lines[0].color, SeriesColor::Blue);

        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.state.items, vec!["radish"]);

        // Up from the first item leaves the list.
        app.handle_key(KeyCode::Up);
        assert_eq!(app.focus, Focus::Raw);
    }

    #[test]
    fn raw_toggle_and_quit() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab, KeyCode::Enter]);
        assert!(app.state.show_raw);
        assert!(app.dashboard.render(&app.state).raw().is_some());
        assert!(app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn failed_reload_keeps_the_session() {
        let mut app = app();
        app.state.items = vec!["cabbage".to_string()];
        app.handle_key(KeyCode::Char('R'));
        assert!(app.status.starts_with("Reload failed"));
        assert_eq!(app.state.items, vec!["cabbage"]);
        assert_eq!(app.dashboard.table.len(), 10);
    }

    #[test]
    fn export_without_selection_reports_status() {
        let mut app = app();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        app.export_chart(&path);
        assert!(app.status.starts_with("Nothing to export"));
        assert!(!path.exists());

        app.state.items = vec!["cabbage".to_string()];
        app.export_chart(&path);
        assert!(path.exists(), "{}", app.status);
    }
}
