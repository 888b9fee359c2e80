// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod template;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use rostergrid_app::{
    CellChange, CellPayload, ColumnId, DropdownCell, DropdownEvent, GridCell, GridRow, GridState,
    ReconcileOutcome, RowId, Suppression, TextCell, columns, name_option_index,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

pub use template::{
    CellTemplate, ClickObserver, ClickObservingTemplate, ClickSink, DropdownTemplate,
    RenderedCell, TemplateAction,
};

/// Columns in the terminal are this many times narrower than grid widths.
const PIXELS_PER_CELL: u16 = 10;
const COLUMN_SPACING: u16 = 1;
const EDIT_CURSOR: &str = "▏";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub mouse: bool,
    pub status_timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mouse: true,
            status_timeout: Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitTarget {
    Cell { position: usize, column: ColumnId },
    Option { position: usize, option: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HitRegion {
    area: Rect,
    target: HitTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewData {
    cursor_row: usize,
    cursor_col: ColumnId,
    highlighted: usize,
    text_edit: Option<String>,
    help_visible: bool,
    status_line: Option<String>,
    status_token: u64,
    status_timeout: Duration,
    hit_regions: Vec<HitRegion>,
}

impl Default for ViewData {
    fn default() -> Self {
        Self {
            cursor_row: 0,
            cursor_col: ColumnId::Name,
            highlighted: 0,
            text_edit: None,
            help_visible: false,
            status_line: None,
            status_token: 0,
            status_timeout: RunOptions::default().status_timeout,
            hit_regions: Vec::new(),
        }
    }
}

/// Terminal grid: renders projected rows, routes keys and clicks to the
/// dropdown template, and hands change batches to the reconciler.
#[derive(Debug, Clone)]
pub struct GridEngine<T> {
    template: T,
    view: ViewData,
}

impl GridEngine<ClickObservingTemplate<DropdownTemplate>> {
    pub fn new() -> Self {
        Self::with_template(ClickObservingTemplate::new(DropdownTemplate))
    }
}

impl Default for GridEngine<ClickObservingTemplate<DropdownTemplate>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CellTemplate> GridEngine<T> {
    pub fn with_template(template: T) -> Self {
        Self {
            template,
            view: ViewData::default(),
        }
    }

    pub fn set_status_timeout(&mut self, timeout: Duration) {
        self.view.status_timeout = timeout;
    }

    pub fn status_line(&self) -> Option<&str> {
        self.view.status_line.as_deref()
    }

    pub fn cursor(&self) -> (usize, ColumnId) {
        (self.view.cursor_row, self.view.cursor_col)
    }

    pub fn is_editing_text(&self) -> bool {
        self.view.text_edit.is_some()
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key_event(
        &mut self,
        state: &mut GridState,
        internal_tx: &Sender<InternalEvent>,
        key: KeyEvent,
    ) -> Result<bool> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if self.view.text_edit.is_some() {
            self.handle_text_edit_key(state, internal_tx, key)?;
            return Ok(false);
        }

        if self.view.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.view.help_visible = false;
            }
            return Ok(false);
        }

        if let Some(position) = state.dropdown.open_index() {
            self.handle_open_dropdown_key(state, internal_tx, position, key)?;
            return Ok(false);
        }

        self.clamp_cursor(state);
        match (key.code, self.view.cursor_col) {
            (KeyCode::Up, _) | (KeyCode::Char('k'), ColumnId::Name) => self.move_row(state, -1),
            (KeyCode::Down, _) | (KeyCode::Char('j'), ColumnId::Name) => self.move_row(state, 1),
            (KeyCode::Left, _) | (KeyCode::Char('h'), ColumnId::Name) => {
                self.view.cursor_col = ColumnId::Name;
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), ColumnId::Name) => {
                self.view.cursor_col = ColumnId::Surname;
            }
            (KeyCode::Tab, column) => {
                self.view.cursor_col = match column {
                    ColumnId::Name => ColumnId::Surname,
                    ColumnId::Surname => ColumnId::Name,
                };
            }
            (KeyCode::Char('q'), ColumnId::Name) => return Ok(true),
            (KeyCode::Char('?'), ColumnId::Name) => self.view.help_visible = true,
            (KeyCode::Enter | KeyCode::Char(' '), ColumnId::Name) => {
                self.activate_dropdown(state, internal_tx, key)?;
            }
            (KeyCode::Enter | KeyCode::F(2), ColumnId::Surname) => {
                let current = state
                    .people()
                    .get(self.view.cursor_row)
                    .map(|person| person.surname.clone())
                    .unwrap_or_default();
                self.view.text_edit = Some(current);
            }
            (KeyCode::Char(ch), ColumnId::Surname) if !ch.is_control() => {
                self.view.text_edit = Some(ch.to_string());
            }
            _ => {}
        }
        Ok(false)
    }

    pub fn handle_mouse_event(
        &mut self,
        state: &mut GridState,
        internal_tx: &Sender<InternalEvent>,
        mouse: MouseEvent,
    ) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        let point = Position::new(mouse.column, mouse.row);
        // Popup options sit on top of the rows below the open cell.
        let hit = self
            .view
            .hit_regions
            .iter()
            .filter(|region| region.area.contains(point))
            .map(|region| region.target)
            .max_by_key(|target| matches!(target, HitTarget::Option { .. }));
        let Some(target) = hit else {
            return Ok(());
        };

        match target {
            HitTarget::Option { position, option } => {
                let Some(cell) = dropdown_cell_at(state, position) else {
                    return Ok(());
                };
                let action = self.template.select(&cell, option);
                self.apply_template_action(state, internal_tx, &cell, action)?;
            }
            HitTarget::Cell { position, column } => {
                self.commit_text_edit(state, internal_tx)?;
                self.view.cursor_row = position;
                self.view.cursor_col = column;
                if column == ColumnId::Name {
                    self.click_dropdown(state, internal_tx, position);
                }
            }
        }
        Ok(())
    }

    fn handle_text_edit_key(
        &mut self,
        state: &mut GridState,
        internal_tx: &Sender<InternalEvent>,
        key: KeyEvent,
    ) -> Result<()> {
        let Some(buffer) = self.view.text_edit.as_mut() else {
            return Ok(());
        };
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(ch);
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Esc => {
                self.view.text_edit = None;
                self.emit_status(internal_tx, "edit canceled");
            }
            KeyCode::Enter | KeyCode::Tab => {
                self.commit_text_edit(state, internal_tx)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn commit_text_edit(
        &mut self,
        state: &mut GridState,
        internal_tx: &Sender<InternalEvent>,
    ) -> Result<()> {
        let Some(text) = self.view.text_edit.take() else {
            return Ok(());
        };
        let change = CellChange {
            row_id: RowId::Record(self.view.cursor_row),
            column_id: ColumnId::Surname,
            new_cell: CellPayload::Text(TextCell { text }),
        };
        self.emit_changes(state, internal_tx, vec![change], true)
    }

    fn handle_open_dropdown_key(
        &mut self,
        state: &mut GridState,
        internal_tx: &Sender<InternalEvent>,
        position: usize,
        key: KeyEvent,
    ) -> Result<()> {
        let Some(cell) = dropdown_cell_at(state, position) else {
            return Ok(());
        };
        self.view.cursor_row = position;
        self.view.cursor_col = ColumnId::Name;

        let action = self
            .template
            .handle_key(&cell, self.view.highlighted, key);
        self.apply_template_action(state, internal_tx, &cell, action)?;

        if key.code == KeyCode::Esc && state.dropdown.is_open_at(position) {
            self.click_dropdown(state, internal_tx, position);
        }
        Ok(())
    }

    /// Enter/Space on a closed dropdown: the wrapper sees the click first,
    /// then the base template gets the key and echoes the cell.
    fn activate_dropdown(
        &mut self,
        state: &mut GridState,
        internal_tx: &Sender<InternalEvent>,
        key: KeyEvent,
    ) -> Result<()> {
        let position = self.view.cursor_row;
        let Some(cell) = dropdown_cell_at(state, position) else {
            return Ok(());
        };
        self.click_dropdown(state, internal_tx, position);
        let action = self
            .template
            .handle_key(&cell, self.view.highlighted, key);
        self.apply_template_action(state, internal_tx, &cell, action)
    }

    fn click_dropdown(
        &mut self,
        state: &mut GridState,
        internal_tx: &Sender<InternalEvent>,
        position: usize,
    ) {
        let Some(cell) = dropdown_cell_at(state, position) else {
            return;
        };
        let rendered = self
            .template
            .render(&cell, true, self.view.highlighted);
        let Some(observer) = rendered.on_click else {
            return;
        };
        let events = observer.fire(state);
        self.after_dropdown_events(state, internal_tx, &events);
    }

    fn apply_template_action(
        &mut self,
        state: &mut GridState,
        internal_tx: &Sender<InternalEvent>,
        cell: &DropdownCell,
        action: TemplateAction,
    ) -> Result<()> {
        match action {
            TemplateAction::None => Ok(()),
            TemplateAction::Highlight(index) => {
                self.view.highlighted = index;
                Ok(())
            }
            TemplateAction::Change { cell: changed, commit } => {
                debug!(row = %cell.row_id, commit, value = %changed.selected_value, "dropdown cell changed");
                let change = CellChange {
                    row_id: cell.row_id,
                    column_id: cell.column_id,
                    new_cell: CellPayload::Dropdown(changed),
                };
                self.emit_changes(state, internal_tx, vec![change], commit)
            }
        }
    }

    fn emit_changes(
        &mut self,
        state: &mut GridState,
        internal_tx: &Sender<InternalEvent>,
        changes: Vec<CellChange>,
        commit: bool,
    ) -> Result<()> {
        let outcome = state
            .apply_changes(&changes)
            .context("apply cell changes from the grid")?;
        self.after_dropdown_events(state, internal_tx, &outcome.dropdown_events);
        if commit && let Some(message) = outcome_status(&outcome) {
            self.emit_status(internal_tx, message);
        }
        Ok(())
    }

    fn after_dropdown_events(
        &mut self,
        state: &GridState,
        internal_tx: &Sender<InternalEvent>,
        events: &[DropdownEvent],
    ) {
        for event in events {
            if let DropdownEvent::Opened(position) = event {
                self.view.highlighted = state
                    .people()
                    .get(*position)
                    .and_then(|person| name_option_index(&person.name))
                    .unwrap_or(0);
                self.emit_status(internal_tx, format!("choose a name for row {}", position + 1));
            }
        }
    }

    fn move_row(&mut self, state: &GridState, delta: isize) {
        let len = state.people().len();
        if len == 0 {
            return;
        }
        let next = self.view.cursor_row as isize + delta;
        self.view.cursor_row = next.clamp(0, len as isize - 1) as usize;
    }

    fn clamp_cursor(&mut self, state: &GridState) {
        let len = state.people().len();
        self.view.cursor_row = self.view.cursor_row.min(len.saturating_sub(1));
    }

    fn emit_status(&mut self, internal_tx: &Sender<InternalEvent>, message: impl Into<String>) {
        self.view.status_line = Some(message.into());
        self.view.status_token = self.view.status_token.saturating_add(1);
        schedule_status_clear(internal_tx, self.view.status_token, self.view.status_timeout);
    }

    pub fn process_internal_events(&mut self, rx: &Receiver<InternalEvent>) {
        while let Ok(event) = rx.try_recv() {
            match event {
                InternalEvent::ClearStatus { token } if token == self.view.status_token => {
                    self.view.status_line = None;
                }
                InternalEvent::ClearStatus { .. } => {}
            }
        }
    }

    pub fn render(&mut self, frame: &mut ratatui::Frame<'_>, state: &GridState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(frame.area());

        let rows = state.rows();
        self.view.hit_regions.clear();
        self.render_table(frame, layout[0], state, &rows);

        let status = Paragraph::new(status_text(state, &self.view))
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, layout[1]);

        if let Some(position) = state.dropdown.open_index() {
            self.render_popup(frame, layout[0], &rows, position);
        }

        if self.view.help_visible {
            let area = centered_rect(60, 60, frame.area());
            frame.render_widget(Clear, area);
            let help = Paragraph::new(help_overlay_text())
                .block(Block::default().title("help").borders(Borders::ALL));
            frame.render_widget(help, area);
        }
    }

    fn render_table(
        &mut self,
        frame: &mut ratatui::Frame<'_>,
        area: Rect,
        state: &GridState,
        rows: &[GridRow],
    ) {
        let columns = columns();
        let widths = columns
            .iter()
            .map(|column| column_cells(column.width))
            .collect::<Vec<_>>();

        let header = rows
            .iter()
            .find(|row| row.row_id.is_header())
            .map(|row| {
                Row::new(row.cells.iter().map(|cell| {
                    Cell::from(cell.display().to_owned()).style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                }))
            })
            .unwrap_or_default();

        let block = Block::default()
            .title(table_title(state))
            .borders(Borders::ALL);
        let inner = block.inner(area);

        let mut body = Vec::new();
        let mut regions = Vec::new();
        for row in rows {
            let Some(position) = row.row_id.position() else {
                continue;
            };
            let y = inner.y.saturating_add(1).saturating_add(position as u16);
            let mut x = inner.x;
            let mut cells = Vec::with_capacity(row.cells.len());
            for ((cell, column), width) in row.cells.iter().zip(ColumnId::ALL).zip(&widths) {
                if y < inner.bottom() {
                    regions.push(HitRegion {
                        area: Rect::new(x, y, *width, 1).intersection(inner),
                        target: HitTarget::Cell { position, column },
                    });
                }
                x = x.saturating_add(*width).saturating_add(COLUMN_SPACING);
                let focused = position == self.view.cursor_row && column == self.view.cursor_col;
                cells.push(self.render_cell(cell, focused));
            }
            body.push(Row::new(cells));
        }
        self.view.hit_regions.extend(regions);

        let table = Table::new(body, widths.iter().copied().map(Constraint::Length))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start)
            .block(block);
        frame.render_widget(table, area);
    }

    fn render_cell(&self, cell: &GridCell, focused: bool) -> Cell<'static> {
        let cursor_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match cell {
            GridCell::Dropdown(dropdown) => {
                let rendered =
                    self.template
                        .render(dropdown, focused || dropdown.is_open, self.view.highlighted);
                let cell = Cell::from(rendered.content);
                if focused { cell.style(cursor_style) } else { cell }
            }
            GridCell::Text(text) => match (&self.view.text_edit, focused) {
                (Some(buffer), true) => Cell::from(Line::from(vec![
                    Span::raw(buffer.clone()),
                    Span::styled(EDIT_CURSOR, Style::default().fg(Color::Cyan)),
                ]))
                .style(Style::default().add_modifier(Modifier::UNDERLINED)),
                (_, true) => Cell::from(text.text.clone()).style(cursor_style),
                (_, false) => Cell::from(text.text.clone()),
            },
            GridCell::Header(header) => Cell::from(header.text.clone()),
        }
    }

    fn render_popup(
        &mut self,
        frame: &mut ratatui::Frame<'_>,
        table_area: Rect,
        rows: &[GridRow],
        position: usize,
    ) {
        let Some(cell) = rows
            .iter()
            .find(|row| row.row_id == RowId::Record(position))
            .and_then(|row| row.cell(ColumnId::Name))
            .and_then(GridCell::as_dropdown)
        else {
            return;
        };
        let rendered = self.template.render(cell, true, self.view.highlighted);
        if rendered.popup.is_empty() {
            return;
        }

        let Some(anchor) = self.view.hit_regions.iter().find_map(|region| match region.target {
            HitTarget::Cell {
                position: hit,
                column: ColumnId::Name,
            } if hit == position => Some(region.area),
            _ => None,
        }) else {
            return;
        };

        let screen = frame.area();
        let width = anchor.width.max(14).min(screen.width);
        let height = (rendered.popup.len() as u16)
            .saturating_add(2)
            .min(screen.height);
        let below = anchor.bottom();
        let y = if below.saturating_add(height) <= screen.bottom() {
            below
        } else {
            anchor.y.saturating_sub(height).max(table_area.y)
        };
        let area = Rect::new(anchor.x, y, width, height).intersection(screen);

        frame.render_widget(Clear, area);
        let option_count = rendered.popup.len();
        let popup = Paragraph::new(rendered.popup).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(popup, area);

        let inner = Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        );
        for option in 0..option_count {
            let line_y = inner.y.saturating_add(option as u16);
            if line_y >= inner.bottom() {
                break;
            }
            self.view.hit_regions.push(HitRegion {
                area: Rect::new(inner.x, line_y, inner.width, 1),
                target: HitTarget::Option { position, option },
            });
        }
    }
}

pub fn run_app(state: &mut GridState, options: &RunOptions) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;
    if options.mouse {
        execute!(stdout, EnableMouseCapture).context("enable mouse capture")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut engine = GridEngine::new();
    engine.set_status_timeout(options.status_timeout);
    let (internal_tx, internal_rx) = mpsc::channel();
    info!(records = state.people().len(), mouse = options.mouse, "grid started");

    let result = event_loop(&mut terminal, state, &mut engine, &internal_tx, &internal_rx);

    if options.mouse {
        execute!(io::stdout(), DisableMouseCapture).context("disable mouse capture")?;
    }
    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    info!(ok = result.is_ok(), "grid stopped");
    result
}

fn event_loop<B: ratatui::backend::Backend, T: CellTemplate>(
    terminal: &mut Terminal<B>,
    state: &mut GridState,
    engine: &mut GridEngine<T>,
    internal_tx: &Sender<InternalEvent>,
    internal_rx: &Receiver<InternalEvent>,
) -> Result<()> {
    loop {
        engine.process_internal_events(internal_rx);
        terminal
            .draw(|frame| engine.render(frame, state))
            .context("draw frame")?;

        if !event::poll(Duration::from_millis(120)).context("poll event")? {
            continue;
        }
        match event::read().context("read event")? {
            Event::Key(key) => {
                if engine.handle_key_event(state, internal_tx, key)? {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => engine.handle_mouse_event(state, internal_tx, mouse)?,
            _ => {}
        }
    }
}

/// Plain-text rendering of the projected grid, one line per row.
pub fn dump_rows(state: &GridState) -> String {
    let widths = columns()
        .iter()
        .map(|column| usize::from(column_cells(column.width)))
        .collect::<Vec<_>>();
    let mut out = String::new();
    for row in state.rows() {
        let cells = row
            .cells
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| {
                let mut text = cell.display().to_owned();
                if let GridCell::Dropdown(dropdown) = cell
                    && dropdown.is_open
                {
                    text.push_str(" (open)");
                }
                format!("{text:<width$}")
            })
            .collect::<Vec<_>>();
        out.push_str(format!("{:<7} {}", row.row_id.to_string(), cells.join(" ")).trim_end());
        out.push('\n');
    }
    out
}

fn column_cells(width: u16) -> u16 {
    (width / PIXELS_PER_CELL).max(1)
}

fn dropdown_cell_at(state: &GridState, position: usize) -> Option<DropdownCell> {
    state
        .rows()
        .into_iter()
        .find(|row| row.row_id == RowId::Record(position))
        .and_then(|row| row.cell(ColumnId::Name).and_then(GridCell::as_dropdown).cloned())
}

fn outcome_status(outcome: &ReconcileOutcome) -> Option<String> {
    if let Some(last) = outcome.applied.last() {
        let value = if last.value.is_empty() {
            "(blank)"
        } else {
            last.value.as_str()
        };
        return Some(format!("row {} {} → {value}", last.position + 1, last.column));
    }
    match outcome.suppressed.last() {
        Some((_, Suppression::MatchesSnapshot)) => {
            Some("same value as when opened; still open".to_owned())
        }
        Some((_, Suppression::Unchanged)) => Some("selection unchanged; still open".to_owned()),
        Some((_, Suppression::Empty)) => Some("empty selection ignored".to_owned()),
        None => None,
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64, timeout: Duration) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(timeout);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn table_title(state: &GridState) -> String {
    match state.dropdown.open_index() {
        Some(position) => format!("rostergrid · choosing row {}", position + 1),
        None => "rostergrid".to_owned(),
    }
}

fn status_text(state: &GridState, view: &ViewData) -> String {
    if let Some(status) = &view.status_line {
        return status.clone();
    }
    if view.text_edit.is_some() {
        return "editing surname · enter save · esc cancel".to_owned();
    }
    if state.dropdown.open_index().is_some() {
        return "↑/↓ move · enter choose · esc close".to_owned();
    }
    match view.cursor_col {
        ColumnId::Name => "enter open · arrows move · ? help · q quit".to_owned(),
        ColumnId::Surname => "type or enter to edit · arrows move · ctrl-q quit".to_owned(),
    }
}

fn help_overlay_text() -> &'static str {
    "arrows / hjkl   move between cells\n\
     enter / space   open the name dropdown\n\
     ↑/↓ enter       pick a name while open\n\
     esc             close the dropdown\n\
     enter / typing  edit a surname\n\
     esc             cancel a surname edit\n\
     mouse           click cells and options\n\
     ?               toggle this help\n\
     q / ctrl-q      quit"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
