// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Cell templates for the `name` dropdown.
//!
//! [`DropdownTemplate`] is the base renderer: it draws the cell and its option
//! list and turns keys into cell changes. [`ClickObservingTemplate`] wraps any
//! template and attaches a [`ClickObserver`] to what it renders, so a click on
//! the cell reaches the dropdown state machine without the base renderer
//! knowing about it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use rostergrid_app::{ColumnId, DropdownCell, DropdownEvent, GridState};

const DROPDOWN_MARK: &str = "▾";
const PLACEHOLDER: &str = "choose…";

/// Receives dropdown clicks observed at the template layer.
pub trait ClickSink {
    fn dropdown_clicked(
        &mut self,
        cell: DropdownCell,
        position: usize,
        column: ColumnId,
    ) -> Vec<DropdownEvent>;
}

impl ClickSink for GridState {
    fn dropdown_clicked(
        &mut self,
        cell: DropdownCell,
        position: usize,
        _column: ColumnId,
    ) -> Vec<DropdownEvent> {
        self.click(position, cell)
    }
}

/// Snapshot of a rendered dropdown cell plus its address, fired when the
/// grid routes a click to that cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickObserver {
    cell: DropdownCell,
    position: usize,
    column: ColumnId,
}

impl ClickObserver {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn fire<S: ClickSink + ?Sized>(self, sink: &mut S) -> Vec<DropdownEvent> {
        sink.dropdown_clicked(self.cell, self.position, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub content: Line<'static>,
    pub popup: Vec<Line<'static>>,
    pub on_click: Option<ClickObserver>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateAction {
    None,
    Highlight(usize),
    Change { cell: DropdownCell, commit: bool },
}

pub trait CellTemplate {
    fn render(&self, cell: &DropdownCell, editing: bool, highlighted: usize) -> RenderedCell;

    /// Translates a key into what the cell should become. `Change` is the
    /// template's on-change output and is passed to the grid untouched.
    fn handle_key(&self, cell: &DropdownCell, highlighted: usize, key: KeyEvent)
    -> TemplateAction;

    fn select(&self, cell: &DropdownCell, option: usize) -> TemplateAction;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DropdownTemplate;

impl DropdownTemplate {
    fn toggled(cell: &DropdownCell) -> DropdownCell {
        let mut echoed = cell.clone();
        echoed.is_open = !cell.is_open;
        echoed
    }
}

impl CellTemplate for DropdownTemplate {
    fn render(&self, cell: &DropdownCell, editing: bool, highlighted: usize) -> RenderedCell {
        let (label, style) = if cell.selected_value.is_empty() {
            (PLACEHOLDER.to_owned(), Style::default().fg(Color::DarkGray))
        } else {
            (cell.selected_value.clone(), Style::default())
        };
        let style = if editing {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        };
        let content = Line::from(vec![
            Span::styled(label, style),
            Span::raw(" "),
            Span::styled(DROPDOWN_MARK, Style::default().fg(Color::Cyan)),
        ]);

        let popup = if cell.is_open {
            cell.values
                .iter()
                .enumerate()
                .map(|(index, option)| {
                    let selected = option.value == cell.selected_value;
                    let marker = if selected { "• " } else { "  " };
                    let style = if index == highlighted {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Line::from(Span::styled(format!("{marker}{}", option.label), style))
                })
                .collect()
        } else {
            Vec::new()
        };

        RenderedCell {
            content,
            popup,
            on_click: None,
        }
    }

    fn handle_key(
        &self,
        cell: &DropdownCell,
        highlighted: usize,
        key: KeyEvent,
    ) -> TemplateAction {
        if !cell.is_open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => TemplateAction::Change {
                    cell: Self::toggled(cell),
                    commit: false,
                },
                _ => TemplateAction::None,
            };
        }

        let last = cell.values.len().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                TemplateAction::Highlight(highlighted.saturating_sub(1))
            }
            KeyCode::Down | KeyCode::Char('j') => {
                TemplateAction::Highlight(highlighted.saturating_add(1).min(last))
            }
            KeyCode::Home => TemplateAction::Highlight(0),
            KeyCode::End => TemplateAction::Highlight(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(cell, highlighted),
            KeyCode::Esc => TemplateAction::Change {
                cell: Self::toggled(cell),
                commit: false,
            },
            _ => TemplateAction::None,
        }
    }

    fn select(&self, cell: &DropdownCell, option: usize) -> TemplateAction {
        let Some(choice) = cell.values.get(option) else {
            return TemplateAction::None;
        };
        let mut chosen = cell.clone();
        chosen.selected_value = choice.value.to_owned();
        chosen.input_value = choice.value.to_owned();
        chosen.is_open = false;
        TemplateAction::Change {
            cell: chosen,
            commit: true,
        }
    }
}

/// Decorates a template so every rendered record cell carries a click
/// observer. Rendering and edits are forwarded to the base unchanged.
#[derive(Debug, Clone, Default)]
pub struct ClickObservingTemplate<T> {
    base: T,
}

impl<T: CellTemplate> ClickObservingTemplate<T> {
    pub fn new(base: T) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &T {
        &self.base
    }
}

impl<T: CellTemplate> CellTemplate for ClickObservingTemplate<T> {
    fn render(&self, cell: &DropdownCell, editing: bool, highlighted: usize) -> RenderedCell {
        let mut rendered = self.base.render(cell, editing, highlighted);
        rendered.on_click = cell.position().map(|position| ClickObserver {
            cell: cell.clone(),
            position,
            column: cell.column_id,
        });
        rendered
    }

    fn handle_key(
        &self,
        cell: &DropdownCell,
        highlighted: usize,
        key: KeyEvent,
    ) -> TemplateAction {
        self.base.handle_key(cell, highlighted, key)
    }

    fn select(&self, cell: &DropdownCell, option: usize) -> TemplateAction {
        self.base.select(cell, option)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CellTemplate, ClickObservingTemplate, ClickSink, DropdownTemplate, TemplateAction,
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rostergrid_app::{
        ColumnId, DropdownCell, DropdownEvent, GridState, Person, initial_people,
    };

    fn cell(position: usize, name: &str, is_open: bool) -> DropdownCell {
        DropdownCell::for_person(position, &Person::new(name, ""), is_open)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn line_text(line: &ratatui::text::Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn base_renders_value_or_placeholder() {
        let template = DropdownTemplate;
        let filled = template.render(&cell(0, "Thomas", false), false, 0);
        assert_eq!(line_text(&filled.content), "Thomas ▾");
        assert!(filled.popup.is_empty());
        assert!(filled.on_click.is_none());

        let blank = template.render(&cell(2, "", false), false, 0);
        assert_eq!(line_text(&blank.content), "choose… ▾");
    }

    #[test]
    fn open_cell_lists_every_option_and_marks_selection() {
        let rendered = DropdownTemplate.render(&cell(1, "Susie", true), true, 1);
        let lines = rendered.popup.iter().map(line_text).collect::<Vec<_>>();
        assert_eq!(lines, vec!["  Thomas", "• Susie", "  John", "  Jane"]);
    }

    #[test]
    fn activating_a_closed_cell_echoes_it_open() {
        let closed = cell(1, "Susie", false);
        let action = DropdownTemplate.handle_key(&closed, 0, key(KeyCode::Enter));
        let TemplateAction::Change { cell, commit } = action else {
            panic!("expected an echo change");
        };
        assert!(!commit);
        assert!(cell.is_open);
        assert_eq!(cell.selected_value, "Susie");
    }

    #[test]
    fn highlight_moves_within_bounds() {
        let open = cell(0, "Thomas", true);
        assert_eq!(
            DropdownTemplate.handle_key(&open, 0, key(KeyCode::Up)),
            TemplateAction::Highlight(0)
        );
        assert_eq!(
            DropdownTemplate.handle_key(&open, 2, key(KeyCode::Down)),
            TemplateAction::Highlight(3)
        );
        assert_eq!(
            DropdownTemplate.handle_key(&open, 3, key(KeyCode::Down)),
            TemplateAction::Highlight(3)
        );
    }

    #[test]
    fn enter_commits_the_highlighted_option_closed() {
        let open = cell(2, "", true);
        let TemplateAction::Change { cell, commit } =
            DropdownTemplate.handle_key(&open, 2, key(KeyCode::Enter))
        else {
            panic!("expected a committed change");
        };
        assert!(commit);
        assert!(!cell.is_open);
        assert_eq!(cell.selected_value, "John");
        assert_eq!(cell.input_value, "John");
    }

    #[test]
    fn selecting_past_the_catalog_does_nothing() {
        assert_eq!(
            DropdownTemplate.select(&cell(0, "Thomas", true), 9),
            TemplateAction::None
        );
    }

    #[test]
    fn adapter_attaches_observer_without_changing_output() {
        let adapter = ClickObservingTemplate::new(DropdownTemplate);
        let open = cell(1, "Susie", true);

        let base = DropdownTemplate.render(&open, true, 2);
        let wrapped = adapter.render(&open, true, 2);
        assert_eq!(wrapped.content, base.content);
        assert_eq!(wrapped.popup, base.popup);
        assert_eq!(wrapped.on_click.as_ref().map(|observer| observer.position()), Some(1));

        for code in [KeyCode::Enter, KeyCode::Down, KeyCode::Esc, KeyCode::Char('x')] {
            assert_eq!(
                adapter.handle_key(&open, 2, key(code)),
                DropdownTemplate.handle_key(&open, 2, key(code)),
            );
        }
        assert_eq!(adapter.select(&open, 3), DropdownTemplate.select(&open, 3));
    }

    #[test]
    fn firing_the_observer_drives_the_state_machine() {
        let mut state = GridState::new(initial_people());
        let adapter = ClickObservingTemplate::new(DropdownTemplate);
        let rendered = adapter.render(&cell(2, "", false), false, 0);
        let Some(observer) = rendered.on_click else {
            panic!("record cells should be clickable");
        };

        assert_eq!(observer.clone().fire(&mut state), vec![DropdownEvent::Opened(2)]);
        assert_eq!(state.dropdown.open_index(), Some(2));
        assert_eq!(observer.fire(&mut state), vec![DropdownEvent::Closed(2)]);
        assert_eq!(state.dropdown.open_index(), None);
    }

    struct Recorder(Vec<(usize, ColumnId)>);

    impl ClickSink for Recorder {
        fn dropdown_clicked(
            &mut self,
            _cell: DropdownCell,
            position: usize,
            column: ColumnId,
        ) -> Vec<DropdownEvent> {
            self.0.push((position, column));
            Vec::new()
        }
    }

    #[test]
    fn observer_reports_row_and_column() {
        let adapter = ClickObservingTemplate::new(DropdownTemplate);
        let mut recorder = Recorder(Vec::new());
        if let Some(observer) = adapter.render(&cell(0, "Thomas", false), false, 0).on_click {
            observer.fire(&mut recorder);
        }
        assert_eq!(recorder.0, vec![(0, ColumnId::Name)]);
    }
}
