// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::Serialize;

use crate::{ColumnId, DropdownState, NAME_OPTIONS, NameOption, Person, RowId};

pub const COLUMN_WIDTH: u16 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridColumn {
    pub column_id: ColumnId,
    pub width: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextCell {
    pub text: String,
}

/// Dropdown cell as handed to the grid. Carries its own row and column ids so
/// a click or change on it can be traced back to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownCell {
    pub selected_value: String,
    pub input_value: String,
    pub is_open: bool,
    pub values: &'static [NameOption],
    pub row_id: RowId,
    pub column_id: ColumnId,
}

impl DropdownCell {
    pub fn for_person(position: usize, person: &Person, is_open: bool) -> Self {
        Self {
            selected_value: person.name.clone(),
            input_value: person.name.clone(),
            is_open,
            values: &NAME_OPTIONS,
            row_id: RowId::Record(position),
            column_id: ColumnId::Name,
        }
    }

    pub fn position(&self) -> Option<usize> {
        self.row_id.position()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.values
            .iter()
            .position(|option| option.value == self.selected_value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GridCell {
    Header(HeaderCell),
    Dropdown(DropdownCell),
    Text(TextCell),
}

impl GridCell {
    pub fn display(&self) -> &str {
        match self {
            Self::Header(cell) => &cell.text,
            Self::Dropdown(cell) => &cell.selected_value,
            Self::Text(cell) => &cell.text,
        }
    }

    pub fn as_dropdown(&self) -> Option<&DropdownCell> {
        match self {
            Self::Dropdown(cell) => Some(cell),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub row_id: RowId,
    pub cells: Vec<GridCell>,
}

impl GridRow {
    pub fn cell(&self, column: ColumnId) -> Option<&GridCell> {
        self.cells.get(column.index())
    }
}

pub fn columns() -> Vec<GridColumn> {
    ColumnId::ALL
        .iter()
        .map(|column_id| GridColumn {
            column_id: *column_id,
            width: COLUMN_WIDTH,
        })
        .collect()
}

pub fn header_row() -> GridRow {
    GridRow {
        row_id: RowId::Header,
        cells: ColumnId::ALL
            .iter()
            .map(|column| {
                GridCell::Header(HeaderCell {
                    text: column.header_label().to_owned(),
                })
            })
            .collect(),
    }
}

/// Header row followed by one row per record, in list order.
pub fn project_rows(people: &[Person], dropdown: &DropdownState) -> Vec<GridRow> {
    let open_index = dropdown.open_index();
    std::iter::once(header_row())
        .chain(people.iter().enumerate().map(|(position, person)| GridRow {
            row_id: RowId::Record(position),
            cells: vec![
                GridCell::Dropdown(DropdownCell::for_person(
                    position,
                    person,
                    open_index == Some(position),
                )),
                GridCell::Text(TextCell {
                    text: person.surname.clone(),
                }),
            ],
        }))
        .collect()
}
