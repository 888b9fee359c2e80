// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ColumnId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub surname: String,
}

impl Person {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
        }
    }

    pub fn field(&self, column: ColumnId) -> &str {
        match column {
            ColumnId::Name => &self.name,
            ColumnId::Surname => &self.surname,
        }
    }

    pub(crate) fn field_mut(&mut self, column: ColumnId) -> &mut String {
        match column {
            ColumnId::Name => &mut self.name,
            ColumnId::Surname => &mut self.surname,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NameOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl NameOption {
    const fn same(value: &'static str) -> Self {
        Self {
            label: value,
            value,
        }
    }
}

/// Choices offered by every `name` dropdown. Fixed for the session.
pub const NAME_OPTIONS: [NameOption; 4] = [
    NameOption::same("Thomas"),
    NameOption::same("Susie"),
    NameOption::same("John"),
    NameOption::same("Jane"),
];

pub fn name_option_index(value: &str) -> Option<usize> {
    NAME_OPTIONS.iter().position(|option| option.value == value)
}

/// Records the grid starts with: two filled rows and one blank row.
pub fn initial_people() -> Vec<Person> {
    vec![
        Person::new("Thomas", "Goldman"),
        Person::new("Susie", "Quattro"),
        Person::new("", ""),
    ]
}
