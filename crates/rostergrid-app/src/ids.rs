// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::fmt;

const HEADER_ROW_ID: &str = "header";

/// Grid address of a row. Record rows are keyed by their position in the
/// record list; there is no separate primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RowId {
    Header,
    Record(usize),
}

impl RowId {
    pub const fn position(self) -> Option<usize> {
        match self {
            Self::Header => None,
            Self::Record(position) => Some(position),
        }
    }

    pub const fn is_header(self) -> bool {
        matches!(self, Self::Header)
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value == HEADER_ROW_ID {
            return Some(Self::Header);
        }
        // Reject signs and padding so every record row has exactly one spelling.
        if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        if value.len() > 1 && value.starts_with('0') {
            return None;
        }
        value.parse().ok().map(Self::Record)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => f.write_str(HEADER_ROW_ID),
            Self::Record(position) => write!(f, "{position}"),
        }
    }
}

impl From<usize> for RowId {
    fn from(position: usize) -> Self {
        Self::Record(position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    Name,
    Surname,
}

impl ColumnId {
    pub const ALL: [Self; 2] = [Self::Name, Self::Surname];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
        }
    }

    pub const fn header_label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Surname => "Surname",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Surname => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "surname" => Some(Self::Surname),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
