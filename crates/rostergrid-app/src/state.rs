// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use tracing::debug;

use crate::{CellChange, DropdownCell, GridRow, PeopleStore, Person, ReconcileOutcome};

/// Which dropdown, if any, is open. The snapshot is the cell as it was
/// rendered when the user clicked it open, and lives exactly as long as the
/// open state does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    OpenAt {
        position: usize,
        snapshot: DropdownCell,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownCommand {
    Click { position: usize, cell: DropdownCell },
    Commit { position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    Opened(usize),
    Closed(usize),
}

impl DropdownState {
    pub fn open_index(&self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::OpenAt { position, .. } => Some(*position),
        }
    }

    pub fn last_clicked_cell(&self) -> Option<&DropdownCell> {
        match self {
            Self::Closed => None,
            Self::OpenAt { snapshot, .. } => Some(snapshot),
        }
    }

    pub fn is_open_at(&self, position: usize) -> bool {
        self.open_index() == Some(position)
    }

    pub fn dispatch(&mut self, command: DropdownCommand) -> Vec<DropdownEvent> {
        let events = match command {
            DropdownCommand::Click { position, cell } => self.click(position, cell),
            DropdownCommand::Commit { position } => self.commit(position),
        };
        for event in &events {
            debug!(?event, "dropdown transition");
        }
        events
    }

    fn click(&mut self, position: usize, cell: DropdownCell) -> Vec<DropdownEvent> {
        match self.open_index() {
            Some(open) if open == position => {
                *self = Self::Closed;
                vec![DropdownEvent::Closed(position)]
            }
            previous => {
                *self = Self::OpenAt {
                    position,
                    snapshot: cell,
                };
                previous
                    .map(DropdownEvent::Closed)
                    .into_iter()
                    .chain(std::iter::once(DropdownEvent::Opened(position)))
                    .collect()
            }
        }
    }

    fn commit(&mut self, position: usize) -> Vec<DropdownEvent> {
        if !self.is_open_at(position) {
            return Vec::new();
        }
        *self = Self::Closed;
        vec![DropdownEvent::Closed(position)]
    }
}

/// Everything the grid renders from: the record list plus dropdown UI state.
/// Mutated only through `click` and `apply_changes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    pub records: PeopleStore,
    pub dropdown: DropdownState,
}

impl GridState {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            records: PeopleStore::new(people),
            dropdown: DropdownState::Closed,
        }
    }

    pub fn people(&self) -> &[Person] {
        self.records.get()
    }

    pub fn rows(&self) -> Vec<GridRow> {
        crate::project_rows(self.records.get(), &self.dropdown)
    }

    pub fn click(&mut self, position: usize, cell: DropdownCell) -> Vec<DropdownEvent> {
        self.dropdown
            .dispatch(DropdownCommand::Click { position, cell })
    }

    /// Reconciles one batch from the grid. On error nothing is applied.
    pub fn apply_changes(&mut self, changes: &[CellChange]) -> Result<ReconcileOutcome> {
        let (records, mut outcome) = crate::reconcile(&self.records, &self.dropdown, changes)?;
        self.records = records;
        for position in outcome.committed.clone() {
            outcome
                .dropdown_events
                .extend(self.dropdown.dispatch(DropdownCommand::Commit { position }));
        }
        Ok(outcome)
    }
}
