// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use tracing::{debug, warn};

use crate::{
    ColumnId, DropdownCell, DropdownEvent, DropdownState, HeaderCell, PeopleStore, RowId, TextCell,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellPayload {
    Header(HeaderCell),
    Text(TextCell),
    Dropdown(DropdownCell),
}

impl CellPayload {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Header(_) => "header",
            Self::Text(_) => "text",
            Self::Dropdown(_) => "dropdown",
        }
    }
}

/// One edited cell as reported by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellChange {
    pub row_id: RowId,
    pub column_id: ColumnId,
    pub new_cell: CellPayload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedChange {
    pub position: usize,
    pub column: ColumnId,
    pub value: String,
}

/// Why a dropdown selection was left unapplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    Unchanged,
    Empty,
    MatchesSnapshot,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub applied: Vec<AppliedChange>,
    pub suppressed: Vec<(usize, Suppression)>,
    pub ignored: usize,
    pub committed: Vec<usize>,
    pub dropdown_events: Vec<DropdownEvent>,
}

impl ReconcileOutcome {
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty() && self.committed.is_empty() && self.dropdown_events.is_empty()
    }
}

/// Folds a change batch into a copy of `records`.
///
/// Changes apply in order against the copy, so a later change to the same
/// field wins and the dropdown guards compare against earlier writes from the
/// same batch. A record row outside the list fails the whole batch.
pub fn reconcile(
    records: &PeopleStore,
    dropdown: &DropdownState,
    changes: &[CellChange],
) -> Result<(PeopleStore, ReconcileOutcome)> {
    let mut updated = records.clone();
    let mut outcome = ReconcileOutcome::default();
    let snapshot_value = dropdown
        .last_clicked_cell()
        .map(|cell| cell.selected_value.as_str());

    for change in changes {
        let Some(position) = change.row_id.position() else {
            continue;
        };
        if position >= updated.len() {
            bail!(
                "cell change targets row {} but only {} records exist",
                change.row_id,
                updated.len()
            );
        }

        match (change.column_id, &change.new_cell) {
            (ColumnId::Surname, CellPayload::Text(cell)) => {
                debug!(position, text = %cell.text, "surname change");
                updated.replace_at(position, ColumnId::Surname, cell.text.clone())?;
                outcome.applied.push(AppliedChange {
                    position,
                    column: ColumnId::Surname,
                    value: cell.text.clone(),
                });
            }
            (ColumnId::Name, CellPayload::Dropdown(cell)) => {
                let new_value = cell.selected_value.as_str();
                let current = updated
                    .person(position)
                    .map(|person| person.name.as_str())
                    .unwrap_or_default();
                debug!(position, new_value, current, ?snapshot_value, "name change");

                let suppression = if new_value == current {
                    Some(Suppression::Unchanged)
                } else if new_value.is_empty() {
                    Some(Suppression::Empty)
                } else if snapshot_value == Some(new_value) {
                    Some(Suppression::MatchesSnapshot)
                } else {
                    None
                };
                if let Some(reason) = suppression {
                    outcome.suppressed.push((position, reason));
                    continue;
                }

                updated.replace_at(position, ColumnId::Name, new_value)?;
                outcome.applied.push(AppliedChange {
                    position,
                    column: ColumnId::Name,
                    value: new_value.to_owned(),
                });
                if !outcome.committed.contains(&position) {
                    outcome.committed.push(position);
                }
            }
            (column, payload) => {
                warn!(
                    row = %change.row_id,
                    %column,
                    payload = payload.kind(),
                    "ignoring cell change with mismatched payload"
                );
                outcome.ignored += 1;
            }
        }
    }

    Ok((updated, outcome))
}
