// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use rostergrid_app::{
    CellChange, CellPayload, ColumnId, DropdownCell, DropdownEvent, GridState, HeaderCell,
    NAME_OPTIONS, Person, RowId, TextCell,
};

const SURNAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];

/// The three records the application boots with.
pub fn sample_people() -> Vec<Person> {
    rostergrid_app::initial_people()
}

pub fn sample_state() -> GridState {
    GridState::new(sample_people())
}

pub fn text_change(position: usize, text: &str) -> CellChange {
    CellChange {
        row_id: RowId::Record(position),
        column_id: ColumnId::Surname,
        new_cell: CellPayload::Text(TextCell {
            text: text.to_owned(),
        }),
    }
}

/// A dropdown change as the grid reports a user selection: the chosen value
/// with the popup already closed.
pub fn dropdown_change(position: usize, value: &str) -> CellChange {
    let mut cell = DropdownCell::for_person(position, &Person::new(value, ""), false);
    cell.input_value = value.to_owned();
    CellChange {
        row_id: RowId::Record(position),
        column_id: ColumnId::Name,
        new_cell: CellPayload::Dropdown(cell),
    }
}

/// The change a grid emits when a dropdown merely opens or closes: the cell
/// as rendered with `is_open` flipped and the selection untouched.
pub fn echo_change(cell: &DropdownCell) -> CellChange {
    let mut echoed = cell.clone();
    echoed.is_open = !cell.is_open;
    CellChange {
        row_id: cell.row_id,
        column_id: cell.column_id,
        new_cell: CellPayload::Dropdown(echoed),
    }
}

pub fn header_change(column: ColumnId, text: &str) -> CellChange {
    CellChange {
        row_id: RowId::Header,
        column_id: column,
        new_cell: CellPayload::Header(HeaderCell {
            text: text.to_owned(),
        }),
    }
}

/// The dropdown cell currently projected for `position`.
pub fn dropdown_cell(state: &GridState, position: usize) -> Result<DropdownCell> {
    state
        .rows()
        .into_iter()
        .find(|row| row.row_id == RowId::Record(position))
        .and_then(|row| row.cell(ColumnId::Name).and_then(|cell| cell.as_dropdown().cloned()))
        .ok_or_else(|| anyhow!("no dropdown cell projected for row {position}"))
}

/// Clicks the dropdown at `position` the way the grid does: with the cell
/// exactly as it was last rendered.
pub fn click(state: &mut GridState, position: usize) -> Result<Vec<DropdownEvent>> {
    let cell = dropdown_cell(state, position)?;
    Ok(state.click(position, cell))
}

pub fn open_rows(state: &GridState) -> Vec<usize> {
    state
        .rows()
        .iter()
        .filter_map(|row| row.cell(ColumnId::Name).and_then(|cell| cell.as_dropdown()))
        .filter(|cell| cell.is_open)
        .filter_map(DropdownCell::position)
        .collect()
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Seeded generator of plausible records. Same seed, same people.
#[derive(Debug, Clone)]
pub struct PeopleFaker {
    rng: DeterministicRng,
}

impl PeopleFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
        }
    }

    /// A catalog name, or blank roughly one time in five.
    pub fn name(&mut self) -> String {
        if self.rng.int_n(5) == 0 {
            return String::new();
        }
        NAME_OPTIONS[self.rng.int_n(NAME_OPTIONS.len())]
            .value
            .to_owned()
    }

    pub fn surname(&mut self) -> String {
        SURNAMES[self.rng.int_n(SURNAMES.len())].to_owned()
    }

    pub fn person(&mut self) -> Person {
        Person {
            name: self.name(),
            surname: self.surname(),
        }
    }

    pub fn people(&mut self, count: usize) -> Vec<Person> {
        (0..count).map(|_| self.person()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        PeopleFaker, click, dropdown_cell, dropdown_change, echo_change, open_rows, sample_state,
        text_change,
    };
    use anyhow::Result;
    use rostergrid_app::{CellPayload, ColumnId, NAME_OPTIONS, RowId};
    use std::collections::BTreeSet;

    #[test]
    fn same_seed_same_people() {
        let first = PeopleFaker::new(42).people(10);
        let second = PeopleFaker::new(42).people(10);
        assert_eq!(first, second);
    }

    #[test]
    fn names_come_from_the_catalog_or_are_blank() {
        let mut faker = PeopleFaker::new(7);
        for person in faker.people(200) {
            assert!(
                person.name.is_empty()
                    || NAME_OPTIONS.iter().any(|option| option.value == person.name),
                "unexpected name {:?}",
                person.name
            );
            assert!(!person.surname.is_empty());
        }
    }

    #[test]
    fn variety_across_seeds() {
        let mut surnames = BTreeSet::new();
        for seed in 0_u64..20_u64 {
            surnames.insert(PeopleFaker::new(seed).surname());
        }
        assert!(surnames.len() >= 8, "got {}", surnames.len());
    }

    #[test]
    fn change_builders_address_the_right_cells() {
        let text = text_change(1, "Doe");
        assert_eq!(text.row_id, RowId::Record(1));
        assert_eq!(text.column_id, ColumnId::Surname);

        let dropdown = dropdown_change(2, "Jane");
        assert_eq!(dropdown.column_id, ColumnId::Name);
        let CellPayload::Dropdown(cell) = dropdown.new_cell else {
            panic!("expected dropdown payload");
        };
        assert_eq!(cell.selected_value, "Jane");
        assert!(!cell.is_open);
    }

    #[test]
    fn click_helper_opens_and_projects() -> Result<()> {
        let mut state = sample_state();
        click(&mut state, 1)?;
        assert_eq!(open_rows(&state), vec![1]);

        let echoed = echo_change(&dropdown_cell(&state, 1)?);
        let CellPayload::Dropdown(cell) = echoed.new_cell else {
            panic!("expected dropdown payload");
        };
        assert!(!cell.is_open);
        assert_eq!(cell.selected_value, "Susie");
        Ok(())
    }

    #[test]
    fn dropdown_cell_errors_for_missing_row() {
        let state = sample_state();
        assert!(dropdown_cell(&state, 3).is_err());
    }
}
