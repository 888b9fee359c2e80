// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use rostergrid_app::{ColumnId, DropdownEvent, DropdownState, Person, Suppression};
use rostergrid_testkit::{
    click, dropdown_cell, dropdown_change, echo_change, header_change, open_rows, sample_state,
    text_change,
};

#[test]
fn empty_batch_leaves_records_and_dropdown_untouched() -> Result<()> {
    let mut state = sample_state();
    click(&mut state, 1)?;
    let before = state.clone();

    let outcome = state.apply_changes(&[])?;
    assert_eq!(state, before);
    assert!(outcome.is_noop());
    Ok(())
}

#[test]
fn surname_change_is_isolated_to_its_field_and_row() -> Result<()> {
    let mut state = sample_state();
    let before = state.people().to_vec();

    state.apply_changes(&[text_change(1, "Quatro")])?;

    for (position, (after, before)) in state.people().iter().zip(&before).enumerate() {
        if position == 1 {
            assert_eq!(after.name, before.name);
            assert_eq!(after.surname, "Quatro");
        } else {
            assert_eq!(after, before);
        }
    }
    Ok(())
}

#[test]
fn surname_change_does_not_touch_dropdown_state() -> Result<()> {
    let mut state = sample_state();
    click(&mut state, 0)?;

    let outcome = state.apply_changes(&[text_change(0, "Goldberg")])?;
    assert!(outcome.committed.is_empty());
    assert_eq!(state.dropdown.open_index(), Some(0));
    Ok(())
}

#[test]
fn selecting_a_new_value_closes_the_dropdown() -> Result<()> {
    let mut state = sample_state();
    assert_eq!(click(&mut state, 1)?, vec![DropdownEvent::Opened(1)]);
    assert_eq!(state.dropdown.open_index(), Some(1));

    let outcome = state.apply_changes(&[dropdown_change(1, "Jane")])?;
    assert_eq!(state.people()[1], Person::new("Jane", "Quattro"));
    assert_eq!(outcome.dropdown_events, vec![DropdownEvent::Closed(1)]);
    assert_eq!(state.dropdown, DropdownState::Closed);
    Ok(())
}

#[test]
fn clicking_the_open_row_again_closes_without_changing_values() -> Result<()> {
    let mut state = sample_state();
    click(&mut state, 1)?;

    assert_eq!(click(&mut state, 1)?, vec![DropdownEvent::Closed(1)]);
    assert_eq!(state.dropdown, DropdownState::Closed);
    assert_eq!(state.people(), sample_state().people());
    Ok(())
}

#[test]
fn selection_equal_to_the_snapshot_neither_mutates_nor_closes() -> Result<()> {
    let mut state = sample_state();
    click(&mut state, 0)?;
    assert_eq!(
        state
            .dropdown
            .last_clicked_cell()
            .map(|cell| cell.selected_value.as_str()),
        Some("Thomas"),
    );

    let outcome = state.apply_changes(&[dropdown_change(1, "Thomas")])?;
    assert_eq!(state.people()[1].name, "Susie");
    assert_eq!(outcome.suppressed, vec![(1, Suppression::MatchesSnapshot)]);
    assert_eq!(state.dropdown.open_index(), Some(0));
    Ok(())
}

#[test]
fn blank_row_scenario_commits_john() -> Result<()> {
    let mut state = sample_state();
    click(&mut state, 2)?;
    assert_eq!(state.dropdown.open_index(), Some(2));
    assert_eq!(
        state
            .dropdown
            .last_clicked_cell()
            .map(|cell| cell.selected_value.as_str()),
        Some(""),
    );

    state.apply_changes(&[dropdown_change(2, "John")])?;
    assert_eq!(state.people()[2], Person::new("John", ""));
    assert_eq!(state.dropdown, DropdownState::Closed);
    Ok(())
}

#[test]
fn open_close_echo_is_absorbed_by_the_guards() -> Result<()> {
    let mut state = sample_state();
    click(&mut state, 1)?;
    let echo = echo_change(&dropdown_cell(&state, 1)?);

    let outcome = state.apply_changes(&[echo])?;
    assert_eq!(outcome.suppressed, vec![(1, Suppression::Unchanged)]);
    assert_eq!(state.dropdown.open_index(), Some(1));
    assert_eq!(state.people(), sample_state().people());
    Ok(())
}

/// Known quirk, kept on purpose: the snapshot guard compares every selection
/// with the value the open dropdown showed when it was clicked, whatever row
/// the selection is for. Choosing that value anywhere while it is open is
/// swallowed, even when it is a real change for the target row.
#[test]
fn known_quirk_reselecting_the_open_time_value_is_suppressed() -> Result<()> {
    let mut state = sample_state();
    click(&mut state, 0)?;
    state.apply_changes(&[dropdown_change(0, "Jane")])?;
    assert_eq!(state.dropdown, DropdownState::Closed);

    click(&mut state, 1)?;
    let outcome =
        state.apply_changes(&[dropdown_change(1, "Susie"), dropdown_change(0, "Susie")])?;
    assert_eq!(
        outcome.suppressed,
        vec![(1, Suppression::Unchanged), (0, Suppression::MatchesSnapshot)],
    );
    assert_eq!(state.people()[0].name, "Jane");
    assert_eq!(state.dropdown.open_index(), Some(1));
    Ok(())
}

#[test]
fn header_changes_never_reach_records() -> Result<()> {
    let mut state = sample_state();
    let outcome = state.apply_changes(&[
        header_change(ColumnId::Name, "Given name"),
        header_change(ColumnId::Surname, "Family name"),
    ])?;
    assert!(outcome.is_noop());
    assert_eq!(state, sample_state());
    Ok(())
}

#[test]
fn out_of_range_batch_fails_and_applies_nothing() -> Result<()> {
    let mut state = sample_state();
    click(&mut state, 2)?;
    let before = state.clone();

    let error = state
        .apply_changes(&[dropdown_change(2, "John"), text_change(3, "Ghost")])
        .expect_err("row 3 does not exist");
    assert!(error.to_string().contains("row 3"));
    assert_eq!(state, before);
    Ok(())
}

#[test]
fn only_one_dropdown_is_ever_projected_open() -> Result<()> {
    let mut state = sample_state();
    for position in [0, 2, 1, 1, 0] {
        click(&mut state, position)?;
        assert!(open_rows(&state).len() <= 1);
    }
    assert_eq!(open_rows(&state), vec![0]);
    Ok(())
}
