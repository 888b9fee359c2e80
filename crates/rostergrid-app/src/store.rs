// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};

use crate::{ColumnId, Person};

/// Canonical ordered record list. Positions are dense and zero-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleStore {
    people: Vec<Person>,
}

impl PeopleStore {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn get(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn person(&self, position: usize) -> Option<&Person> {
        self.people.get(position)
    }

    /// Sets one field of the record at `position`. An out-of-range position
    /// means the caller skipped validation and is reported as an error.
    pub fn replace_at(
        &mut self,
        position: usize,
        column: ColumnId,
        value: impl Into<String>,
    ) -> Result<()> {
        let len = self.people.len();
        let Some(person) = self.people.get_mut(position) else {
            bail!("row {position} is out of range for {len} records -- grid emitted an unknown row");
        };
        *person.field_mut(column) = value.into();
        Ok(())
    }

    pub fn into_inner(self) -> Vec<Person> {
        self.people
    }
}

impl From<Vec<Person>> for PeopleStore {
    fn from(people: Vec<Person>) -> Self {
        Self::new(people)
    }
}

#[cfg(test)]
mod tests {
    use super::PeopleStore;
    use crate::{ColumnId, Person, initial_people};
    use anyhow::Result;

    #[test]
    fn replace_at_sets_only_the_named_field() -> Result<()> {
        let mut store = PeopleStore::new(initial_people());
        store.replace_at(1, ColumnId::Surname, "Quatro")?;

        assert_eq!(store.get()[1], Person::new("Susie", "Quatro"));
        assert_eq!(store.get()[0], Person::new("Thomas", "Goldman"));
        assert_eq!(store.get()[2], Person::default());
        Ok(())
    }

    #[test]
    fn replace_at_accepts_empty_values() -> Result<()> {
        let mut store = PeopleStore::new(initial_people());
        store.replace_at(0, ColumnId::Surname, "")?;
        assert_eq!(store.get()[0].surname, "");
        Ok(())
    }

    #[test]
    fn replace_at_rejects_out_of_range_position() {
        let mut store = PeopleStore::new(initial_people());
        let error = store
            .replace_at(3, ColumnId::Name, "Jane")
            .expect_err("position 3 is past the end");
        assert!(error.to_string().contains("row 3 is out of range for 3 records"));
        assert_eq!(store.get(), initial_people().as_slice());
    }

    #[test]
    fn empty_store_reports_empty() {
        let store = PeopleStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.person(0).is_none());
    }
}
