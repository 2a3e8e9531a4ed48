//! Roster grid and roster context.
//!
//! [`RosterGrid`] maps each (day, shift) cell to the people assigned to
//! it, in assignment order. [`Roster`] owns both the registered people
//! and the grid, and is the only place where assignments are made, so
//! the two can never drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Person, ShiftKind, Weekday, DAYS_PER_WEEK, SHIFTS_PER_DAY};
use crate::config::MAX_DAYS_PER_WEEK;
use crate::error::{Result, RosterError};
use crate::validation::validate_persons;

/// Identifier of a person: their registration index in a [`Roster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(pub usize);

impl PersonId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fixed 7 x 3 grid of assigned people.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterGrid {
    cells: [[Vec<PersonId>; SHIFTS_PER_DAY]; DAYS_PER_WEEK],
}

impl RosterGrid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// People assigned to a cell, in assignment order.
    pub fn cell(&self, day: Weekday, shift: ShiftKind) -> &[PersonId] {
        &self.cells[day.index()][shift.index()]
    }

    /// Number of people in a cell.
    #[inline]
    pub fn count(&self, day: Weekday, shift: ShiftKind) -> usize {
        self.cell(day, shift).len()
    }

    /// Whether a cell has room below `capacity`.
    #[inline]
    pub fn has_room(&self, day: Weekday, shift: ShiftKind, capacity: usize) -> bool {
        self.count(day, shift) < capacity
    }

    /// Total assignments across all cells.
    pub fn total_assignments(&self) -> usize {
        self.cells.iter().flatten().map(Vec::len).sum()
    }

    /// Iterates every cell in (day, shift) order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, ShiftKind, &[PersonId])> + '_ {
        Weekday::iter().flat_map(move |day| {
            ShiftKind::iter().map(move |shift| (day, shift, self.cell(day, shift)))
        })
    }

    fn push(&mut self, day: Weekday, shift: ShiftKind, person: PersonId) {
        self.cells[day.index()][shift.index()].push(person);
    }

    fn clear(&mut self) {
        self.cells.iter_mut().flatten().for_each(Vec::clear);
    }
}

/// The people being scheduled together with their shared grid.
///
/// People keep their registration order; it is the order the scheduler
/// visits them in.
///
/// # Example
///
/// ```
/// use u_roster::models::{Person, Roster, ShiftKind, Weekday};
///
/// let mut roster = Roster::new();
/// let ada = roster.add_person(Person::new("Ada")).unwrap();
/// assert!(roster.add_person(Person::new("ADA")).is_err());
///
/// assert!(roster.try_assign(ada, Weekday::Monday, ShiftKind::Morning, 8));
/// assert_eq!(roster.grid().cell(Weekday::Monday, ShiftKind::Morning), &[ada]);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Roster {
    persons: Vec<Person>,
    grid: RosterGrid,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from already collected people.
    ///
    /// Runs the full input validation and reports every problem at once.
    /// Names are stored trimmed. Existing assignments are discarded.
    pub fn from_persons(mut persons: Vec<Person>) -> Result<Self> {
        validate_persons(&persons).map_err(RosterError::Validation)?;
        for person in &mut persons {
            person.name = person.name.trim().to_string();
            person.reset_schedule();
        }
        Ok(Self {
            persons,
            grid: RosterGrid::new(),
        })
    }

    /// Registers a person and returns their identifier.
    ///
    /// Names must be non-empty and unique ignoring case, and the weekly
    /// cap at most [`MAX_DAYS_PER_WEEK`]. Existing assignments on the
    /// record are discarded.
    pub fn add_person(&mut self, mut person: Person) -> Result<PersonId> {
        let name = person.name.trim().to_string();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.find_by_name(&name).is_some() {
            return Err(RosterError::DuplicateName(name));
        }
        if person.max_days() > MAX_DAYS_PER_WEEK {
            return Err(RosterError::CapOutOfRange {
                name,
                max_days: person.max_days(),
            });
        }
        person.name = name;
        person.reset_schedule();
        let id = PersonId(self.persons.len());
        self.persons.push(person);
        Ok(id)
    }

    /// Sets a preference for a registered person.
    pub fn set_preference(&mut self, id: PersonId, day: Weekday, shift: ShiftKind) -> Result<()> {
        let person = self
            .persons
            .get_mut(id.index())
            .ok_or(RosterError::UnknownPerson(id))?;
        person.set_preference(day, shift);
        Ok(())
    }

    /// Looks up a person.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(id.index())
    }

    /// Finds a person by name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<PersonId> {
        self.persons
            .iter()
            .position(|p| p.name_matches(name))
            .map(PersonId)
    }

    /// All people in registration order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Identifiers and records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> + '_ {
        self.persons
            .iter()
            .enumerate()
            .map(|(i, p)| (PersonId(i), p))
    }

    /// Number of registered people.
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Whether no one is registered.
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// The assignment grid.
    pub fn grid(&self) -> &RosterGrid {
        &self.grid
    }

    /// Clears every assignment and empties the grid. Preferences stay.
    pub fn reset(&mut self) {
        self.persons.iter_mut().for_each(Person::reset_schedule);
        self.grid.clear();
    }

    /// Whether `id` could be placed on (day, shift) under `capacity`.
    pub fn can_assign(&self, id: PersonId, day: Weekday, shift: ShiftKind, capacity: usize) -> bool {
        match self.person(id) {
            Some(person) => person.can_work_day(day) && self.grid.has_room(day, shift, capacity),
            None => false,
        }
    }

    /// Assigns `id` to (day, shift) if the person can work that day and
    /// the cell has room below `capacity`.
    ///
    /// The person record and the grid are updated together or not at all.
    pub fn try_assign(
        &mut self,
        id: PersonId,
        day: Weekday,
        shift: ShiftKind,
        capacity: usize,
    ) -> bool {
        if !self.grid.has_room(day, shift, capacity) {
            return false;
        }
        let Some(person) = self.persons.get_mut(id.index()) else {
            return false;
        };
        if !person.assign_shift(day, shift) {
            return false;
        }
        self.grid.push(day, shift, id);
        true
    }

    /// People who can still take a shift on `day`, in registration order.
    pub fn available_on(&self, day: Weekday) -> Vec<PersonId> {
        self.iter()
            .filter(|(_, p)| p.can_work_day(day))
            .map(|(id, _)| id)
            .collect()
    }

    /// Checks that the grid and every person record agree.
    ///
    /// True iff each person appears in exactly the cells matching their
    /// assignments, with no duplicates and no unknown identifiers.
    pub fn is_consistent(&self) -> bool {
        let mut seen = 0usize;
        for (day, shift, cell) in self.grid.iter() {
            for &id in cell {
                match self.person(id) {
                    Some(p) if p.assigned_shift(day) == Some(shift) => seen += 1,
                    _ => return false,
                }
            }
        }
        let expected: usize = self.persons.iter().map(|p| p.assignments().len()).sum();
        seen == expected
            && self
                .persons
                .iter()
                .all(|p| p.days_worked() as usize == p.assignments().len())
    }
}
