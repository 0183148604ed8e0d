//! The room registry: which rooms exist and what they are.
//!
//! The registry answers "does room N exist, and what are its static
//! attributes?" It knows nothing about occupancy. That lives in
//! `hallkeep-lifecycle`, keyed by the same numbers but stored separately.
//!
//! # One registry per process, without a global
//!
//! A process should have a single logical registry, but there is no
//! `static` instance here. Build one at startup, wrap it in an `Arc`, and
//! hand clones of the `Arc` to whoever needs it. Tests get isolation for
//! free by building their own.
//!
//! # Concurrency
//!
//! Backed by a [`DashMap`], a sharded concurrent hash map. Any number of
//! threads may call [`register`](RoomRegistry::register),
//! [`find`](RoomRegistry::find) and
//! [`all_entries`](RoomRegistry::all_entries) at once. A `register` that
//! has returned is visible to every later `find`, from any thread. Two
//! racing `register` calls for the same number leave whichever finished
//! last.

use std::collections::HashMap;
use std::collections::hash_map;
use std::ops::Index;

use dashmap::DashMap;
use hallkeep_model::{Room, RoomNumber};
use serde::Serialize;

/// Concurrency-safe store of room identities, keyed by room number.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: DashMap<RoomNumber, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `room` under its number. Last write wins.
    ///
    /// Returns the identity it replaced, if any.
    pub fn register(&self, room: Room) -> Option<Room> {
        let number = room.number();
        let previous = self.rooms.insert(number, room);
        match &previous {
            Some(_) => tracing::debug!(room = %number, "registry entry replaced"),
            None => tracing::debug!(room = %number, "room added to registry"),
        }
        previous
    }

    pub fn find(&self, number: RoomNumber) -> Option<Room> {
        self.rooms.get(&number).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, number: RoomNumber) -> bool {
        self.rooms.contains_key(&number)
    }

    /// A read-only view of every entry.
    ///
    /// The view is a copy taken entry by entry, so it is internally
    /// consistent per room but may miss registrations that race with it.
    /// It has no mutating methods: changing the registry always goes
    /// through [`register`](Self::register).
    pub fn all_entries(&self) -> RegistryView {
        RegistryView {
            rooms: self
                .rooms
                .iter()
                .map(|entry| (*entry.key(), entry.value().clone()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// An immutable copy of the registry's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegistryView {
    rooms: HashMap<RoomNumber, Room>,
}

impl RegistryView {
    pub fn get(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.get(&number)
    }

    pub fn contains(&self, number: RoomNumber) -> bool {
        self.rooms.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, RoomNumber, Room> {
        self.rooms.iter()
    }

    /// Room numbers, ascending.
    pub fn numbers(&self) -> Vec<RoomNumber> {
        let mut numbers: Vec<RoomNumber> = self.rooms.keys().copied().collect();
        numbers.sort_unstable();
        numbers
    }
}

impl Index<RoomNumber> for RegistryView {
    type Output = Room;

    /// # Panics
    /// Panics if `number` is not in the view.
    fn index(&self, number: RoomNumber) -> &Room {
        &self.rooms[&number]
    }
}

impl<'a> IntoIterator for &'a RegistryView {
    type Item = (&'a RoomNumber, &'a Room);
    type IntoIter = hash_map::Iter<'a, RoomNumber, Room>;

    fn into_iter(self) -> Self::IntoIter {
        self.rooms.iter()
    }
}

#[cfg(test)]
mod tests {
    use hallkeep_model::{MonthlyPrice, RoomCategory};

    use super::*;

    fn room(n: u32, category: RoomCategory, units: u64) -> Room {
        Room::new(RoomNumber(n), category, MonthlyPrice::from_units(units)).unwrap()
    }

    #[test]
    fn test_register_then_find_returns_equal_room() {
        let registry = RoomRegistry::new();
        let r = room(101, RoomCategory::Standard, 700);

        assert_eq!(registry.register(r.clone()), None);

        assert_eq!(registry.find(RoomNumber(101)), Some(r));
        assert!(registry.contains(RoomNumber(101)));
    }

    #[test]
    fn test_register_same_number_last_write_wins() {
        let registry = RoomRegistry::new();
        let first = room(101, RoomCategory::Standard, 700);
        let second = room(101, RoomCategory::Superior, 950);

        registry.register(first.clone());
        let replaced = registry.register(second.clone());

        assert_eq!(replaced, Some(first));
        assert_eq!(registry.find(RoomNumber(101)), Some(second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_unknown_returns_none() {
        let registry = RoomRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.find(RoomNumber(999)), None);
        assert!(!registry.contains(RoomNumber(999)));
    }

    #[test]
    fn test_all_entries_is_detached_from_later_writes() {
        let registry = RoomRegistry::new();
        registry.register(room(1, RoomCategory::Standard, 700));
        let view = registry.all_entries();

        registry.register(room(2, RoomCategory::Standard, 700));

        assert_eq!(view.len(), 1);
        assert_eq!(view.numbers(), vec![RoomNumber(1)]);
        assert_eq!(registry.all_entries().len(), 2);
    }

    #[test]
    fn test_view_lookup_and_iteration() {
        let registry = RoomRegistry::new();
        registry.register(room(1, RoomCategory::Standard, 700));
        registry.register(room(2, RoomCategory::Superior, 950));
        let view = registry.all_entries();

        assert_eq!(view[RoomNumber(2)].category(), RoomCategory::Superior);
        assert_eq!(view.get(RoomNumber(3)), None);
        assert!(view.contains(RoomNumber(1)));
        assert!(!view.is_empty());
        let total: u64 = (&view).into_iter().map(|(_, r)| r.monthly_price().cents()).sum();
        assert_eq!(total, 165_000);
        assert_eq!(view.iter().count(), 2);
    }
}
