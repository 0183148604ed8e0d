//! Room storage.
//!
//! The repository is the catalog's record of every room that has been
//! created. It is a plain keyed store: saving a room with an existing
//! number replaces the old identity.

use dashmap::DashMap;
use hallkeep_model::{Room, RoomNumber};

/// Saves and retrieves room identities.
///
/// Durability is up to the implementation; Hallkeep only ships the
/// in-memory one.
pub trait RoomRepository: Send + Sync + 'static {
    /// Stores `room`, replacing any room with the same number.
    fn save(&self, room: Room);

    /// Looks up a room by number.
    fn find_by_number(&self, number: RoomNumber) -> Option<Room>;

    /// Returns every stored room, in no particular order.
    fn find_all(&self) -> Vec<Room>;
}

/// A `DashMap`-backed repository, safe to share between threads.
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    store: DashMap<RoomNumber, Room>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl RoomRepository for InMemoryRoomRepository {
    fn save(&self, room: Room) {
        let number = room.number();
        if self.store.insert(number, room).is_some() {
            tracing::debug!(room = %number, "repository entry replaced");
        }
    }

    fn find_by_number(&self, number: RoomNumber) -> Option<Room> {
        self.store.get(&number).map(|entry| entry.value().clone())
    }

    fn find_all(&self) -> Vec<Room> {
        self.store.iter().map(|entry| entry.value().clone()).collect()
    }
}
