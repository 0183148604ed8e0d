//! Lifecycle directory: every room's context, addressed by room number.

use std::collections::HashMap;
use std::sync::Arc;

use hallkeep_model::{Occupant, Room, RoomNumber};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{LifecycleContext, LifecycleState};

/// What [`LifecycleDirectory::state_name`] returns for a room it doesn't
/// know.
pub const UNKNOWN_STATE: &str = "UNKNOWN";

/// Room counts per lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancySummary {
    pub vacant: usize,
    pub occupied: usize,
    pub maintenance: usize,
}

impl OccupancySummary {
    pub fn total(&self) -> usize {
        self.vacant + self.occupied + self.maintenance
    }

    fn count(&mut self, state: LifecycleState) {
        match state {
            LifecycleState::Vacant => self.vacant += 1,
            LifecycleState::Occupied => self.occupied += 1,
            LifecycleState::Maintenance => self.maintenance += 1,
        }
    }
}

/// Owns one [`LifecycleContext`] per registered room.
///
/// This is the entry point for lifecycle operations from higher layers.
/// Every operation takes a room number; an unknown number is treated as a
/// rejected operation (`false`, `None`, or [`UNKNOWN_STATE`]) rather than
/// an error, so bulk callers working from stale room lists don't need an
/// existence check per call.
///
/// The directory is safe to share across threads. The map lock is held
/// only long enough to find a context; the operation itself runs under
/// that room's own guard, so work on different rooms never waits on each
/// other.
#[derive(Debug, Default)]
pub struct LifecycleDirectory {
    contexts: RwLock<HashMap<RoomNumber, Arc<LifecycleContext>>>,
}

impl LifecycleDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `room` with a fresh, vacant context and returns it.
    ///
    /// Re-registering a number replaces the previous context, including its
    /// occupant and listeners. Holders of the old `Arc` keep a detached
    /// context that the directory no longer routes to.
    pub fn register(&self, room: Room) -> Arc<LifecycleContext> {
        let number = room.number();
        let context = Arc::new(LifecycleContext::new(room));
        let previous = self
            .contexts
            .write()
            .insert(number, Arc::clone(&context));

        if previous.is_some() {
            tracing::warn!(room = %number, "room re-registered, previous lifecycle discarded");
        } else {
            tracing::debug!(room = %number, "room registered");
        }
        context
    }

    pub fn lookup(&self, number: RoomNumber) -> Option<Arc<LifecycleContext>> {
        self.contexts.read().get(&number).cloned()
    }

    // -- Lifecycle operations by room number ------------------------------

    pub fn assign(&self, number: RoomNumber, occupant: impl Into<Option<Occupant>>) -> bool {
        self.lookup(number)
            .is_some_and(|ctx| ctx.assign(occupant))
    }

    pub fn vacate(&self, number: RoomNumber) -> bool {
        self.lookup(number).is_some_and(|ctx| ctx.vacate())
    }

    pub fn request_maintenance(&self, number: RoomNumber) -> bool {
        self.lookup(number)
            .is_some_and(|ctx| ctx.request_maintenance())
    }

    pub fn complete_maintenance(&self, number: RoomNumber) -> bool {
        self.lookup(number)
            .is_some_and(|ctx| ctx.complete_maintenance())
    }

    // -- Queries ----------------------------------------------------------

    /// The room's state name, or [`UNKNOWN_STATE`] if not registered.
    pub fn state_name(&self, number: RoomNumber) -> &'static str {
        self.lookup(number)
            .map_or(UNKNOWN_STATE, |ctx| ctx.state_name())
    }

    pub fn state(&self, number: RoomNumber) -> Option<LifecycleState> {
        self.lookup(number).map(|ctx| ctx.state())
    }

    pub fn assigned_occupant(&self, number: RoomNumber) -> Option<Occupant> {
        self.lookup(number)
            .and_then(|ctx| ctx.assigned_occupant())
    }

    /// A copy of the number → context map.
    ///
    /// Registrations made after this returns are not reflected in it. The
    /// contexts themselves are shared, so their states keep moving.
    pub fn snapshot(&self) -> HashMap<RoomNumber, Arc<LifecycleContext>> {
        self.contexts.read().clone()
    }

    /// All registered room numbers, ascending.
    pub fn room_numbers(&self) -> Vec<RoomNumber> {
        let mut numbers: Vec<RoomNumber> = self.contexts.read().keys().copied().collect();
        numbers.sort_unstable();
        numbers
    }

    /// Counts rooms per state.
    ///
    /// Each room's state is read independently, so under concurrent
    /// transitions the counts are a best-effort picture, not an atomic cut.
    pub fn occupancy(&self) -> OccupancySummary {
        let mut summary = OccupancySummary::default();
        for ctx in self.snapshot().values() {
            summary.count(ctx.state());
        }
        summary
    }

    pub fn len(&self) -> usize {
        self.contexts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.read().is_empty()
    }
}
