//! Per-room lifecycle context: current state, occupant and listeners.
//!
//! # Concurrency
//!
//! A context is shared (`Arc<LifecycleContext>`) and may be driven from
//! several threads. Three locks, each with one job:
//!
//! - `guard` serialises whole operations. Only one assign/vacate/
//!   maintenance call runs per room at a time, from decision through
//!   listener notification, so listeners see transitions in the order
//!   they happened and a transition is never decided on stale state.
//! - `slot` holds the state and occupant. It is write-locked only while
//!   the decision is applied and released before listeners run, which is
//!   what lets a listener read `state()` or `assigned_occupant()`.
//! - `listeners` is copied out before notification, so a listener may
//!   add or remove listeners without deadlocking.
//!
//! A listener must not call a mutating operation on the context that is
//! notifying it: that re-enters `guard` and deadlocks.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use hallkeep_model::{Occupant, Room, RoomNumber};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use crate::{LifecycleState, Outcome};

/// A real state change, as delivered to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub room: RoomNumber,
    pub from: LifecycleState,
    pub to: LifecycleState,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A state-change callback.
///
/// Called synchronously on the thread that triggered the transition,
/// before the triggering operation returns. A panic inside a listener is
/// not caught: it unwinds into the caller, after the state change has
/// been applied, and skips the listeners registered after it.
pub type Listener = Arc<dyn Fn(&Transition) + Send + Sync>;

/// Identifies a registered listener, for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

#[derive(Debug)]
struct Slot {
    state: LifecycleState,
    /// `Some` exactly when `state` is `Occupied`.
    occupant: Option<Occupant>,
}

/// The mutable lifecycle of one room.
///
/// Created `Vacant` with no occupant. Changed only through
/// [`assign`](Self::assign), [`vacate`](Self::vacate),
/// [`request_maintenance`](Self::request_maintenance) and
/// [`complete_maintenance`](Self::complete_maintenance). Each returns
/// `true` on success, including successful no-ops, and `false` when the
/// current state rejects the request.
pub struct LifecycleContext {
    room: Room,
    guard: Mutex<()>,
    slot: RwLock<Slot>,
    listeners: RwLock<Vec<(ListenerHandle, Listener)>>,
    next_listener: AtomicU64,
}

impl LifecycleContext {
    /// A fresh, vacant context for `room`.
    pub fn new(room: Room) -> Self {
        Self {
            room,
            guard: Mutex::new(()),
            slot: RwLock::new(Slot {
                state: LifecycleState::INITIAL,
                occupant: None,
            }),
            listeners: RwLock::new(Vec::new()),
            next_listener: AtomicU64::new(1),
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn state(&self) -> LifecycleState {
        self.slot.read().state
    }

    /// The symbolic name of the current state, e.g. `"VACANT"`.
    pub fn state_name(&self) -> &'static str {
        self.state().name()
    }

    pub fn assigned_occupant(&self) -> Option<Occupant> {
        self.slot.read().occupant.clone()
    }

    // -- Lifecycle operations ---------------------------------------------

    /// Assigns `occupant` to the room.
    ///
    /// Accepts an `Occupant` or an `Option<Occupant>`; `None` is always
    /// rejected. Succeeds only from `Vacant`.
    pub fn assign(&self, occupant: impl Into<Option<Occupant>>) -> bool {
        let occupant = occupant.into();
        let has_occupant = occupant.is_some();
        self.run(|state| state.on_assign(has_occupant), occupant)
    }

    /// Vacates the room, clearing the occupant. A no-op success when
    /// already vacant.
    pub fn vacate(&self) -> bool {
        self.run(LifecycleState::on_vacate, None)
    }

    /// Takes a vacant room out for maintenance. A no-op success when
    /// already under maintenance.
    pub fn request_maintenance(&self) -> bool {
        self.run(LifecycleState::on_request_maintenance, None)
    }

    /// Returns a room under maintenance to `Vacant`. A no-op success when
    /// already vacant.
    pub fn complete_maintenance(&self) -> bool {
        self.run(LifecycleState::on_complete_maintenance, None)
    }

    // -- Listeners --------------------------------------------------------

    /// Registers a listener. Listeners are called in registration order.
    pub fn add_listener<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&Transition) + Send + Sync + 'static,
    {
        let handle = ListenerHandle(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((handle, Arc::new(listener)));
        handle
    }

    /// Removes a listener. Returns `false` if the handle is not registered
    /// (already removed, or from another context).
    pub fn remove_listener(&self, handle: ListenerHandle) -> bool {
        let mut listeners = self.listeners.write();
        match listeners.iter().position(|(h, _)| *h == handle) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    // -- Internals --------------------------------------------------------

    /// Decides and applies one operation, then notifies listeners if the
    /// state actually changed.
    ///
    /// `incoming` is the occupant to store if the room ends up `Occupied`.
    fn run(
        &self,
        decide: impl FnOnce(LifecycleState) -> Outcome,
        incoming: Option<Occupant>,
    ) -> bool {
        let _serial = self.guard.lock();

        let transition = {
            let mut slot = self.slot.write();
            let from = slot.state;
            let to = match decide(from) {
                Outcome::Rejected => return false,
                Outcome::Unchanged => return true,
                Outcome::MoveTo(to) => to,
            };
            slot.state = to;
            slot.occupant = match to {
                LifecycleState::Occupied => incoming,
                LifecycleState::Vacant | LifecycleState::Maintenance => None,
            };
            Transition {
                room: self.room.number(),
                from,
                to,
            }
        };

        tracing::info!(
            room = %transition.room,
            from = %transition.from,
            to = %transition.to,
            "room state changed"
        );
        self.notify(&transition);
        true
    }

    fn notify(&self, transition: &Transition) {
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(transition);
        }
    }
}

impl fmt::Debug for LifecycleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.read();
        f.debug_struct("LifecycleContext")
            .field("room", &self.room)
            .field("state", &slot.state)
            .field("occupant", &slot.occupant)
            .field("listeners", &self.listener_count())
            .finish()
    }
}
