//! Room occupancy lifecycle for Hallkeep.
//!
//! Every registered room carries a small state machine that decides
//! whether it can be assigned, vacated, or taken out for maintenance.
//!
//! # Key types
//!
//! - [`LifecycleState`] — the three states and the transition table
//! - [`LifecycleContext`] — one room's current state, occupant and
//!   change listeners
//! - [`LifecycleDirectory`] — all contexts, addressed by room number
//! - [`Transition`] — what listeners are told on every real state change
//!
//! Rejected operations are not errors. Every lifecycle operation returns a
//! `bool`, and an unknown room number behaves like a rejected operation.

mod context;
mod directory;
mod state;

pub use context::{LifecycleContext, Listener, ListenerHandle, Transition};
pub use directory::{LifecycleDirectory, OccupancySummary, UNKNOWN_STATE};
pub use state::{LifecycleState, Outcome};
