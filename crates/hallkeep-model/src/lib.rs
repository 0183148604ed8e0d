//! Identity types shared by every Hallkeep crate.
//!
//! These are the immutable values the rest of the system passes around:
//! a room's number, category and monthly price, and the occupant that may
//! be assigned to it. Nothing in here changes after construction.
//!
//! # Key types
//!
//! - [`Room`] — validated, immutable room identity
//! - [`RoomNumber`] — the unique key for a room
//! - [`RoomCategory`] — `STANDARD`, `SUPERIOR`
//! - [`MonthlyPrice`] — a non-negative amount in whole cents
//! - [`Occupant`] — who lives in a room (equal by id only)

mod error;
mod types;

pub use error::ModelError;
pub use types::{MonthlyPrice, Occupant, OccupantId, Room, RoomCategory, RoomNumber};
