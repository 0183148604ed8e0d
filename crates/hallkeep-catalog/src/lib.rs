//! Room catalog for Hallkeep.
//!
//! The catalog is where room identities come from and where they are
//! kept. It knows about category default pricing and nothing about
//! occupancy:
//!
//! 1. **Building** — [`RoomBuilder`] and [`create_room`] apply category
//!    defaults from [`CatalogConfig`] and validate the result
//! 2. **Factories** — [`RoomFactory`] turns a room number into a room,
//!    one implementation per category
//! 3. **Storage** — [`RoomRepository`] saves and finds rooms;
//!    [`InMemoryRoomRepository`] is the default implementation
//!
//! # How it fits in the stack
//!
//! ```text
//! Hall facade (above)  ← creates rooms, then registers them for lifecycle
//!     ↕
//! Catalog (this crate)  ← builds and stores immutable room identities
//!     ↕
//! Model (below)  ← Room, RoomNumber, RoomCategory, MonthlyPrice
//! ```

mod builder;
mod config;
mod error;
mod factory;
mod repository;

pub use builder::{RoomBuilder, create_room};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use factory::{RoomFactory, StandardRoomFactory, SuperiorRoomFactory};
pub use repository::{InMemoryRoomRepository, RoomRepository};
