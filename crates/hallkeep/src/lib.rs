//! # Hallkeep
//!
//! Room occupancy lifecycle and room registry for shared housing: halls
//! of residence, dormitories, staff quarters.
//!
//! Hallkeep keeps two independent records per room:
//!
//! - its **identity** (number, category, monthly price) in a concurrent
//!   [`RoomRegistry`](hallkeep_registry::RoomRegistry)
//! - its **lifecycle** (vacant, occupied, under maintenance, plus who
//!   lives there) in a [`LifecycleDirectory`](hallkeep_lifecycle::LifecycleDirectory)
//!
//! The [`Hall`] facade creates rooms through a catalog factory and
//! registers them in both places.
//!
//! ## Quick Start
//!
//! ```rust
//! use hallkeep::prelude::*;
//!
//! let hall = Hall::builder().build_default();
//! hall.create_room(RoomNumber(101)).unwrap();
//!
//! let dir = hall.directory();
//! assert!(dir.assign(RoomNumber(101), Occupant::new("S1", "Ada")));
//! assert_eq!(dir.state_name(RoomNumber(101)), "OCCUPIED");
//! assert!(!dir.request_maintenance(RoomNumber(101)));
//! ```

mod error;
mod hall;

pub use error::HallkeepError;
pub use hall::{Hall, HallBuilder};

/// Everything needed to set up a hall and drive room lifecycles.
pub mod prelude {
    pub use crate::{Hall, HallBuilder, HallkeepError};
    pub use hallkeep_catalog::{
        CatalogConfig, CatalogError, InMemoryRoomRepository, RoomBuilder, RoomFactory, RoomRepository,
        StandardRoomFactory, SuperiorRoomFactory,
    };
    pub use hallkeep_lifecycle::{
        LifecycleContext, LifecycleDirectory, LifecycleState, ListenerHandle, OccupancySummary,
        Transition, UNKNOWN_STATE,
    };
    pub use hallkeep_model::{
        ModelError, MonthlyPrice, Occupant, OccupantId, Room, RoomCategory, RoomNumber,
    };
    pub use hallkeep_registry::{RegistryView, RoomRegistry};
}
