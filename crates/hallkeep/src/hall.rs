//! `Hall` builder and room creation use case.
//!
//! This ties the layers together: catalog → registry → lifecycle. The
//! registry and directory are not transactionally linked; `Hall` is the
//! one place that keeps them in step when a room is created.

use std::sync::Arc;

use hallkeep_catalog::{
    CatalogConfig, InMemoryRoomRepository, RoomFactory, RoomRepository, StandardRoomFactory,
};
use hallkeep_lifecycle::{LifecycleDirectory, OccupancySummary};
use hallkeep_model::{MonthlyPrice, Room, RoomCategory, RoomNumber};
use hallkeep_registry::RoomRegistry;

use crate::HallkeepError;

/// Builder for configuring a [`Hall`].
///
/// By default the hall gets a fresh registry and directory. Pass shared
/// ones in to have several halls (or other services) see the same
/// process-wide registry.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use hallkeep::prelude::*;
///
/// let registry = Arc::new(RoomRegistry::new());
/// let config = CatalogConfig::default();
/// let hall = Hall::builder()
///     .catalog_config(config.clone())
///     .registry(Arc::clone(&registry))
///     .build(SuperiorRoomFactory::new(config), InMemoryRoomRepository::new());
///
/// hall.create_room(RoomNumber(201)).unwrap();
/// assert!(registry.contains(RoomNumber(201)));
/// ```
#[derive(Debug, Default)]
pub struct HallBuilder {
    config: CatalogConfig,
    registry: Option<Arc<RoomRegistry>>,
    directory: Option<Arc<LifecycleDirectory>>,
}

impl HallBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the catalog configuration used for category default prices.
    pub fn catalog_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses an existing registry instead of a fresh one.
    pub fn registry(mut self, registry: Arc<RoomRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Uses an existing lifecycle directory instead of a fresh one.
    pub fn directory(mut self, directory: Arc<LifecycleDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Builds a hall with the given factory and repository.
    pub fn build<F, R>(self, factory: F, repository: R) -> Hall<F, R>
    where
        F: RoomFactory,
        R: RoomRepository,
    {
        Hall {
            factory,
            repository,
            registry: self.registry.unwrap_or_default(),
            directory: self.directory.unwrap_or_default(),
            config: self.config,
        }
    }

    /// Builds a hall that creates `STANDARD` rooms and keeps them in
    /// memory.
    pub fn build_default(self) -> Hall<StandardRoomFactory, InMemoryRoomRepository> {
        let factory = StandardRoomFactory::new(self.config.clone());
        self.build(factory, InMemoryRoomRepository::new())
    }
}

/// A set of rooms with their identities and lifecycles.
///
/// Lifecycle operations go through [`directory()`](Self::directory);
/// identity lookups go through [`registry()`](Self::registry) or
/// [`find_by_number()`](Self::find_by_number).
pub struct Hall<F: RoomFactory, R: RoomRepository> {
    factory: F,
    repository: R,
    registry: Arc<RoomRegistry>,
    directory: Arc<LifecycleDirectory>,
    config: CatalogConfig,
}

impl Hall<StandardRoomFactory, InMemoryRoomRepository> {
    /// Creates a new builder.
    pub fn builder() -> HallBuilder {
        HallBuilder::new()
    }
}

impl<F, R> Hall<F, R>
where
    F: RoomFactory,
    R: RoomRepository,
{
    /// Creates a room with the hall's factory and registers it everywhere:
    /// repository, registry, and lifecycle directory (as `Vacant`).
    ///
    /// Creating an existing number replaces it in all three, which resets
    /// its lifecycle.
    ///
    /// # Errors
    /// Returns [`HallkeepError::Model`] if the factory rejects the number.
    /// Nothing is registered in that case.
    pub fn create_room(&self, number: RoomNumber) -> Result<Room, HallkeepError> {
        let room = self.factory.create(number)?;
        self.admit(room.clone());
        Ok(room)
    }

    /// Like [`create_room`](Self::create_room), but with an explicit
    /// category and optional price override instead of the factory.
    ///
    /// # Errors
    /// Returns [`HallkeepError::Model`] if `number` is zero.
    pub fn create_custom_room(
        &self,
        number: RoomNumber,
        category: RoomCategory,
        price: Option<MonthlyPrice>,
    ) -> Result<Room, HallkeepError> {
        let room = hallkeep_catalog::create_room(number, Some(category), price, &self.config)?;
        self.admit(room.clone());
        Ok(room)
    }

    /// Every room in the repository, ordered by number.
    pub fn list_all(&self) -> Vec<Room> {
        let mut rooms = self.repository.find_all();
        rooms.sort_unstable_by_key(Room::number);
        rooms
    }

    /// Looks a room up in the registry.
    pub fn find_by_number(&self, number: RoomNumber) -> Option<Room> {
        self.registry.find(number)
    }

    pub fn occupancy(&self) -> OccupancySummary {
        self.directory.occupancy()
    }

    pub fn registry(&self) -> &Arc<RoomRegistry> {
        &self.registry
    }

    pub fn directory(&self) -> &Arc<LifecycleDirectory> {
        &self.directory
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn admit(&self, room: Room) {
        let number = room.number();
        let category = room.category();
        self.repository.save(room.clone());
        self.registry.register(room.clone());
        self.directory.register(room);
        tracing::info!(room = %number, %category, "room created");
    }
}
