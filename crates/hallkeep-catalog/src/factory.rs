//! Room factories: one room number in, one room identity out.
//!
//! Hallkeep doesn't decide which kind of room a new number should become.
//! That's a policy of whoever sets up the hall: a floor of standard rooms,
//! a wing of superior ones, or something custom.
//!
//! The [`RoomFactory`] trait is the seam for that policy. The `Hall`
//! facade is generic over it, so tests can plug in a closure and
//! production code can plug in a category factory, without changing the
//! creation flow.

use hallkeep_model::{ModelError, Room, RoomNumber};

use crate::{CatalogConfig, RoomBuilder};

/// Turns a room number into a validated room identity.
///
/// `Send + Sync + 'static` so a factory can live inside a shared `Hall`
/// that is used from several threads.
///
/// Any `Fn(RoomNumber) -> Result<Room, ModelError>` closure is a factory:
///
/// ```rust
/// use hallkeep_catalog::RoomFactory;
/// use hallkeep_model::{MonthlyPrice, Room, RoomCategory, RoomNumber};
///
/// let penthouse = |n: RoomNumber| {
///     Room::new(n, RoomCategory::Superior, MonthlyPrice::from_units(2_000))
/// };
/// let room = penthouse.create(RoomNumber(900)).unwrap();
/// assert_eq!(room.monthly_price(), MonthlyPrice::from_units(2_000));
/// ```
pub trait RoomFactory: Send + Sync + 'static {
    /// Builds the room for `number`.
    ///
    /// # Errors
    /// Returns a [`ModelError`] if the room fails validation (e.g. a zero
    /// room number).
    fn create(&self, number: RoomNumber) -> Result<Room, ModelError>;
}

impl<F> RoomFactory for F
where
    F: Fn(RoomNumber) -> Result<Room, ModelError> + Send + Sync + 'static,
{
    fn create(&self, number: RoomNumber) -> Result<Room, ModelError> {
        self(number)
    }
}

/// Creates `STANDARD` rooms at the configured default price.
#[derive(Debug, Clone)]
pub struct StandardRoomFactory {
    config: CatalogConfig,
}

impl StandardRoomFactory {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }
}

impl Default for StandardRoomFactory {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl RoomFactory for StandardRoomFactory {
    fn create(&self, number: RoomNumber) -> Result<Room, ModelError> {
        RoomBuilder::standard(&self.config).number(number).build()
    }
}

/// Creates `SUPERIOR` rooms at the configured default price.
#[derive(Debug, Clone)]
pub struct SuperiorRoomFactory {
    config: CatalogConfig,
}

impl SuperiorRoomFactory {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }
}

impl Default for SuperiorRoomFactory {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl RoomFactory for SuperiorRoomFactory {
    fn create(&self, number: RoomNumber) -> Result<Room, ModelError> {
        RoomBuilder::superior(&self.config).number(number).build()
    }
}

#[cfg(test)]
mod tests {
    use hallkeep_model::{MonthlyPrice, RoomCategory};

    use super::*;

    #[test]
    fn test_standard_factory_creates_standard_room() {
        let room = StandardRoomFactory::default().create(RoomNumber(101)).unwrap();
        assert_eq!(room.category(), RoomCategory::Standard);
        assert_eq!(room.monthly_price(), MonthlyPrice::from_units(700));
    }

    #[test]
    fn test_superior_factory_uses_configured_price() {
        let config = CatalogConfig {
            superior_monthly_price: MonthlyPrice::from_units(1_100),
            ..CatalogConfig::default()
        };
        let room = SuperiorRoomFactory::new(config).create(RoomNumber(201)).unwrap();
        assert_eq!(room.category(), RoomCategory::Superior);
        assert_eq!(room.monthly_price(), MonthlyPrice::from_units(1_100));
    }

    #[test]
    fn test_factory_rejects_zero_number() {
        let result = StandardRoomFactory::default().create(RoomNumber(0));
        assert_eq!(result, Err(ModelError::InvalidRoomNumber(0)));
    }
}
