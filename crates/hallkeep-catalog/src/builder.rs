//! Fluent construction of room identities with category defaults.

use hallkeep_model::{ModelError, MonthlyPrice, Room, RoomCategory, RoomNumber};

use crate::CatalogConfig;

/// Builder for [`Room`] values.
///
/// Start from a category preset ([`standard`](Self::standard),
/// [`superior`](Self::superior)) to get that category's default price, or
/// from [`new`](Self::new) to supply everything yourself. Any preset value
/// can be overridden before building.
///
/// `build` borrows the builder, so one configured builder can stamp out
/// several equal rooms.
///
/// # Example
///
/// ```rust
/// use hallkeep_catalog::{CatalogConfig, RoomBuilder};
/// use hallkeep_model::{MonthlyPrice, RoomNumber};
///
/// let config = CatalogConfig::default();
/// let room = RoomBuilder::standard(&config)
///     .number(RoomNumber(101))
///     .price(MonthlyPrice::from_units(800))
///     .build()
///     .unwrap();
/// assert_eq!(room.monthly_price(), MonthlyPrice::from_units(800));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoomBuilder {
    number: Option<RoomNumber>,
    category: Option<RoomCategory>,
    price: Option<MonthlyPrice>,
}

impl RoomBuilder {
    /// A blank builder. Category and price must be set before building.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preset to `category` at its default price.
    pub fn for_category(category: RoomCategory, config: &CatalogConfig) -> Self {
        Self {
            number: None,
            category: Some(category),
            price: Some(config.default_price(category)),
        }
    }

    /// Preset for `STANDARD` rooms.
    pub fn standard(config: &CatalogConfig) -> Self {
        Self::for_category(RoomCategory::Standard, config)
    }

    /// Preset for `SUPERIOR` rooms.
    pub fn superior(config: &CatalogConfig) -> Self {
        Self::for_category(RoomCategory::Superior, config)
    }

    pub fn number(mut self, number: RoomNumber) -> Self {
        self.number = Some(number);
        self
    }

    /// Sets the category. Does not change a price that is already set.
    pub fn category(mut self, category: RoomCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn price(mut self, price: MonthlyPrice) -> Self {
        self.price = Some(price);
        self
    }

    /// Validates and builds the room.
    ///
    /// # Errors
    /// - [`ModelError::InvalidRoomNumber`]: number unset or zero
    /// - [`ModelError::MissingCategory`]: category unset
    /// - [`ModelError::MissingPrice`]: price unset
    pub fn build(&self) -> Result<Room, ModelError> {
        let number = self.number.unwrap_or(RoomNumber(0));
        let category = self.category.ok_or(ModelError::MissingCategory)?;
        let price = self.price.ok_or(ModelError::MissingPrice)?;
        Room::new(number, category, price)
    }
}

/// Creates a room, defaulting the category to `STANDARD` and the price to
/// the category's configured default.
///
/// This is the one-call entry point for callers that don't need a builder.
///
/// # Errors
/// Returns [`ModelError::InvalidRoomNumber`] if `number` is zero.
pub fn create_room(
    number: RoomNumber,
    category: Option<RoomCategory>,
    price: Option<MonthlyPrice>,
    config: &CatalogConfig,
) -> Result<Room, ModelError> {
    let category = category.unwrap_or(RoomCategory::Standard);
    let mut builder = RoomBuilder::for_category(category, config).number(number);
    if let Some(price) = price {
        builder = builder.price(price);
    }
    builder.build()
}
