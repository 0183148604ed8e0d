//! Catalog configuration: default prices per room category.

use hallkeep_model::{MonthlyPrice, RoomCategory};
use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Configuration for the room catalog.
///
/// Only the default monthly price per category lives here. Any field left
/// out of a JSON document falls back to its default, so `{}` is a valid
/// config.
///
/// Prices are in cents on the wire, matching [`MonthlyPrice`]'s
/// serialization:
///
/// ```json
/// { "standard_monthly_price": 70000, "superior_monthly_price": 95000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Default price for `STANDARD` rooms. Default: 700.00.
    pub standard_monthly_price: MonthlyPrice,

    /// Default price for `SUPERIOR` rooms. Default: 950.00.
    pub superior_monthly_price: MonthlyPrice,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            standard_monthly_price: MonthlyPrice::from_units(700),
            superior_monthly_price: MonthlyPrice::from_units(950),
        }
    }
}

impl CatalogConfig {
    /// Parses a config from a JSON document.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidConfig`] if the document is not valid
    /// JSON or a field has the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(CatalogError::InvalidConfig)
    }

    /// The default price for a category.
    pub fn default_price(&self, category: RoomCategory) -> MonthlyPrice {
        match category {
            RoomCategory::Standard => self.standard_monthly_price,
            RoomCategory::Superior => self.superior_monthly_price,
        }
    }
}
