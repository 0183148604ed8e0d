//! Core identity types: rooms and occupants.
//!
//! Everything here is immutable once built. Rooms are validated at
//! construction time, so any `Room` you hold is known to be well-formed.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::ModelError;

// ---------------------------------------------------------------------------
// Room identity
// ---------------------------------------------------------------------------

/// The unique key for a room.
///
/// A newtype over `u32` so a room number can't be confused with a count or
/// a price. Serialized as the bare number (`101`, not `{ "0": 101 }`).
///
/// Zero is representable here; [`Room::new`] is where positivity is
/// enforced, because lookups by an arbitrary number (e.g. `RoomNumber(0)`
/// in a stale request) are legal and simply find nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomNumber {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// The category a room is sold under.
///
/// Categories drive default pricing in the catalog; the lifecycle layer
/// doesn't care about them at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomCategory {
    Standard,
    Superior,
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "STANDARD"),
            Self::Superior => write!(f, "SUPERIOR"),
        }
    }
}

/// A monthly rent, stored as whole cents.
///
/// Using an unsigned integer of minor units keeps prices exact (no float
/// rounding) and makes a negative price unrepresentable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MonthlyPrice(u64);

impl MonthlyPrice {
    /// A price of exactly `units` whole currency units (e.g. `700` → 700.00).
    ///
    /// # Panics
    /// Panics if `units` cannot be expressed in cents as a `u64`.
    pub const fn from_units(units: u64) -> Self {
        match units.checked_mul(100) {
            Some(cents) => Self(cents),
            None => panic!("monthly price overflows u64 cents"),
        }
    }

    /// A price given in cents (e.g. `70050` → 700.50).
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// The price in cents.
    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MonthlyPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// An immutable room identity: number, category and monthly price.
///
/// Fields are private so the only way to get a `Room` is through
/// [`Room::new`] (or the catalog's builder, which calls it). Deserialization
/// goes through `Room::new` as well. That is what guarantees `number > 0`
/// for every room in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRoom")]
pub struct Room {
    number: RoomNumber,
    category: RoomCategory,
    monthly_price: MonthlyPrice,
}

impl Room {
    /// Builds a room identity.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidRoomNumber`] if `number` is zero.
    pub fn new(
        number: RoomNumber,
        category: RoomCategory,
        monthly_price: MonthlyPrice,
    ) -> Result<Self, ModelError> {
        if number.0 == 0 {
            return Err(ModelError::InvalidRoomNumber(number.0));
        }
        Ok(Self {
            number,
            category,
            monthly_price,
        })
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn category(&self) -> RoomCategory {
        self.category
    }

    pub fn monthly_price(&self) -> MonthlyPrice {
        self.monthly_price
    }
}

/// Unvalidated wire shape of a [`Room`].
#[derive(Deserialize)]
struct RawRoom {
    number: RoomNumber,
    category: RoomCategory,
    monthly_price: MonthlyPrice,
}

impl TryFrom<RawRoom> for Room {
    type Error = ModelError;

    fn try_from(raw: RawRoom) -> Result<Self, Self::Error> {
        Room::new(raw.number, raw.category, raw.monthly_price)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {} ({}, {}/month)",
            self.number, self.category, self.monthly_price
        )
    }
}

// ---------------------------------------------------------------------------
// Occupant
// ---------------------------------------------------------------------------

/// The unique identifier of an occupant (e.g. a student number).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccupantId(pub String);

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OccupantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OccupantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Someone who can be assigned to a room.
///
/// Two occupants are the same occupant if their ids match, regardless of
/// display name or contact details. `PartialEq` and `Hash` are implemented
/// by hand to honour that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occupant {
    id: OccupantId,
    display_name: String,
    contact_info: Option<String>,
}

impl Occupant {
    /// Creates an occupant with no contact details.
    pub fn new(id: impl Into<OccupantId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            contact_info: None,
        }
    }

    /// Attaches contact details (email, phone, ...).
    pub fn with_contact(mut self, contact_info: impl Into<String>) -> Self {
        self.contact_info = Some(contact_info.into());
        self
    }

    pub fn id(&self) -> &OccupantId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn contact_info(&self) -> Option<&str> {
        self.contact_info.as_deref()
    }
}

impl PartialEq for Occupant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Occupant {}

impl Hash for Occupant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}
