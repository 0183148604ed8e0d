//! The room lifecycle state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// What a state decides about a requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation is not allowed in this state.
    Rejected,
    /// The operation succeeds but changes nothing.
    Unchanged,
    /// The operation succeeds and the room moves to a new state.
    MoveTo(LifecycleState),
}

impl Outcome {
    /// Whether the caller should report success.
    pub fn succeeded(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

// ---------------------------------------------------------------------------
// LifecycleState
// ---------------------------------------------------------------------------

/// The occupancy state of a room.
///
/// ```text
///             assign                 request_maintenance
/// Occupied ◄──────────── Vacant ─────────────────────► Maintenance
///     │                  ▲    ▲                             │
///     └──────────────────┘    └─────────────────────────────┘
///            vacate                complete_maintenance
/// ```
///
/// | State | assign | vacate | request_maintenance | complete_maintenance |
/// |---|---|---|---|---|
/// | Vacant | → Occupied (needs an occupant) | no-op | → Maintenance | no-op |
/// | Occupied | rejected | → Vacant | rejected | rejected |
/// | Maintenance | rejected | rejected | no-op | → Vacant |
///
/// States carry no data. The occupant lives in the
/// [`LifecycleContext`](crate::LifecycleContext); the state only decides.
/// Each operation is an exhaustive `match`, so a new variant won't
/// compile until every operation has an answer for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Vacant,
    Occupied,
    Maintenance,
}

impl LifecycleState {
    /// The state every room starts in.
    pub const INITIAL: Self = Self::Vacant;

    /// Decides an `assign` request. `has_occupant` is `false` when the
    /// caller passed no occupant, which even a vacant room rejects.
    pub fn on_assign(self, has_occupant: bool) -> Outcome {
        match self {
            Self::Vacant if has_occupant => Outcome::MoveTo(Self::Occupied),
            Self::Vacant => Outcome::Rejected,
            Self::Occupied => Outcome::Rejected,
            Self::Maintenance => Outcome::Rejected,
        }
    }

    pub fn on_vacate(self) -> Outcome {
        match self {
            Self::Vacant => Outcome::Unchanged,
            Self::Occupied => Outcome::MoveTo(Self::Vacant),
            Self::Maintenance => Outcome::Rejected,
        }
    }

    /// An occupied room has to be vacated before maintenance.
    pub fn on_request_maintenance(self) -> Outcome {
        match self {
            Self::Vacant => Outcome::MoveTo(Self::Maintenance),
            Self::Occupied => Outcome::Rejected,
            Self::Maintenance => Outcome::Unchanged,
        }
    }

    pub fn on_complete_maintenance(self) -> Outcome {
        match self {
            Self::Vacant => Outcome::Unchanged,
            Self::Occupied => Outcome::Rejected,
            Self::Maintenance => Outcome::MoveTo(Self::Vacant),
        }
    }

    /// The symbolic name: `VACANT`, `OCCUPIED` or `MAINTENANCE`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vacant => "VACANT",
            Self::Occupied => "OCCUPIED",
            Self::Maintenance => "MAINTENANCE",
        }
    }

    /// Returns `true` if the room can take an occupant right now.
    pub fn is_available(self) -> bool {
        matches!(self, Self::Vacant)
    }
}

impl Default for LifecycleState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use LifecycleState::{Maintenance, Occupied, Vacant};

    #[test]
    fn test_initial_state_is_vacant() {
        assert_eq!(LifecycleState::default(), Vacant);
        assert_eq!(LifecycleState::INITIAL, Vacant);
    }

    #[test]
    fn test_on_assign_follows_table() {
        assert_eq!(Vacant.on_assign(true), Outcome::MoveTo(Occupied));
        assert_eq!(Vacant.on_assign(false), Outcome::Rejected);
        assert_eq!(Occupied.on_assign(true), Outcome::Rejected);
        assert_eq!(Maintenance.on_assign(true), Outcome::Rejected);
    }

    #[test]
    fn test_on_vacate_follows_table() {
        assert_eq!(Vacant.on_vacate(), Outcome::Unchanged);
        assert_eq!(Occupied.on_vacate(), Outcome::MoveTo(Vacant));
        assert_eq!(Maintenance.on_vacate(), Outcome::Rejected);
    }

    #[test]
    fn test_on_request_maintenance_follows_table() {
        assert_eq!(Vacant.on_request_maintenance(), Outcome::MoveTo(Maintenance));
        assert_eq!(Occupied.on_request_maintenance(), Outcome::Rejected);
        assert_eq!(Maintenance.on_request_maintenance(), Outcome::Unchanged);
    }

    #[test]
    fn test_on_complete_maintenance_follows_table() {
        assert_eq!(Vacant.on_complete_maintenance(), Outcome::Unchanged);
        assert_eq!(Occupied.on_complete_maintenance(), Outcome::Rejected);
        assert_eq!(Maintenance.on_complete_maintenance(), Outcome::MoveTo(Vacant));
    }

    #[test]
    fn test_outcome_succeeded() {
        assert!(Outcome::Unchanged.succeeded());
        assert!(Outcome::MoveTo(Vacant).succeeded());
        assert!(!Outcome::Rejected.succeeded());
    }

    #[test]
    fn test_state_names_and_display() {
        assert_eq!(Vacant.name(), "VACANT");
        assert_eq!(Occupied.to_string(), "OCCUPIED");
        assert_eq!(Maintenance.to_string(), "MAINTENANCE");
    }

    #[test]
    fn test_is_available() {
        assert!(Vacant.is_available());
        assert!(!Occupied.is_available());
        assert!(!Maintenance.is_available());
    }

    #[test]
    fn test_state_serializes_as_symbolic_name() {
        assert_eq!(serde_json::to_string(&Maintenance).unwrap(), "\"MAINTENANCE\"");
    }
}
