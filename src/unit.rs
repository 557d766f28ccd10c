use crate::catalog::UnitKind;
use crate::location::Location;
use serde::{Deserialize, Serialize};

/// Host-assigned unit identity. Stable for the unit's lifetime; never reused
/// within a game by the simulations this engine targets.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct UnitId(pub u64);

/// Owner tag reported by the simulation. Non-negative values are player ids;
/// any negative value is the neutral sentinel (resource nodes).
pub type PlayerId = i32;

/// One unit as observed in a tick snapshot. The engine only ever reads these;
/// units are owned and mutated by the external simulation.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub pos: Location,
    pub kind: UnitKind,
    pub owner: PlayerId,
    /// True if the unit has no action in progress this tick and may be
    /// issued a new directive.
    pub idle: bool,
}

impl Unit {
    pub fn new(id: UnitId, kind: UnitKind, owner: PlayerId, pos: Location, idle: bool) -> Self {
        Unit {
            id,
            pos,
            kind,
            owner,
            idle,
        }
    }
}
