//! Unit-type catalog: the closed set of unit kinds the engine reasons about,
//! per-kind capability flags, and the host-supplied cost table.
//!
//! The simulation reports unit types by name; `UnitKind::from_name` resolves
//! them once at classification time. Names outside the closed set map to
//! `Unknown`, which joins no typed bucket but still counts as an own or enemy
//! unit for owner-level decisions.

use bitflags::*;
use serde::{Deserialize, Serialize};

/// The closed set of unit kinds, plus `Unknown` for type names the engine
/// does not recognize.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Worker,
    Light,
    Heavy,
    Ranged,
    Base,
    Barracks,
    Resource,
    Unknown,
}

bitflags! {
    /// Capability flags derived from a unit's kind.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UnitFlags: u8 {
        const NONE = 0;
        /// Can move across the board (all field units).
        const MOBILE = 1;
        const CAN_ATTACK = 2;
        const CAN_HARVEST = 4;
        /// Immobile construction (bases, barracks).
        const STRUCTURE = 8;
    }
}

impl UnitKind {
    /// Resolve a simulation-reported type name. Unrecognized names become
    /// `Unknown` rather than an error.
    pub fn from_name(name: &str) -> UnitKind {
        match name {
            "Worker" => UnitKind::Worker,
            "Light" => UnitKind::Light,
            "Heavy" => UnitKind::Heavy,
            "Ranged" => UnitKind::Ranged,
            "Base" => UnitKind::Base,
            "Barracks" => UnitKind::Barracks,
            "Resource" => UnitKind::Resource,
            _ => UnitKind::Unknown,
        }
    }

    pub fn flags(self) -> UnitFlags {
        match self {
            UnitKind::Worker => UnitFlags::MOBILE | UnitFlags::CAN_ATTACK | UnitFlags::CAN_HARVEST,
            UnitKind::Light | UnitKind::Heavy | UnitKind::Ranged => {
                UnitFlags::MOBILE | UnitFlags::CAN_ATTACK
            }
            UnitKind::Base | UnitKind::Barracks => UnitFlags::STRUCTURE,
            UnitKind::Resource | UnitKind::Unknown => UnitFlags::NONE,
        }
    }

    pub fn is_mobile(self) -> bool {
        self.flags().contains(UnitFlags::MOBILE)
    }

    pub fn is_structure(self) -> bool {
        self.flags().contains(UnitFlags::STRUCTURE)
    }
}

/// Resource costs per trainable unit kind, supplied by the host at engine
/// construction. Complete by construction: one field per kind, so a missing
/// entry cannot exist at runtime.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct CostTable {
    pub worker: u32,
    pub light: u32,
    pub heavy: u32,
    pub ranged: u32,
    pub base: u32,
    pub barracks: u32,
}

impl CostTable {
    pub fn cost(&self, kind: UnitKind) -> u32 {
        match kind {
            UnitKind::Worker => self.worker,
            UnitKind::Light => self.light,
            UnitKind::Heavy => self.heavy,
            UnitKind::Ranged => self.ranged,
            UnitKind::Base => self.base,
            UnitKind::Barracks => self.barracks,
            // Never trained or built; an affordability check against these
            // must always fail rather than wrap to "free".
            UnitKind::Resource | UnitKind::Unknown => u32::MAX,
        }
    }
}

impl Default for CostTable {
    /// Costs from the standard microRTS unit-type table.
    fn default() -> Self {
        CostTable {
            worker: 1,
            light: 2,
            heavy: 2,
            ranged: 2,
            base: 10,
            barracks: 5,
        }
    }
}
