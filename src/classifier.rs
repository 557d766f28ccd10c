//! Per-tick state classification.
//!
//! Partitions the raw snapshot unit list into owner-scoped, kind-typed
//! buckets and derives the occupancy lookup. Runs exactly once per decision
//! pass, before reconciliation and the controllers. Bucket order preserves
//! snapshot order, which the nearest-search tie-break depends on.

use crate::catalog::{UnitFlags, UnitKind};
use crate::location::Location;
use crate::snapshot::Snapshot;
use crate::unit::{PlayerId, Unit};
use fnv::FnvHashSet;

/// Kind-typed buckets for one allegiance (own or enemy).
#[derive(Clone, Debug, Default)]
pub struct Bucket {
    /// Every unit of this allegiance, including unknown kinds.
    pub all: Vec<Unit>,
    pub bases: Vec<Unit>,
    pub barracks: Vec<Unit>,
    pub workers: Vec<Unit>,
    pub lights: Vec<Unit>,
    pub heavies: Vec<Unit>,
    pub rangers: Vec<Unit>,
}

impl Bucket {
    fn add(&mut self, unit: Unit) {
        self.all.push(unit);
        match unit.kind {
            UnitKind::Base => self.bases.push(unit),
            UnitKind::Barracks => self.barracks.push(unit),
            UnitKind::Worker => self.workers.push(unit),
            UnitKind::Light => self.lights.push(unit),
            UnitKind::Heavy => self.heavies.push(unit),
            UnitKind::Ranged => self.rangers.push(unit),
            // Resource kinds reach a bucket only via the neutral path;
            // unknown kinds stay at the owner level.
            UnitKind::Resource | UnitKind::Unknown => {}
        }
    }
}

/// The classified view of one tick. Rebuilt from scratch every pass, never
/// mutated across ticks.
#[derive(Clone, Debug)]
pub struct TickState {
    pub width: u32,
    pub height: u32,
    pub own: Bucket,
    pub enemy: Bucket,
    /// Neutral resource nodes (negative owner sentinel).
    pub resources: Vec<Unit>,
    /// Every cell occupied by any unit this tick.
    occupied: FnvHashSet<Location>,
}

impl TickState {
    pub fn is_occupied(&self, loc: Location) -> bool {
        self.occupied.contains(&loc)
    }

    pub fn in_bounds(&self, x: i16, y: i16) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    /// Half the board's diagonal length, in the original's integer math:
    /// floor(sqrt(w^2 + h^2)) / 2. Radius of the economic "nearby resources"
    /// query.
    pub fn half_diagonal(&self) -> u32 {
        let diag = ((self.width * self.width + self.height * self.height) as f64).sqrt() as u32;
        diag / 2
    }

    /// True once the enemy has no mobile units left (workers, lights,
    /// heavies, rangers all extinct). Structures alone do not count.
    pub fn enemy_forces_extinct(&self) -> bool {
        !self
            .enemy
            .all
            .iter()
            .any(|u| u.kind.flags().contains(UnitFlags::MOBILE))
    }
}

/// Partition the snapshot for the requesting player. Units owned by `player`
/// go to `own`, units owned by any other non-negative player id go to
/// `enemy`, and negative-owner units are neutral resources.
pub fn classify(player: PlayerId, snapshot: &Snapshot) -> TickState {
    let mut state = TickState {
        width: snapshot.width,
        height: snapshot.height,
        own: Bucket::default(),
        enemy: Bucket::default(),
        resources: Vec::new(),
        occupied: FnvHashSet::default(),
    };

    for unit in &snapshot.units {
        state.occupied.insert(unit.pos);
        if unit.owner == player {
            state.own.add(*unit);
        } else if unit.owner >= 0 {
            state.enemy.add(*unit);
        } else {
            state.resources.push(*unit);
        }
    }

    state
}
