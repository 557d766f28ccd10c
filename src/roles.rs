//! Persistent role bookkeeping.
//!
//! The four role pools are the only state that outlives a single decision
//! pass. Workers split into harvesters and builders; lights split into
//! defenders and attackers. Pools within a category are mutually exclusive:
//! assignment happens only to units holding no role, and reconciliation only
//! removes. Serde-derived so a host that snapshots agent state between
//! process invocations can carry the pools along.

use crate::classifier::TickState;
use crate::unit::{Unit, UnitId};
use fnv::FnvHashSet;
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RolePools {
    pub harvesters: FnvHashSet<UnitId>,
    pub builders: FnvHashSet<UnitId>,
    pub defenders: FnvHashSet<UnitId>,
    pub attackers: FnvHashSet<UnitId>,
}

impl RolePools {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the worker holds neither worker role.
    pub fn worker_unassigned(&self, id: UnitId) -> bool {
        !self.harvesters.contains(&id) && !self.builders.contains(&id)
    }

    /// True if the light holds neither combat role.
    pub fn light_unassigned(&self, id: UnitId) -> bool {
        !self.defenders.contains(&id) && !self.attackers.contains(&id)
    }

    /// Prune dead members and apply the level-triggered domain resets.
    /// Runs once per tick, after classification and before any controller.
    /// Idempotent: a second run against the same state changes nothing.
    pub fn reconcile(&mut self, state: &TickState) {
        let workers: FnvHashSet<UnitId> = ids(&state.own.workers);
        let lights: FnvHashSet<UnitId> = ids(&state.own.lights);

        self.harvesters.retain(|id| workers.contains(id));
        self.builders.retain(|id| workers.contains(id));
        self.defenders.retain(|id| lights.contains(id));
        self.attackers.retain(|id| lights.contains(id));

        // Production self-sufficient: one barracks per base means no more
        // builders need to be fielded.
        if state.own.barracks.len() == state.own.bases.len() && !self.builders.is_empty() {
            debug!("reconcile: clearing {} builders", self.builders.len());
            self.builders.clear();
        }

        // No base, nowhere to deliver.
        if state.own.bases.is_empty() && !self.harvesters.is_empty() {
            debug!("reconcile: clearing {} harvesters", self.harvesters.len());
            self.harvesters.clear();
        }

        // Nothing left worth defending, or the game is effectively decided:
        // commit every light to offense.
        let stand_down = state.own.bases.is_empty()
            || state.enemy.bases.is_empty()
            || state.enemy_forces_extinct();
        if stand_down && !self.defenders.is_empty() {
            debug!("reconcile: clearing {} defenders", self.defenders.len());
            self.defenders.clear();
        }
    }
}

fn ids(units: &[Unit]) -> FnvHashSet<UnitId> {
    units.iter().map(|u| u.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UnitKind;
    use crate::classifier::classify;
    use crate::location::Location;
    use crate::snapshot::Snapshot;
    use crate::unit::{PlayerId, Unit};

    fn unit(id: u64, kind: UnitKind, owner: PlayerId, x: u32, y: u32) -> Unit {
        Unit::new(UnitId(id), kind, owner, Location::from_coords(x, y), true)
    }

    fn state_of(units: Vec<Unit>) -> TickState {
        classify(0, &Snapshot::new(16, 16, units, 0))
    }

    #[test]
    fn prunes_dead_members() {
        let mut pools = RolePools::new();
        pools.harvesters.insert(UnitId(1));
        pools.harvesters.insert(UnitId(99));
        pools.defenders.insert(UnitId(2));
        pools.defenders.insert(UnitId(98));

        let state = state_of(vec![
            unit(1, UnitKind::Worker, 0, 1, 1),
            unit(2, UnitKind::Light, 0, 2, 2),
            unit(3, UnitKind::Base, 0, 0, 0),
            unit(4, UnitKind::Base, 1, 15, 15),
            unit(5, UnitKind::Worker, 1, 14, 15),
        ]);
        pools.reconcile(&state);

        assert!(pools.harvesters.contains(&UnitId(1)));
        assert!(!pools.harvesters.contains(&UnitId(99)));
        assert!(pools.defenders.contains(&UnitId(2)));
        assert!(!pools.defenders.contains(&UnitId(98)));
    }

    #[test]
    fn builders_cleared_when_barracks_match_bases() {
        let mut pools = RolePools::new();
        pools.builders.insert(UnitId(1));

        let state = state_of(vec![
            unit(1, UnitKind::Worker, 0, 1, 1),
            unit(2, UnitKind::Base, 0, 0, 0),
            unit(3, UnitKind::Barracks, 0, 2, 0),
            unit(4, UnitKind::Base, 1, 15, 15),
            unit(5, UnitKind::Worker, 1, 14, 15),
        ]);
        pools.reconcile(&state);
        assert!(pools.builders.is_empty());
    }

    #[test]
    fn harvesters_cleared_without_a_base() {
        let mut pools = RolePools::new();
        pools.harvesters.insert(UnitId(1));

        let state = state_of(vec![
            unit(1, UnitKind::Worker, 0, 1, 1),
            unit(4, UnitKind::Base, 1, 15, 15),
        ]);
        pools.reconcile(&state);
        assert!(pools.harvesters.is_empty());
    }

    #[test]
    fn defenders_cleared_when_enemy_base_falls() {
        let mut pools = RolePools::new();
        pools.defenders.insert(UnitId(2));

        // Enemy still has a worker but no base: stand down and rush.
        let state = state_of(vec![
            unit(1, UnitKind::Base, 0, 0, 0),
            unit(2, UnitKind::Light, 0, 2, 2),
            unit(5, UnitKind::Worker, 1, 14, 15),
        ]);
        pools.reconcile(&state);
        assert!(pools.defenders.is_empty());
    }

    #[test]
    fn defenders_cleared_when_enemy_forces_extinct() {
        let mut pools = RolePools::new();
        pools.defenders.insert(UnitId(2));

        // Enemy base stands but its army is gone.
        let state = state_of(vec![
            unit(1, UnitKind::Base, 0, 0, 0),
            unit(2, UnitKind::Light, 0, 2, 2),
            unit(5, UnitKind::Base, 1, 15, 15),
        ]);
        pools.reconcile(&state);
        assert!(pools.defenders.is_empty());
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut pools = RolePools::new();
        pools.harvesters.insert(UnitId(1));
        pools.builders.insert(UnitId(6));
        pools.defenders.insert(UnitId(2));
        pools.attackers.insert(UnitId(7));

        let state = state_of(vec![
            unit(1, UnitKind::Worker, 0, 1, 1),
            unit(6, UnitKind::Worker, 0, 1, 2),
            unit(2, UnitKind::Light, 0, 2, 2),
            unit(7, UnitKind::Light, 0, 3, 2),
            unit(3, UnitKind::Base, 0, 0, 0),
            unit(4, UnitKind::Base, 1, 15, 15),
            unit(5, UnitKind::Worker, 1, 14, 15),
        ]);
        pools.reconcile(&state);
        let after_first = pools.clone();
        pools.reconcile(&state);

        assert_eq!(pools.harvesters, after_first.harvesters);
        assert_eq!(pools.builders, after_first.builders);
        assert_eq!(pools.defenders, after_first.defenders);
        assert_eq!(pools.attackers, after_first.attackers);
    }
}
