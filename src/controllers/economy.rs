//! EconomyController: per idle base, decides whether to spend on a worker.
//!
//! Driven by two demand signals that are also re-evaluated by the worker
//! controller against each worker's nearest base; the two call sites are
//! deliberately kept separate rather than unified, since they read different
//! base references.

use crate::catalog::UnitKind;
use crate::classifier::TickState;
use crate::constants::*;
use crate::controller::*;
use crate::roles::RolePools;
use crate::spatial::*;
use crate::unit::Unit;
use log::*;

/// Trains workers at idle bases while builder or harvester demand exists.
/// Newly trained workers hold no role until they first report idle.
pub struct EconomyController;

impl UnitController for EconomyController {
    fn name(&self) -> &str {
        "economy"
    }

    fn run(&self, ctx: &mut TickContext) {
        for base in ctx.state.own.bases.iter().filter(|b| b.idle) {
            let demand = need_builders(ctx.state, ctx.pools, base)
                || need_harvesters(ctx.state, ctx.pools, base);
            if demand && ctx.can_afford(UnitKind::Worker) {
                debug!("economy: base {:?} training worker", base.id);
                ctx.out.train(base.id, UnitKind::Worker);
            }
        }
    }
}

/// Builder demand, evaluated against a reference base:
/// - bootstrapping: no barracks anywhere and no builders fielded; otherwise
/// - there is not one barracks per base, fewer builders exist than missing
///   barracks, and no existing barracks already sits within the adjacency
///   guard of this base (a barracks may already be going up nearby).
pub(crate) fn need_builders(state: &TickState, pools: &RolePools, base: &Unit) -> bool {
    if state.own.barracks.is_empty() && pools.builders.is_empty() {
        return true;
    }

    let bases = state.own.bases.len() as i64;
    let barracks = state.own.barracks.len() as i64;

    barracks != bases
        && (pools.builders.len() as i64) < bases - barracks
        && find_closest(&state.own.barracks, base.pos)
            .map_or(true, |b| b.pos.distance_to(base.pos) > BARRACKS_ADJACENCY_GUARD)
}

/// Harvester demand, evaluated against a reference base: fewer standing
/// harvesters than twice the resource nodes on this base's half of the board.
pub(crate) fn need_harvesters(state: &TickState, pools: &RolePools, base: &Unit) -> bool {
    let nearby = find_within(&state.resources, base.pos, state.half_diagonal());
    pools.harvesters.len() < HARVESTERS_PER_RESOURCE * nearby.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::directive::{Action, DirectiveSet};
    use crate::location::Location;
    use crate::snapshot::Snapshot;
    use crate::unit::{PlayerId, UnitId};
    use crate::CostTable;

    fn unit(id: u64, kind: UnitKind, owner: PlayerId, x: u32, y: u32) -> Unit {
        Unit::new(UnitId(id), kind, owner, Location::from_coords(x, y), true)
    }

    fn run(state: &TickState, pools: &mut RolePools, stockpile: u32) -> DirectiveSet {
        let costs = CostTable::default();
        let mut out = DirectiveSet::new();
        let mut ctx = TickContext {
            state,
            pools,
            costs: &costs,
            stockpile,
            out: &mut out,
        };
        EconomyController.run(&mut ctx);
        out
    }

    #[test]
    fn trains_worker_when_builders_needed() {
        // One base, no barracks, no workers: bootstrap builder demand.
        let state = classify(
            0,
            &Snapshot::new(8, 8, vec![unit(1, UnitKind::Base, 0, 1, 1)], 5),
        );
        let mut pools = RolePools::new();
        let out = run(&state, &mut pools, 5);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out.for_unit(UnitId(1)).unwrap().action,
            Action::Train(UnitKind::Worker)
        );
    }

    #[test]
    fn no_training_when_broke() {
        let state = classify(
            0,
            &Snapshot::new(8, 8, vec![unit(1, UnitKind::Base, 0, 1, 1)], 0),
        );
        let mut pools = RolePools::new();
        let out = run(&state, &mut pools, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn busy_base_is_skipped() {
        let mut base = unit(1, UnitKind::Base, 0, 1, 1);
        base.idle = false;
        let state = classify(0, &Snapshot::new(8, 8, vec![base], 5));
        let mut pools = RolePools::new();
        assert!(run(&state, &mut pools, 5).is_empty());
    }

    #[test]
    fn adjacency_guard_suppresses_builder_demand() {
        // Two bases, one barracks: a builder shortfall exists, but the base
        // being evaluated already has a barracks 2 cells away.
        let state = classify(
            0,
            &Snapshot::new(
                16,
                16,
                vec![
                    unit(1, UnitKind::Base, 0, 1, 1),
                    unit(2, UnitKind::Base, 0, 10, 10),
                    unit(3, UnitKind::Barracks, 0, 1, 3),
                ],
                0,
            ),
        );
        let pools = RolePools::new();
        assert!(!need_builders(&state, &pools, &state.own.bases[0]));
        // The far base sees its nearest barracks well beyond the guard.
        assert!(need_builders(&state, &pools, &state.own.bases[1]));
    }

    #[test]
    fn harvester_demand_counts_nearby_resources_only() {
        // Board 8x8: half-diagonal radius is 5. One resource in range of the
        // base, one beyond it.
        let state = classify(
            0,
            &Snapshot::new(
                8,
                8,
                vec![
                    unit(1, UnitKind::Base, 0, 0, 0),
                    unit(2, UnitKind::Resource, -1, 2, 2),
                    unit(3, UnitKind::Resource, -1, 7, 7),
                ],
                0,
            ),
        );
        let mut pools = RolePools::new();
        // Quota is 2 per nearby node = 2.
        assert!(need_harvesters(&state, &pools, &state.own.bases[0]));
        pools.harvesters.insert(UnitId(10));
        assert!(need_harvesters(&state, &pools, &state.own.bases[0]));
        pools.harvesters.insert(UnitId(11));
        assert!(!need_harvesters(&state, &pools, &state.own.bases[0]));
    }
}
