//! WorkerController: harvester/builder/rusher tasking for idle workers.
//!
//! Role assignment re-evaluates the economic demand signals against the
//! worker's own nearest base. Harvesting is a standing order re-issued every
//! idle tick against the closest un-saturated resource node; builders place
//! a barracks on the corner of the base nearest the enemy base, hugging the
//! base so the structure stays out of the resource field.

use crate::catalog::UnitKind;
use crate::classifier::TickState;
use crate::constants::*;
use crate::controller::*;
use crate::location::Location;
use crate::spatial::*;
use crate::unit::Unit;
use itertools::iproduct;
use log::*;

use super::economy::{need_builders, need_harvesters};

pub struct WorkerController;

impl UnitController for WorkerController {
    fn name(&self) -> &str {
        "worker"
    }

    fn run(&self, ctx: &mut TickContext) {
        // Resource nodes still open to another harvester. A node is
        // saturated once two own units stand within radius 1 of it.
        let open_resources: Vec<Unit> = ctx
            .state
            .resources
            .iter()
            .filter(|r| {
                find_within(&ctx.state.own.all, r.pos, 1).len() < RESOURCE_SATURATION_CAP
            })
            .copied()
            .collect();

        for worker in ctx.state.own.workers.iter().filter(|w| w.idle) {
            self.assign(ctx, worker, &open_resources);
        }
    }
}

impl WorkerController {
    fn assign(&self, ctx: &mut TickContext, worker: &Unit, open_resources: &[Unit]) {
        let resource = find_closest(open_resources, worker.pos);
        let base = find_closest(&ctx.state.own.bases, worker.pos);
        let enemy = find_closest(&ctx.state.enemy.all, worker.pos);

        let Some(enemy) = enemy else {
            return;
        };
        let Some(base) = base else {
            ctx.out.attack(worker.id, enemy.id);
            return;
        };
        let Some(resource) = resource else {
            // Economy is dead-ended; throw the worker at the enemy.
            ctx.out.attack(worker.id, enemy.id);
            return;
        };

        if ctx.pools.worker_unassigned(worker.id) {
            // Harvester demand outranks builder demand; a worker that fits
            // neither rushes without acquiring a persistent role.
            if need_harvesters(ctx.state, ctx.pools, &base) {
                debug!("worker {:?} assigned as harvester", worker.id);
                ctx.pools.harvesters.insert(worker.id);
            } else if need_builders(ctx.state, ctx.pools, &base)
                && ctx.can_afford(UnitKind::Barracks)
            {
                debug!("worker {:?} assigned as builder", worker.id);
                ctx.pools.builders.insert(worker.id);
            } else {
                ctx.out.attack(worker.id, enemy.id);
                return;
            }
        }

        if ctx.pools.harvesters.contains(&worker.id) {
            ctx.out.harvest(worker.id, resource.id, base.id);
        } else if ctx.pools.builders.contains(&worker.id) {
            let site = barracks_site(ctx.state, &base);
            ctx.out.build(worker.id, UnitKind::Barracks, site);
        }
    }
}

/// Defensive-structure siting: among the 3x3 block of cells formed by
/// clamping the base's x and y offsets {-1, 0, 1} to board bounds, pick the
/// cell closest to the nearest enemy base -- the base's near corner toward
/// the threat. With no enemy base the bias target degenerates to (0, 0).
pub fn barracks_site(state: &TickState, base: &Unit) -> Location {
    let bx = base.pos.x() as i16;
    let by = base.pos.y() as i16;

    let xs: Vec<i16> = (-1..=1)
        .map(|i| bx + i)
        .filter(|&x| x >= 0 && (x as u32) < state.width)
        .collect();
    let ys: Vec<i16> = (-1..=1)
        .map(|i| by + i)
        .filter(|&y| y >= 0 && (y as u32) < state.height)
        .collect();

    let (tx, ty) = find_closest(&state.enemy.bases, base.pos)
        .map(|b| (b.pos.x() as i16, b.pos.y() as i16))
        .unwrap_or((0, 0));

    let mut target = Location::from_coords(0, 0);
    let mut best = state.width + state.height;
    for (&x, &y) in iproduct!(xs.iter(), ys.iter()) {
        let candidate = Location::from_coords(x as u32, y as u32);
        let d = candidate.distance_to_xy(tx, ty);
        if d < best {
            target = candidate;
            best = d;
        }
    }

    target
}
