//! LightController: defender/attacker tasking for idle light units.
//!
//! Lights are the garrison unit. Unassigned lights become defenders while
//! the nearest base's garrison is under quota, otherwise attackers.
//! Defenders intercept any enemy that closes within the intercept radius of
//! the protected base; with no threat in range they hold a diamond ring at
//! exactly the formation radius, each taking the unoccupied ring tile
//! nearest the enemy base so the perimeter thickens toward the threat.

use crate::classifier::TickState;
use crate::constants::*;
use crate::controller::*;
use crate::location::Location;
use crate::spatial::*;
use crate::unit::Unit;
use itertools::iproduct;
use log::*;

pub struct LightController;

impl UnitController for LightController {
    fn name(&self) -> &str {
        "light"
    }

    fn run(&self, ctx: &mut TickContext) {
        for light in ctx.state.own.lights.iter().filter(|l| l.idle) {
            self.assign(ctx, light);
        }
    }
}

impl LightController {
    fn assign(&self, ctx: &mut TickContext, light: &Unit) {
        let Some(enemy) = find_closest(&ctx.state.enemy.all, light.pos) else {
            return;
        };
        let Some(base) = find_closest(&ctx.state.own.bases, light.pos) else {
            // No base to protect: transient attack, no role.
            ctx.out.attack(light.id, enemy.id);
            return;
        };

        if ctx.pools.light_unassigned(light.id) {
            let garrison = find_within(&ctx.state.own.lights, base.pos, GARRISON_RADIUS);
            let need_defenders = ctx.pools.defenders.len()
                < DEFENDER_QUOTA_PER_BASE * ctx.state.own.bases.len()
                && garrison.len() < DEFENDER_QUOTA_PER_BASE
                && !ctx.state.enemy_forces_extinct();
            if need_defenders {
                debug!("light {:?} assigned as defender", light.id);
                ctx.pools.defenders.insert(light.id);
            } else {
                debug!("light {:?} assigned as attacker", light.id);
                ctx.pools.attackers.insert(light.id);
            }
        }

        if !ctx.pools.defenders.contains(&light.id) {
            ctx.out.attack(light.id, enemy.id);
            return;
        }

        // Defender: intercept the enemy nearest the base if anything is
        // inside the intercept radius, otherwise take up formation.
        if !find_within(&ctx.state.enemy.all, base.pos, INTERCEPT_RADIUS).is_empty() {
            if let Some(threat) = find_closest(&ctx.state.enemy.all, base.pos) {
                ctx.out.attack(light.id, threat.id);
            }
            return;
        }

        if let Some(target) = formation_target(ctx.state, &base, light) {
            ctx.out.move_to(light.id, target);
        }
    }
}

/// Defensive-formation siting: scan the in-bounds tiles at exactly the
/// formation radius (Manhattan diamond) around `base` and pick the
/// unoccupied tile closest to the nearest enemy base (bias target (0, 0)
/// when none exists). Returns `None` when the light already stands on a
/// ring tile -- it holds position rather than jitter along the ring. If
/// every ring tile is occupied the fallback target is (0, 0).
pub fn formation_target(state: &TickState, base: &Unit, light: &Unit) -> Option<Location> {
    let bx = base.pos.x() as i16;
    let by = base.pos.y() as i16;
    let r = FORMATION_RADIUS as i16;

    let xs: Vec<i16> = (-r..=r)
        .map(|i| bx + i)
        .filter(|&x| x >= 0 && (x as u32) < state.width)
        .collect();
    let ys: Vec<i16> = (-r..=r)
        .map(|i| by + i)
        .filter(|&y| y >= 0 && (y as u32) < state.height)
        .collect();

    let (tx, ty) = find_closest(&state.enemy.bases, base.pos)
        .map(|b| (b.pos.x() as i16, b.pos.y() as i16))
        .unwrap_or((0, 0));

    let mut target = Location::from_coords(0, 0);
    let mut best = state.width + state.height;
    for (&x, &y) in iproduct!(xs.iter(), ys.iter()) {
        if (x - bx).unsigned_abs() as u32 + (y - by).unsigned_abs() as u32 != FORMATION_RADIUS {
            continue;
        }
        let tile = Location::from_coords(x as u32, y as u32);
        if tile == light.pos {
            // Already on the ring: hold.
            return None;
        }
        let d = tile.distance_to_xy(tx, ty);
        if d < best && !state.is_occupied(tile) {
            target = tile;
            best = d;
        }
    }

    Some(target)
}
