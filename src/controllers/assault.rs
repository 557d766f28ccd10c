//! Heavy and ranged tasking: no roles, no placement, just pressure.
//! Every idle unit of either class attacks the nearest enemy.

use crate::controller::*;
use crate::spatial::find_closest;
use crate::unit::Unit;

pub struct HeavyController;

impl UnitController for HeavyController {
    fn name(&self) -> &str {
        "heavy"
    }

    fn run(&self, ctx: &mut TickContext) {
        let heavies = ctx.state.own.heavies.as_slice();
        attack_nearest(ctx, heavies);
    }
}

pub struct RangedController;

impl UnitController for RangedController {
    fn name(&self) -> &str {
        "ranged"
    }

    fn run(&self, ctx: &mut TickContext) {
        let rangers = ctx.state.own.rangers.as_slice();
        attack_nearest(ctx, rangers);
    }
}

fn attack_nearest(ctx: &mut TickContext, units: &[Unit]) {
    for unit in units.iter().filter(|u| u.idle) {
        if let Some(enemy) = find_closest(&ctx.state.enemy.all, unit.pos) {
            ctx.out.attack(unit.id, enemy.id);
        }
    }
}
