//! MilitaryController: per idle barracks, decides which combat unit to train.
//!
//! Local defense comes first: while the base nearest this barracks is under
//! its defender quota, cheap lights are produced to fill the garrison.
//! Otherwise (or with no base left at all) production falls through the
//! value ladder Ranged > Heavy > Light, training the first affordable kind.

use crate::catalog::UnitKind;
use crate::constants::*;
use crate::controller::*;
use crate::spatial::*;
use crate::unit::Unit;

/// Affordability ladder, most valuable first.
const VALUE_LADDER: [UnitKind; 3] = [UnitKind::Ranged, UnitKind::Heavy, UnitKind::Light];

pub struct MilitaryController;

impl UnitController for MilitaryController {
    fn name(&self) -> &str {
        "military"
    }

    fn run(&self, ctx: &mut TickContext) {
        for barracks in ctx.state.own.barracks.iter().filter(|b| b.idle) {
            match find_closest(&ctx.state.own.bases, barracks.pos) {
                // Base lost: all-in, train the best unit we can afford.
                None => train_best_affordable(ctx, barracks),
                Some(base) => {
                    let garrison =
                        find_within(&ctx.state.own.lights, base.pos, GARRISON_RADIUS);
                    let should_defend = ctx.pools.defenders.len()
                        < DEFENDER_QUOTA_PER_BASE * ctx.state.own.bases.len()
                        && garrison.len() < DEFENDER_QUOTA_PER_BASE;

                    if should_defend && ctx.can_afford(UnitKind::Light) {
                        ctx.out.train(barracks.id, UnitKind::Light);
                    } else {
                        train_best_affordable(ctx, barracks);
                    }
                }
            }
        }
    }
}

fn train_best_affordable(ctx: &mut TickContext, barracks: &Unit) {
    for kind in VALUE_LADDER {
        if ctx.can_afford(kind) {
            ctx.out.train(barracks.id, kind);
            return;
        }
    }
}
