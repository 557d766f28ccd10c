//! Public API for the decision engine.
//!
//! `MarshalBuilder` provides a fluent, append-only API for assembling the
//! controller pipeline. The built `Marshal` owns the persistent role pools
//! and runs one decision pass per host tick: classify -> reconcile ->
//! controllers in pipeline order. `decide` is total over valid input and
//! never fails out of a pass.

use crate::catalog::CostTable;
use crate::classifier::classify;
use crate::controller::{TickContext, UnitController};
use crate::controllers::default_controllers;
use crate::directive::DirectiveSet;
use crate::roles::RolePools;
use crate::snapshot::Snapshot;
use crate::unit::PlayerId;
use log::*;

/// Append-only builder for configuring the decision pipeline.
pub struct MarshalBuilder {
    controllers: Vec<Box<dyn UnitController>>,
    costs: CostTable,
}

impl MarshalBuilder {
    /// Start with an empty controller stack.
    pub fn new() -> Self {
        MarshalBuilder {
            controllers: Vec::new(),
            costs: CostTable::default(),
        }
    }

    /// Append a controller to the end of the pipeline.
    pub fn add_controller(mut self, controller: Box<dyn UnitController>) -> Self {
        self.controllers.push(controller);
        self
    }

    /// Use the host's unit cost table instead of the defaults.
    pub fn costs(mut self, costs: CostTable) -> Self {
        self.costs = costs;
        self
    }

    pub fn build(self) -> Marshal {
        Marshal {
            controllers: self.controllers,
            costs: self.costs,
            pools: RolePools::new(),
        }
    }
}

impl Default for MarshalBuilder {
    /// Returns a builder pre-loaded with the default 6-controller pipeline.
    fn default() -> Self {
        let mut builder = MarshalBuilder::new();
        for controller in default_controllers() {
            builder.controllers.push(controller);
        }
        builder
    }
}

/// The tactical decision engine. Holds the cross-tick role pools; everything
/// else is recomputed from the snapshot each pass.
///
/// Single-threaded by contract: the host must not run two decision passes
/// concurrently against one `Marshal`.
pub struct Marshal {
    controllers: Vec<Box<dyn UnitController>>,
    costs: CostTable,
    pools: RolePools,
}

impl Marshal {
    /// Engine with the default pipeline and the default cost table.
    pub fn new() -> Self {
        MarshalBuilder::default().build()
    }

    /// Engine with the default pipeline and a host-supplied cost table.
    pub fn with_costs(costs: CostTable) -> Self {
        MarshalBuilder::default().costs(costs).build()
    }

    /// Run one decision pass for `player` against `snapshot`.
    ///
    /// Tolerates empty unit lists, a zero stockpile, and unknown unit kinds;
    /// a unit with no viable decision simply gets no directive.
    pub fn decide(&mut self, player: PlayerId, snapshot: &Snapshot) -> DirectiveSet {
        let state = classify(player, snapshot);
        self.pools.reconcile(&state);

        let mut out = DirectiveSet::new();
        let mut ctx = TickContext {
            state: &state,
            pools: &mut self.pools,
            costs: &self.costs,
            stockpile: snapshot.stockpile,
            out: &mut out,
        };
        for controller in &self.controllers {
            controller.run(&mut ctx);
        }

        debug!(
            "decide: player {} emitted {} directives ({} own units visible)",
            player,
            out.len(),
            state.own.all.len()
        );
        out
    }

    /// The persistent role pools, e.g. for host-side snapshotting.
    pub fn pools(&self) -> &RolePools {
        &self.pools
    }

    /// Restore role pools saved by a previous host session. The next
    /// `decide` call reconciles them against the live snapshot, so stale
    /// members are harmless.
    pub fn restore_pools(&mut self, pools: RolePools) {
        self.pools = pools;
    }
}

impl Default for Marshal {
    fn default() -> Self {
        Self::new()
    }
}
