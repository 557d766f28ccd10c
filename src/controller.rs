//! Core types for the controller pipeline.
//!
//! `TickContext` is the shared per-tick working state handed to each
//! controller in pipeline order. `UnitController` is the trait each per-unit-
//! class decision policy implements. Later controllers observe role-pool
//! mutations made by earlier ones, so pipeline order is part of the contract.

use crate::catalog::{CostTable, UnitKind};
use crate::classifier::TickState;
use crate::directive::DirectiveSet;
use crate::roles::RolePools;

/// Per-tick working state shared down the controller pipeline.
pub struct TickContext<'a> {
    /// The classified snapshot (read-only).
    pub state: &'a TickState,
    /// Persistent role pools, already reconciled for this tick.
    pub pools: &'a mut RolePools,
    /// Host-supplied unit costs.
    pub costs: &'a CostTable,
    /// Tick-start resource stockpile. Affordability checks read this without
    /// debiting it; the simulation arbitrates over-commitment.
    pub stockpile: u32,
    /// Directives emitted so far this pass.
    pub out: &'a mut DirectiveSet,
}

impl TickContext<'_> {
    pub fn can_afford(&self, kind: UnitKind) -> bool {
        self.stockpile >= self.costs.cost(kind)
    }
}

/// One per-unit-class decision policy in the pipeline.
pub trait UnitController {
    fn name(&self) -> &str;

    /// Decide for every idle unit of this controller's class. Must tolerate
    /// empty buckets and never panic; a unit with no viable decision simply
    /// gets no directive.
    fn run(&self, ctx: &mut TickContext);
}
