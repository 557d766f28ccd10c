//! Rule-based tactical decision engine for a grid RTS agent.
//!
//! Once per simulation tick the host hands the engine a [`Snapshot`] of the
//! battlefield; the engine classifies it, reconciles its persistent role
//! pools (harvesters/builders for workers, defenders/attackers for lights),
//! runs a fixed pipeline of per-unit-class controllers, and returns a
//! [`DirectiveSet`] for the external action-execution layer. Pathfinding,
//! simulation legality, and the unit-type bootstrap are the host's problem;
//! the engine holds no I/O and no state beyond the role pools.

pub mod catalog;
pub mod classifier;
pub mod constants;
pub mod controller;
pub mod controllers;
pub mod directive;
pub mod engine;
pub mod location;
pub mod roles;
pub mod snapshot;
pub mod spatial;
pub mod unit;

pub use catalog::{CostTable, UnitFlags, UnitKind};
pub use classifier::{classify, Bucket, TickState};
pub use controller::{TickContext, UnitController};
pub use directive::{Action, Directive, DirectiveSet};
pub use engine::{Marshal, MarshalBuilder};
pub use location::Location;
pub use roles::RolePools;
pub use snapshot::Snapshot;
pub use spatial::{find_closest, find_within};
pub use unit::{PlayerId, Unit, UnitId};
