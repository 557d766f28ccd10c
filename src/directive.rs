//! Directive output records.
//!
//! A `DirectiveSet` is produced fresh each tick and handed to the external
//! action-execution layer, which owns pathfinding and simulation-level
//! legality. The engine keeps no directive history and assumes the executor
//! no-ops an impossible directive rather than erroring back.

use crate::catalog::UnitKind;
use crate::location::Location;
use crate::unit::UnitId;
use serde::{Deserialize, Serialize};

/// What a unit should do next.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Produce a unit of the given kind at this structure.
    Train(UnitKind),
    /// Construct a structure of the given kind at the given cell.
    Build { kind: UnitKind, at: Location },
    /// Standing order: gather from `resource`, deliver to `dropoff`.
    Harvest { resource: UnitId, dropoff: UnitId },
    /// Move toward the given cell.
    Move(Location),
    /// Engage the given unit.
    Attack(UnitId),
}

/// One decision for one unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub unit: UnitId,
    pub action: Action,
}

/// The decisions emitted by one decision pass, in emission order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DirectiveSet {
    directives: Vec<Directive>,
}

impl DirectiveSet {
    pub fn new() -> Self {
        DirectiveSet {
            directives: Vec::new(),
        }
    }

    pub fn train(&mut self, unit: UnitId, kind: UnitKind) {
        self.push(unit, Action::Train(kind));
    }

    pub fn build(&mut self, unit: UnitId, kind: UnitKind, at: Location) {
        self.push(unit, Action::Build { kind, at });
    }

    pub fn harvest(&mut self, unit: UnitId, resource: UnitId, dropoff: UnitId) {
        self.push(unit, Action::Harvest { resource, dropoff });
    }

    pub fn move_to(&mut self, unit: UnitId, at: Location) {
        self.push(unit, Action::Move(at));
    }

    pub fn attack(&mut self, unit: UnitId, target: UnitId) {
        self.push(unit, Action::Attack(target));
    }

    fn push(&mut self, unit: UnitId, action: Action) {
        self.directives.push(Directive { unit, action });
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter()
    }

    /// The directive emitted for `unit` this tick, if any. At most one
    /// directive is emitted per unit per pass.
    pub fn for_unit(&self, unit: UnitId) -> Option<&Directive> {
        self.directives.iter().find(|d| d.unit == unit)
    }
}

impl IntoIterator for DirectiveSet {
    type Item = Directive;
    type IntoIter = std::vec::IntoIter<Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.into_iter()
    }
}

impl<'a> IntoIterator for &'a DirectiveSet {
    type Item = &'a Directive;
    type IntoIter = std::slice::Iter<'a, Directive>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.iter()
    }
}
