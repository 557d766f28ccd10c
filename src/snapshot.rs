//! Per-tick battlefield input handed to the engine by the host loop.
//!
//! A snapshot lives for exactly one `decide` call. The engine derives all
//! bucketed views and the occupancy lookup from the unit list at
//! classification time; the host supplies nothing beyond what is here.

use crate::unit::Unit;

/// Everything the agent can see at one simulation tick.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Board width in cells.
    pub width: u32,
    /// Board height in cells.
    pub height: u32,
    /// All visible units, in the simulation's stable iteration order.
    /// Order matters: nearest-search ties break on first encountered.
    pub units: Vec<Unit>,
    /// The requesting player's resource stockpile at tick start.
    pub stockpile: u32,
}

impl Snapshot {
    pub fn new(width: u32, height: u32, units: Vec<Unit>, stockpile: u32) -> Self {
        Snapshot {
            width,
            height,
            units,
            stockpile,
        }
    }
}
