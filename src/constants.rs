//! Tuning constants for the decision policies.
//!
//! These are the fixed rule-of-thumb numbers the controllers reason with.
//! They are deliberately not configurable at runtime: the policies were tuned
//! as a set and the tests pin behavior against these exact values.

/// Target number of standing harvesters per reachable resource node.
pub const HARVESTERS_PER_RESOURCE: usize = 2;

/// A resource node is saturated once this many own units stand within
/// radius 1 of it; no further harvester is sent there.
pub const RESOURCE_SATURATION_CAP: usize = 2;

/// A base with an existing barracks closer than this needs no new builder.
pub const BARRACKS_ADJACENCY_GUARD: u32 = 2;

/// Desired number of light defenders per own base.
pub const DEFENDER_QUOTA_PER_BASE: usize = 5;

/// Radius around a base within which lights count toward its local garrison.
pub const GARRISON_RADIUS: u32 = 4;

/// Defenders hold position on the ring at exactly this Manhattan distance
/// from the base they protect.
pub const FORMATION_RADIUS: u32 = 4;

/// An enemy inside this radius of a protected base pulls defenders off the
/// formation ring to intercept.
pub const INTERCEPT_RADIUS: u32 = 8;
