//! Nearest/within-radius queries over unit collections.
//!
//! All queries use Manhattan distance (`Location::distance_to`). Ties in
//! `find_closest` break on the first element encountered, so callers relying
//! on a pinned target must pass collections in stable order.

use crate::location::Location;
use crate::unit::Unit;

/// The element of `units` closest to `reference`, or `None` if empty.
/// Ties break on iteration order: the first minimal element wins.
pub fn find_closest(units: &[Unit], reference: Location) -> Option<Unit> {
    let mut best: Option<(Unit, u32)> = None;
    for unit in units {
        let d = unit.pos.distance_to(reference);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((*unit, d)),
        }
    }
    best.map(|(unit, _)| unit)
}

/// All elements of `units` within `radius` of `reference`, in input order.
pub fn find_within(units: &[Unit], reference: Location, radius: u32) -> Vec<Unit> {
    units
        .iter()
        .filter(|unit| unit.pos.distance_to(reference) <= radius)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UnitKind;
    use crate::unit::UnitId;

    fn at(id: u64, x: u32, y: u32) -> Unit {
        Unit::new(
            UnitId(id),
            UnitKind::Worker,
            0,
            Location::from_coords(x, y),
            true,
        )
    }

    #[test]
    fn closest_of_empty_is_none() {
        assert!(find_closest(&[], Location::from_coords(0, 0)).is_none());
    }

    #[test]
    fn closest_breaks_ties_on_first_encountered() {
        // Both at distance 2 from (2, 2); the first in the slice wins.
        let units = [at(1, 2, 4), at(2, 4, 2)];
        let found = find_closest(&units, Location::from_coords(2, 2)).unwrap();
        assert_eq!(found.id, UnitId(1));
    }

    #[test]
    fn closest_prefers_strictly_nearer() {
        let units = [at(1, 9, 9), at(2, 1, 1), at(3, 5, 5)];
        let found = find_closest(&units, Location::from_coords(0, 0)).unwrap();
        assert_eq!(found.id, UnitId(2));
    }

    #[test]
    fn within_preserves_input_order_and_boundary() {
        let units = [at(1, 0, 3), at(2, 5, 5), at(3, 3, 0), at(4, 2, 2)];
        let near = find_within(&units, Location::from_coords(0, 0), 3);
        let ids: Vec<u64> = near.iter().map(|u| u.id.0).collect();
        // Distance exactly equal to the radius is included.
        assert_eq!(ids, vec![1, 3]);
    }
}
