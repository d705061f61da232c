//! Line-of-sight sweep over a cell store.

use crate::{
    grid::{Cell, CellStore},
    hex::Coord,
};
use log::trace;

/// Every coordinate visible from `origin` out to `range` steps, assuming
/// nothing stands in the way. Sight is blocked by cells whose
/// [Cell::blocks_line_of_sight] is true; a blocking cell is itself visible,
/// but nothing behind it on the same line is.
///
/// The sweep traces the straight line from `origin` to each member of the
/// outer ring at `range` and collects every present cell it crosses, so a
/// coordinate crossed by several lines appears once per crossing — collect
/// into a [CoordSet](crate::CoordSet) if you want each coordinate once.
/// Coordinates with no cell are skipped without blocking the line.
///
/// NOTE: this is an approximation, not an exact visibility polygon.
/// Accuracy is not guaranteed; the trade-off buys speed.
pub fn visible_coords<S>(origin: Coord, range: u32, store: &S) -> Vec<Coord>
where
    S: CellStore,
    S::Cell: Cell,
{
    visible_coords_with(origin, range, store, |cell| cell.blocks_line_of_sight())
}

/// [visible_coords] with a caller-supplied sight-blocking predicate instead
/// of the [Cell] trait's.
pub fn visible_coords_with<S, F>(
    origin: Coord,
    range: u32,
    store: &S,
    blocks_sight: F,
) -> Vec<Coord>
where
    S: CellStore,
    F: Fn(&S::Cell) -> bool,
{
    let mut result = Vec::new();
    for member in origin.ring(range) {
        trace!("sweeping sight line {} -> {}", origin, member);
        for pos in origin.line(member) {
            if let Some(cell) = store.get(pos) {
                result.push(pos);
                if blocks_sight(cell) {
                    // The blocker is visible; everything behind it is not
                    break;
                }
            }
        }
    }
    result
}
