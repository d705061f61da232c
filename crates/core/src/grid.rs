//! The cell store contract consumed by the spatial queries, plus [HexGrid],
//! a ready-made map-backed store.

use crate::hex::{Coord, CoordMap};
use fnv::FnvBuildHasher;
use log::debug;
use std::cmp;

/// The two traits of a cell that the spatial queries care about. The engine
/// has no further opinion on what a cell contains.
pub trait Cell {
    /// If true, cells behind this one cannot be seen (but this cell itself
    /// can still be seen).
    fn blocks_line_of_sight(&self) -> bool;

    /// If true, the default pathfinding policy routes around this cell.
    fn blocks_movement(&self) -> bool;
}

/// A read-only mapping from coordinates to cells. The engine never owns the
/// store; callers supply one at query time. Implementations must hold at
/// most one cell per coordinate and should offer O(1) expected lookup.
///
/// Absent coordinates are `None`, never an error — queries that want "only
/// present cells" filter explicitly.
pub trait CellStore {
    type Cell;

    /// The cell at the given coordinate, if there is one.
    fn get(&self, pos: Coord) -> Option<&Self::Cell>;

    /// Does any cell occupy the given coordinate?
    fn contains(&self, pos: Coord) -> bool {
        self.get(pos).is_some()
    }
}

/// A sparse grid of cells keyed by coordinate: the default [CellStore]
/// implementation. One cell per coordinate; inserting at an occupied
/// coordinate replaces the previous cell.
#[derive(Clone, Debug, Default)]
pub struct HexGrid<T> {
    cells: CoordMap<T>,
}

impl<T> HexGrid<T> {
    pub fn new() -> Self {
        Self {
            cells: CoordMap::default(),
        }
    }

    /// Build a grid in a super hexagon pattern: every coordinate within
    /// `radius` steps of the origin gets a cell from the initializer. Radius
    /// 0 means exactly 1 cell, 1 means 7, 2 means 19, and so on — always
    /// `3r(r + 1) + 1` cells in total.
    pub fn hexagon(radius: u32, initializer: impl Fn(Coord) -> T) -> Self {
        let capacity = hexagon_len(radius);
        let mut cells = CoordMap::with_capacity_and_hasher(
            capacity,
            FnvBuildHasher::default(),
        );

        // Iterating q and r independently over [-radius, radius] would give
        // a rhombus; clamping r by -q keeps the super hexagon shape
        // https://www.redblobgames.com/grids/hexagons/#range
        let r_bound = radius as i32;
        for q in -r_bound..=r_bound {
            let r_min = cmp::max(-r_bound, -q - r_bound);
            let r_max = cmp::min(r_bound, -q + r_bound);
            for r in r_min..=r_max {
                let pos = Coord::new(q, r);
                cells.insert(pos, initializer(pos));
            }
        }
        debug_assert_eq!(cells.len(), capacity, "expected 3r(r+1)+1 cells");
        debug!("built hexagon grid of radius {} ({} cells)", radius, capacity);

        Self { cells }
    }

    /// Add a cell at the given coordinate. Returns the cell it replaced, if
    /// the coordinate was already occupied.
    pub fn insert(&mut self, pos: Coord, cell: T) -> Option<T> {
        self.cells.insert(pos, cell)
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        self.cells.get(&pos)
    }

    pub fn get_mut(&mut self, pos: Coord) -> Option<&mut T> {
        self.cells.get_mut(&pos)
    }

    /// Remove and return the cell at the given coordinate, if there is one.
    pub fn remove(&mut self, pos: Coord) -> Option<T> {
        self.cells.remove(&pos)
    }

    /// The number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in the grid, with their coordinates. Iteration order is
    /// arbitrary.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.cells.iter().map(|(pos, cell)| (*pos, cell))
    }

    /// All occupied coordinates, in arbitrary order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.keys().copied()
    }

    /// The present cells on the straight line from `from` to `to`, in line
    /// order. Coordinates with no cell are skipped.
    pub fn cells_on_line(&self, from: Coord, to: Coord) -> Vec<(Coord, &T)> {
        self.present(from.line(to))
    }

    /// The present cells at exactly `radius` steps from `center`, in ring
    /// order. Coordinates with no cell are skipped.
    pub fn cells_on_ring(&self, center: Coord, radius: u32) -> Vec<(Coord, &T)> {
        self.present(center.ring(radius))
    }

    /// The present cells within `radius` steps of `center`, in ascending
    /// radius order. Coordinates with no cell are skipped.
    pub fn cells_in_disk(&self, center: Coord, radius: u32) -> Vec<(Coord, &T)> {
        self.present(center.disk(radius))
    }

    fn present(&self, positions: Vec<Coord>) -> Vec<(Coord, &T)> {
        positions
            .into_iter()
            .filter_map(|pos| self.get(pos).map(|cell| (pos, cell)))
            .collect()
    }
}

impl<T> CellStore for HexGrid<T> {
    type Cell = T;

    fn get(&self, pos: Coord) -> Option<&T> {
        HexGrid::get(self, pos)
    }

    fn contains(&self, pos: Coord) -> bool {
        self.cells.contains_key(&pos)
    }
}

impl<T> FromIterator<(Coord, T)> for HexGrid<T> {
    fn from_iter<I: IntoIterator<Item = (Coord, T)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// The number of cells in a super hexagon of the given radius: a reduction
/// of the geometric sum 1, (+6) 7, (+12) 19, (+18) 37, ...
fn hexagon_len(radius: u32) -> usize {
    let r = radius as usize;
    3 * r * (r + 1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hexagon_len() {
        assert_eq!(hexagon_len(0), 1);
        assert_eq!(hexagon_len(1), 7);
        assert_eq!(hexagon_len(2), 19);
        assert_eq!(hexagon_len(3), 37);
    }

    #[test]
    fn test_hexagon_grid() {
        let grid = HexGrid::hexagon(2, |pos| pos);
        assert_eq!(grid.len(), 19);
        for (pos, cell) in grid.iter() {
            assert_eq!(pos, *cell);
            assert!(Coord::ORIGIN.distance(pos) <= 2);
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut grid = HexGrid::new();
        let pos = Coord::new(4, -1);
        assert_eq!(grid.insert(pos, "old"), None);
        assert_eq!(grid.insert(pos, "new"), Some("old"));
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(pos), Some(&"new"));
        assert_eq!(grid.remove(pos), Some("new"));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_present_cell_filters() {
        // A three-cell row with a hole at (1, 0)
        let grid: HexGrid<()> = [Coord::new(0, 0), Coord::new(2, 0), Coord::new(3, 0)]
            .into_iter()
            .map(|pos| (pos, ()))
            .collect();

        let line: Vec<Coord> = grid
            .cells_on_line(Coord::new(0, 0), Coord::new(3, 0))
            .into_iter()
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(line, vec![Coord::new(0, 0), Coord::new(2, 0), Coord::new(3, 0)]);

        // Only (2, 0) of the radius-2 ring around the start is present
        let ring = grid.cells_on_ring(Coord::new(0, 0), 2);
        assert_eq!(ring.len(), 1);
        assert_eq!(ring[0].0, Coord::new(2, 0));

        assert_eq!(grid.cells_in_disk(Coord::new(0, 0), 3).len(), 3);
    }

    #[test]
    fn test_store_contract() {
        let grid = HexGrid::hexagon(1, |_| ());
        assert!(CellStore::contains(&grid, Coord::ORIGIN));
        assert!(CellStore::get(&grid, Coord::new(0, 1)).is_some());
        assert!(CellStore::get(&grid, Coord::new(5, 5)).is_none());
    }
}
