//! Hexmap is a hexagonal-grid coordinate and spatial-query engine. It models
//! positions with axial coordinates and answers distance, neighbor, line,
//! ring/disk, line-of-sight, and shortest-path queries over a sparse set of
//! occupied cells. Rendering, input handling and other presentation concerns
//! are implemented elsewhere; this crate never touches pixels.
//!
//! ```
//! use hexmap::{path_between, Cell, Coord, HexGrid};
//!
//! struct Tile {
//!     wall: bool,
//! }
//!
//! impl Cell for Tile {
//!     fn blocks_line_of_sight(&self) -> bool {
//!         self.wall
//!     }
//!     fn blocks_movement(&self) -> bool {
//!         self.wall
//!     }
//! }
//!
//! // A small open field with one wall
//! let mut grid = HexGrid::hexagon(2, |_| Tile { wall: false });
//! grid.insert(Coord::new(1, 0), Tile { wall: true });
//!
//! let path = path_between(Coord::ORIGIN, Coord::new(2, 0), &grid).unwrap();
//! assert_eq!(path.len(), 3); // one step longer than the straight line
//! assert_eq!(*path.last().unwrap(), Coord::new(2, 0));
//! ```
//!
//! Geometry lives on [Coord] itself; the cell-aware queries
//! ([visible_coords], [path_between]) take any [CellStore] the caller
//! supplies. [HexGrid] is a ready-made store for callers that don't have
//! their own.

mod error;
mod grid;
mod hex;
mod path;
mod visibility;

pub use crate::{
    error::GridError,
    grid::{Cell, CellStore, HexGrid},
    hex::{Coord, CoordMap, CoordSet, Direction},
    path::{path_between, path_between_with, DefaultPolicy, PathPolicy},
    visibility::{visible_coords, visible_coords_with},
};
