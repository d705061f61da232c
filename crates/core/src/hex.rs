//! This module holds the basic types of the hex grid: axial coordinates,
//! the six grid directions, and the geometry queries built on them (distance,
//! rounding, lines, rings, disks). See this page for background on the axial
//! and cube coordinate systems:
//! https://www.redblobgames.com/grids/hexagons/#coordinates-axial

use crate::error::GridError;
use derive_more::{Add, AddAssign, Display, Sub, SubAssign};
use fnv::FnvBuildHasher;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use strum::{EnumIter, IntoEnumIterator};

/// An axial coordinate on the hex grid. Each coordinate has a `q` and an `r`
/// component; the third cube component `s` satisfies `q + r + s = 0` for
/// every coordinate, so we only store two and derive `s` as necessary.
///
/// Coordinates are pure values: freely constructed, never mutated, passed by
/// value. Every coordinate is mathematically valid — whether a cell actually
/// occupies it is a [CellStore](crate::CellStore) question, not a coordinate
/// question.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", q, r)]
pub struct Coord {
    q: i32,
    r: i32,
}

impl Coord {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a coordinate from its axial components.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The axial `q` component.
    pub const fn q(self) -> i32 {
        self.q
    }

    /// The axial `r` component.
    pub const fn r(self) -> i32 {
        self.r
    }

    /// The derived cube `s` component (`-q - r`).
    pub const fn s(self) -> i32 {
        -(self.q + self.r)
    }

    /// The grid distance to another coordinate: the number of steps a path
    /// between the two must take. This is the cube Manhattan distance, and
    /// it is exact for all integer inputs (the sum below is always even).
    pub fn distance(self, other: Self) -> u32 {
        (((self.q - other.q).abs()
            + (self.r - other.r).abs()
            + (self.q + self.r - other.q - other.r).abs())
            / 2) as u32
    }

    /// Find the lattice coordinate that best matches fractional axial
    /// coordinates. The fractional pair is lifted to cube space, each axis is
    /// rounded half-up, and then whichever axis picked up the largest
    /// rounding error is recomputed from `x + y + z = 0`. Ties are broken in
    /// axis order x, then y, else z.
    pub fn round(q: f64, r: f64) -> Self {
        let x = q;
        let y = r;
        let z = -x - y;

        let mut rx = round_half_up(x);
        let mut ry = round_half_up(y);
        let rz = round_half_up(z);

        let x_diff = (rx - x).abs();
        let y_diff = (ry - y).abs();
        let z_diff = (rz - z).abs();

        if x_diff > y_diff && x_diff > z_diff {
            rx = -ry - rz;
        } else if y_diff > z_diff {
            ry = -rx - rz;
        }
        // If z had the largest error, correcting it doesn't change the
        // stored (q, r) pair

        Self::new(rx as i32, ry as i32)
    }

    /// The adjacent coordinate in the given direction. Always defined; the
    /// result may or may not hold a cell.
    pub fn neighbor(self, direction: Direction) -> Self {
        self + direction.offset()
    }

    /// All six adjacent coordinates, in direction index order 0..5. The
    /// iterator always contains exactly 6 values.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::iter().map(move |direction| self.neighbor(direction))
    }

    /// Is `other` one of this coordinate's six neighbors?
    pub fn is_adjacent(self, other: Self) -> bool {
        self.neighbors().any(|neighbor| neighbor == other)
    }

    /// All coordinates on the straight line from here to `destination`,
    /// inclusive of both endpoints. Intermediate coordinates are produced by
    /// interpolating in fractional axial space and [rounding](Self::round);
    /// the destination is appended unconditionally so rounding noise near
    /// the end can never drop it. `line(a, a)` is `[a]`.
    pub fn line(self, destination: Self) -> Vec<Coord> {
        let n = self.distance(destination);
        let mut result = Vec::with_capacity(n as usize + 1);
        for i in 0..n {
            let t = f64::from(i) / f64::from(n);
            let q = f64::from(self.q) * (1.0 - t) + f64::from(destination.q) * t;
            let r = f64::from(self.r) * (1.0 - t) + f64::from(destination.r) * t;
            result.push(Self::round(q, r));
        }
        result.push(destination);
        result
    }

    /// All coordinates at exactly `radius` steps from here. Radius 0 yields
    /// just this coordinate. Otherwise the walk starts at the corner `radius`
    /// steps to the Southwest and records a coordinate before each of
    /// `radius` steps in each of the 6 directions, in index order, for a
    /// total of `6 * radius` distinct coordinates.
    ///
    /// The starting corner and winding order are a fixed convention that
    /// line-of-sight and on-ring queries rely on.
    pub fn ring(self, radius: u32) -> Vec<Coord> {
        if radius == 0 {
            return vec![self];
        }

        let mut result = Vec::with_capacity(6 * radius as usize);
        let mut pos = self;
        for _ in 0..radius {
            pos = pos.neighbor(Direction::Southwest);
        }
        for direction in Direction::iter() {
            for _ in 0..radius {
                result.push(pos);
                pos = pos.neighbor(direction);
            }
        }
        result
    }

    /// All coordinates within `radius` steps of here: the concatenation of
    /// [ring](Self::ring) 0 up to and including `radius`, so the order is
    /// ascending radius, then ring order. Total length is
    /// `1 + 3 * radius * (radius + 1)`.
    pub fn disk(self, radius: u32) -> Vec<Coord> {
        let r = radius as usize;
        let mut result = Vec::with_capacity(1 + 3 * r * (r + 1));
        for i in 0..=radius {
            result.extend(self.ring(i));
        }
        result
    }

    /// The direction of the first step on the line from here to `other`.
    /// Returns [GridError::InvalidArgument] when `other` equals this
    /// coordinate (the direction to yourself is undefined).
    ///
    /// Panics if no direction reaches the line's first step; that would mean
    /// [line](Self::line) produced a non-adjacent first step, which is a bug.
    pub fn direction_to(self, other: Self) -> Result<Direction, GridError> {
        if self == other {
            return Err(GridError::InvalidArgument(format!(
                "direction from {} to itself is undefined",
                self
            )));
        }

        // other != self, so the line has at least two elements
        let first_step = self.line(other)[1];
        for direction in Direction::iter() {
            if self.neighbor(direction) == first_step {
                return Ok(direction);
            }
        }
        panic!(
            "no direction from {} reaches {}, the first step of its own line",
            self, first_step
        );
    }
}

/// Java-style half-up rounding: exact halves round toward positive infinity,
/// so e.g. `-0.5` rounds to `0`. Line interpolation lands on exact halves
/// regularly, and [Coord::round] depends on this tie behavior.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// A set of coordinates
pub type CoordSet = HashSet<Coord, FnvBuildHasher>;
/// A map of coordinates to some `T`
pub type CoordMap<T> = HashMap<Coord, T, FnvBuildHasher>;

/// The 6 directions in which a hex cell borders its neighbors. The variant
/// order is load-bearing: it defines the index mapping 0..5, the order in
/// which [Coord::neighbors] is enumerated, and the winding of
/// [Coord::ring] — do not reorder.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize,
)]
pub enum Direction {
    Northwest,
    Northeast,
    East,
    Southeast,
    Southwest,
    West,
}

impl Direction {
    /// This direction's fixed index, 0..5.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction with the given index, or `None` for indexes >= 6.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// The axial offset that moves a coordinate one step in this direction.
    pub const fn offset(self) -> Coord {
        match self {
            Self::Northwest => Coord::new(0, -1),
            Self::Northeast => Coord::new(1, -1),
            Self::East => Coord::new(1, 0),
            Self::Southeast => Coord::new(0, 1),
            Self::Southwest => Coord::new(-1, 1),
            Self::West => Coord::new(-1, 0),
        }
    }
}
