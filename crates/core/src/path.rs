//! A* shortest-path search over a cell store.

use crate::{
    error::GridError,
    grid::{Cell, CellStore},
    hex::{Coord, CoordMap, CoordSet},
};
use log::{debug, trace};
use std::{cmp::Ordering, collections::BinaryHeap};

/// The traversability and cost rules a path search runs under. Injected per
/// call, so the same store can be searched under different rules.
pub trait PathPolicy<C> {
    /// Should the search route around this cell? The destination is exempt:
    /// a blocking destination can still be reached, it just can't be passed
    /// through.
    fn blocks_movement(&self, cell: &C) -> bool;

    /// The cost of moving between two adjacent cells. Must be positive.
    fn movement_cost(&self, from: &C, to: &C) -> u32;
}

/// The stock policy: every step costs 1, and a cell blocks movement iff its
/// own [Cell::blocks_movement] says so.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultPolicy;

impl<C: Cell> PathPolicy<C> for DefaultPolicy {
    fn blocks_movement(&self, cell: &C) -> bool {
        cell.blocks_movement()
    }

    fn movement_cost(&self, _from: &C, _to: &C) -> u32 {
        1
    }
}

/// Find the cheapest path from `start` to `destination` under
/// [DefaultPolicy]. See [path_between_with].
pub fn path_between<S>(
    start: Coord,
    destination: Coord,
    store: &S,
) -> Result<Vec<Coord>, GridError>
where
    S: CellStore,
    S::Cell: Cell,
{
    path_between_with(start, destination, store, &DefaultPolicy)
}

/// Find the cheapest path from `start` to `destination` under the given
/// policy, using A* with the grid distance as the heuristic. The heuristic
/// never overestimates as long as every movement cost is at least 1, so the
/// returned path is cost-optimal.
///
/// The returned sequence starts with the first step after `start` and ends
/// with `destination`; when `start == destination` it is empty. Ties between
/// equally promising frontier cells break by insertion order, so repeated
/// searches over an unchanged store return the same path.
///
/// Errors with [GridError::NotFound] if either endpoint has no cell in the
/// store, and [GridError::NoPathFound] if the frontier empties before the
/// destination is reached.
pub fn path_between_with<S, P>(
    start: Coord,
    destination: Coord,
    store: &S,
    policy: &P,
) -> Result<Vec<Coord>, GridError>
where
    S: CellStore,
    P: PathPolicy<S::Cell>,
{
    trace!("searching path {} -> {}", start, destination);
    store.get(start).ok_or(GridError::NotFound(start))?;
    store.get(destination).ok_or(GridError::NotFound(destination))?;

    // All search scratch state lives in these per-call collections, never on
    // the cells themselves, so nested or repeated searches can't observe
    // each other's scores
    let mut nodes: CoordMap<SearchNode> = CoordMap::default();
    let mut closed = CoordSet::default();
    let mut open = BinaryHeap::new();
    let mut sequence = 0u64;

    nodes.insert(
        start,
        SearchNode {
            g_score: 0,
            came_from: None,
        },
    );
    open.push(OpenEntry {
        f_score: start.distance(destination),
        sequence,
        pos: start,
    });

    while let Some(OpenEntry { pos: current, .. }) = open.pop() {
        if current == destination {
            return Ok(reconstruct(&nodes, start, destination));
        }
        if !closed.insert(current) {
            // A cheaper entry for this coordinate was already finalized;
            // this one is stale
            continue;
        }

        let current_g = nodes[&current].g_score;
        let current_cell = store
            .get(current)
            .expect("open-set coordinate has no cell in the store");

        for neighbor in current.neighbors() {
            if closed.contains(&neighbor) {
                continue;
            }
            let neighbor_cell = match store.get(neighbor) {
                Some(cell) => cell,
                None => continue,
            };
            if policy.blocks_movement(neighbor_cell) && neighbor != destination {
                continue;
            }

            let tentative_g =
                current_g + policy.movement_cost(current_cell, neighbor_cell);
            let improved = nodes
                .get(&neighbor)
                .map_or(true, |node| tentative_g < node.g_score);
            if improved {
                nodes.insert(
                    neighbor,
                    SearchNode {
                        g_score: tentative_g,
                        came_from: Some(current),
                    },
                );
                sequence += 1;
                open.push(OpenEntry {
                    f_score: tentative_g + neighbor.distance(destination),
                    sequence,
                    pos: neighbor,
                });
            }
        }
    }

    debug!("frontier exhausted, no path {} -> {}", start, destination);
    Err(GridError::NoPathFound {
        from: start,
        to: destination,
    })
}

/// Follow predecessor links back from the destination, then flip the result
/// into walking order. The start cell is not part of the returned path.
fn reconstruct(
    nodes: &CoordMap<SearchNode>,
    start: Coord,
    destination: Coord,
) -> Vec<Coord> {
    let mut path = Vec::new();
    let mut current = destination;
    while current != start {
        path.push(current);
        current = nodes[&current]
            .came_from
            .expect("predecessor chain broken before reaching the start");
    }
    path.reverse();
    path
}

/// Per-coordinate scratch state for one search invocation. The f-score is
/// not stored here; it only matters for frontier ordering.
#[derive(Copy, Clone, Debug)]
struct SearchNode {
    g_score: u32,
    came_from: Option<Coord>,
}

/// A frontier entry. `sequence` is a monotonically increasing insertion
/// counter, so equal f-scores pop in first-inserted order — deterministic
/// without promising any particular geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct OpenEntry {
    f_score: u32,
    sequence: u64,
    pos: Coord,
}

// std's BinaryHeap puts the max value at the top, so the ordering of
// OpenEntry is reversed
impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.f_score, other.sequence).cmp(&(self.f_score, self.sequence))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
