use crate::hex::Coord;
use thiserror::Error;

/// The expected, recoverable failure conditions of the spatial queries.
/// None of these indicate corrupted state; internal invariant violations
/// panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A query was given an argument it is undefined for, e.g. asking for
    /// the direction from a coordinate to itself.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A query needed a cell at this coordinate, but the store has none.
    #[error("no cell at {0}")]
    NotFound(Coord),

    /// The pathfinder exhausted its frontier without reaching the
    /// destination. A normal outcome for unreachable destinations.
    #[error("no path from {from} to {to}")]
    NoPathFound { from: Coord, to: Coord },
}
