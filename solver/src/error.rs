use std::fmt;

use crate::grid::Coordinate;

/// Which end of a search a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Caller contract violations, rejected before any search runs.
///
/// Failing to find a path is not an error; see
/// [`SearchResult`](crate::SearchResult).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("{role} {position} is outside the {cols}x{rows} grid")]
    OutOfBounds {
        role: Endpoint,
        position: Coordinate,
        cols: usize,
        rows: usize,
    },

    #[error("{role} {position} is blocked")]
    Blocked { role: Endpoint, position: Coordinate },

    #[error("depth limit must be positive")]
    InvalidLimit,

    #[error("weight grid is {}x{}, expected {}x{}", .found.0, .found.1, .expected.0, .expected.1)]
    WeightShape {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("open cell {position} has a non-positive weight")]
    NonPositiveWeight { position: Coordinate },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell {symbol:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, symbol: char },

    #[error("marker {0:?} appears more than once")]
    DuplicateMarker(char),

    #[error("invalid coordinate {0:?}, expected `x,y`")]
    InvalidCoordinate(String),
}
