//! Path search over a bounded 2-D grid.
//!
//! Every algorithm returns the path it found (if any) together with the
//! order in which it discovered cells, so a caller can replay the
//! exploration. See [`search()`] for the single entry point and [`Algorithm`]
//! for the available strategies.

pub mod algorithms;
pub mod error;
pub mod grid;
mod search;

pub use algorithms::{DEFAULT_DEPTH_LIMIT, PathfindingAlgorithm, SearchResult};
pub use error::{Endpoint, GridError, SearchError};
pub use grid::{Cell, Coordinate, Direction, Grid, ParsedMap, WEIGHT_RANGE, WeightGrid};
pub use search::{Algorithm, search};
