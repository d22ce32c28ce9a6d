use log::trace;

use crate::grid::{Coordinate, Grid};

use super::{
    dls::depth_limited,
    traits::{PathfindingAlgorithm, SearchResult},
};

/// iterative deepening: depth-limited search at limits 0, 1, 2, ...
///
/// The trace is every attempt's trace in order, including the failed ones.
#[allow(clippy::upper_case_acronyms)]
pub struct IDDFS;

impl PathfindingAlgorithm for IDDFS {
    fn find_path(&self, grid: &Grid, start: Coordinate, target: Coordinate) -> SearchResult {
        let mut explored = Vec::new();

        for limit in 0..grid.len() {
            let attempt = depth_limited(grid, start, target, limit);
            trace!("limit {limit}: {} explored", attempt.explored.len());

            explored.extend(attempt.explored);
            if let Some(path) = attempt.path {
                return SearchResult::new(Some(path), explored);
            }
        }

        SearchResult::not_found(explored)
    }

    fn name(&self) -> &'static str {
        "IDDFS"
    }
}
