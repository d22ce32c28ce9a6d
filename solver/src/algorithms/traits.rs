use crate::grid::{Coordinate, Grid};

/// One search strategy over a [`Grid`].
///
/// Implementations assume `start` and `target` are in bounds and open;
/// [`search`](crate::search()) checks that before dispatching.
pub trait PathfindingAlgorithm {
    fn find_path(&self, grid: &Grid, start: Coordinate, target: Coordinate) -> SearchResult;

    fn name(&self) -> &'static str;
}

/// Outcome of a single search call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// `start..=target`, or `None` if the target was never reached.
    pub path: Option<Vec<Coordinate>>,
    /// Cells in the order they were first discovered. Never holds the start.
    pub explored: Vec<Coordinate>,
}

impl SearchResult {
    pub fn new(path: Option<Vec<Coordinate>>, explored: Vec<Coordinate>) -> Self {
        Self { path, explored }
    }

    pub fn not_found(explored: Vec<Coordinate>) -> Self {
        Self::new(None, explored)
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves along the path.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}
