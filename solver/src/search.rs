use log::debug;

use crate::{
    algorithms::{
        BFS, Bidirectional, DEFAULT_DEPTH_LIMIT, DFS, DLS, IDDFS, OrthogonalDFS,
        PathfindingAlgorithm, SearchResult, UCS,
    },
    error::{Endpoint, SearchError},
    grid::{Coordinate, Grid, WeightGrid},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Algorithm {
    BFS,
    DFS,
    DFSOrthogonal,
    UCS,
    DLS,
    IDDFS,
    Bidirectional,
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::BFS,
            Self::DFS,
            Self::DFSOrthogonal,
            Self::UCS,
            Self::DLS,
            Self::IDDFS,
            Self::Bidirectional,
        ]
        .into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BFS => "BFS",
            Self::DFS => "DFS",
            Self::DFSOrthogonal => "DFS (orthogonal)",
            Self::UCS => "UCS",
            Self::DLS => "DLS",
            Self::IDDFS => "IDDFS",
            Self::Bidirectional => "Bidirectional",
        }
    }

    /// Whether the algorithm reads cell weights.
    pub fn is_weighted(&self) -> bool {
        matches!(self, Self::UCS)
    }

    /// Whether the algorithm honours a depth limit.
    pub fn is_depth_limited(&self) -> bool {
        matches!(self, Self::DLS)
    }
}

/// Find a path from `start` to `target` with `algorithm`.
///
/// `weights` is only read by [`Algorithm::UCS`] and `limit` only by
/// [`Algorithm::DLS`] (default [`DEFAULT_DEPTH_LIMIT`]), but both are
/// validated whenever given. An unreachable target is reported through
/// [`SearchResult::path`], not as an error.
pub fn search(
    algorithm: Algorithm,
    start: Coordinate,
    target: Coordinate,
    grid: &Grid,
    weights: Option<&WeightGrid>,
    limit: Option<usize>,
) -> Result<SearchResult, SearchError> {
    check_endpoint(grid, start, Endpoint::Start)?;
    check_endpoint(grid, target, Endpoint::Target)?;

    if let Some(weights) = weights {
        check_weights(grid, weights)?;
    }

    let limit = match limit {
        Some(0) => return Err(SearchError::InvalidLimit),
        Some(limit) => limit,
        None => DEFAULT_DEPTH_LIMIT,
    };

    debug!("{}: {} -> {}", algorithm.name(), start, target);

    let result = match algorithm {
        Algorithm::BFS => BFS.find_path(grid, start, target),
        Algorithm::DFS => DFS.find_path(grid, start, target),
        Algorithm::DFSOrthogonal => OrthogonalDFS.find_path(grid, start, target),
        Algorithm::UCS => UCS::new(weights).find_path(grid, start, target),
        Algorithm::DLS => DLS::new(limit).find_path(grid, start, target),
        Algorithm::IDDFS => IDDFS.find_path(grid, start, target),
        Algorithm::Bidirectional => Bidirectional.find_path(grid, start, target),
    };

    match result.hops() {
        Some(hops) => debug!(
            "{}: {} hops, {} explored",
            algorithm.name(),
            hops,
            result.explored.len()
        ),
        None => debug!(
            "{}: no path, {} explored",
            algorithm.name(),
            result.explored.len()
        ),
    }

    Ok(result)
}

fn check_endpoint(grid: &Grid, position: Coordinate, role: Endpoint) -> Result<(), SearchError> {
    if !grid.in_bounds(position) {
        return Err(SearchError::OutOfBounds {
            role,
            position,
            cols: grid.cols(),
            rows: grid.rows(),
        });
    }

    if !grid.is_open(position) {
        return Err(SearchError::Blocked { role, position });
    }

    Ok(())
}

fn check_weights(grid: &Grid, weights: &WeightGrid) -> Result<(), SearchError> {
    if weights.bounds() != grid.bounds() {
        return Err(SearchError::WeightShape {
            expected: grid.bounds(),
            found: weights.bounds(),
        });
    }

    let zero = grid
        .iter()
        .find(|&(pos, cell)| cell.is_open() && weights.get(pos) == Some(0));

    match zero {
        Some((position, _)) => Err(SearchError::NonPositiveWeight { position }),
        None => Ok(()),
    }
}
