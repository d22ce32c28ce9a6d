use crate::grid::{Coordinate, Direction, Grid};

use super::{
    path::ParentMap,
    traits::{PathfindingAlgorithm, SearchResult},
};

pub const DEFAULT_DEPTH_LIMIT: usize = 20;

/// depth-first search that stops expanding at `limit` moves from the start
#[allow(clippy::upper_case_acronyms)]
pub struct DLS {
    limit: usize,
}

impl DLS {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for DLS {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_LIMIT)
    }
}

impl PathfindingAlgorithm for DLS {
    fn find_path(&self, grid: &Grid, start: Coordinate, target: Coordinate) -> SearchResult {
        depth_limited(grid, start, target, self.limit)
    }

    fn name(&self) -> &'static str {
        "DLS"
    }
}

/// Depth-limited search. A `limit` of 0 only ever matches `start == target`.
///
/// Cells found at the boundary depth are recorded but not expanded.
pub fn depth_limited(
    grid: &Grid,
    start: Coordinate,
    target: Coordinate,
    limit: usize,
) -> SearchResult {
    let mut parents = ParentMap::rooted(grid, start);
    let mut stack = vec![(start, 0)];
    let mut explored = Vec::new();

    while let Some((current, depth)) = stack.pop() {
        if current == target {
            return SearchResult::new(parents.reconstruct(target), explored);
        }

        if depth >= limit {
            continue;
        }

        for neighbor in grid.neighbors(current, &Direction::ALL) {
            if !parents.contains(neighbor) {
                parents.insert(neighbor, current);
                stack.push((neighbor, depth + 1));
                explored.push(neighbor);
            }
        }
    }

    SearchResult::not_found(explored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_only_matches_start() {
        let grid = Grid::open(4, 4).unwrap();
        let start = Coordinate::new(1, 1);

        let same = depth_limited(&grid, start, start, 0);
        assert_eq!(same.path, Some(vec![start]));

        let other = depth_limited(&grid, start, Coordinate::new(2, 1), 0);
        assert_eq!(other.path, None);
        assert!(other.explored.is_empty());
    }

    #[test]
    fn boundary_cells_are_recorded_not_expanded() {
        let grid = Grid::open(5, 1).unwrap();
        let start = Coordinate::new(0, 0);

        let result = depth_limited(&grid, start, Coordinate::new(4, 0), 2);
        assert!(!result.found());
        assert_eq!(
            result.explored,
            vec![Coordinate::new(1, 0), Coordinate::new(2, 0)]
        );
    }

    #[test]
    fn limit_caps_path_length() {
        let corridor = Grid::open(10, 1).unwrap();
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(9, 0);

        assert_eq!(DLS::new(9).find_path(&corridor, start, end).hops(), Some(9));
        assert!(!DLS::new(8).find_path(&corridor, start, end).found());

        let open = Grid::open(10, 10).unwrap();
        for limit in [9, 12, 20] {
            let result = DLS::new(limit).find_path(&open, start, Coordinate::new(9, 9));
            if let Some(hops) = result.hops() {
                assert!(hops <= limit, "{hops} hops at limit {limit}");
            }
        }
    }

    #[test]
    fn default_limit() {
        assert_eq!(DLS::default().limit(), DEFAULT_DEPTH_LIMIT);
    }
}
