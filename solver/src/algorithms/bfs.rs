use std::collections::VecDeque;

use crate::grid::{Coordinate, Direction, Grid};

use super::{
    path::ParentMap,
    traits::{PathfindingAlgorithm, SearchResult},
};

/// breadth-first search, fewest moves under 8-way adjacency
#[allow(clippy::upper_case_acronyms)]
pub struct BFS;

impl PathfindingAlgorithm for BFS {
    fn find_path(&self, grid: &Grid, start: Coordinate, target: Coordinate) -> SearchResult {
        let mut parents = ParentMap::rooted(grid, start);
        let mut queue = VecDeque::from([start]);
        let mut explored = Vec::new();

        while let Some(current) = queue.pop_front() {
            if current == target {
                break;
            }

            for neighbor in grid.neighbors(current, &Direction::ALL) {
                if !parents.contains(neighbor) {
                    parents.insert(neighbor, current);
                    queue.push_back(neighbor);
                    explored.push(neighbor);
                }
            }
        }

        SearchResult::new(parents.reconstruct(target), explored)
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}
