use std::collections::VecDeque;

use crate::grid::{Coordinate, Direction, Grid};

use super::{
    path::ParentMap,
    traits::{PathfindingAlgorithm, SearchResult},
};

/// breadth-first search from both ends, one expansion per side per round
///
/// Stops at the first neighbour already seen by the other side, so the path
/// is not guaranteed to be the shortest.
pub struct Bidirectional;

struct Frontier {
    queue: VecDeque<Coordinate>,
    parents: ParentMap,
}

impl Frontier {
    fn new(grid: &Grid, root: Coordinate) -> Self {
        Self {
            queue: VecDeque::from([root]),
            parents: ParentMap::rooted(grid, root),
        }
    }

    /// Expand the next queued cell. Returns the meeting cell if a neighbour
    /// was already discovered by `other`.
    fn expand(
        &mut self,
        grid: &Grid,
        other: &ParentMap,
        explored: &mut Vec<Coordinate>,
    ) -> Option<Coordinate> {
        let current = self.queue.pop_front()?;

        for neighbor in grid.neighbors(current, &Direction::ALL) {
            if other.contains(neighbor) {
                self.parents.insert(neighbor, current);
                return Some(neighbor);
            }

            if !self.parents.contains(neighbor) {
                self.parents.insert(neighbor, current);
                self.queue.push_back(neighbor);
                explored.push(neighbor);
            }
        }

        None
    }
}

/// start -> meeting from the forward side, then meeting -> goal from the
/// backward side without repeating the meeting cell.
fn splice(
    forward: &ParentMap,
    backward: &ParentMap,
    meeting: Coordinate,
) -> Option<Vec<Coordinate>> {
    let mut path = forward.reconstruct(meeting)?;
    let tail = backward.reconstruct(meeting)?;
    path.extend(tail.into_iter().rev().skip(1));
    Some(path)
}

impl PathfindingAlgorithm for Bidirectional {
    fn find_path(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> SearchResult {
        if start == goal {
            return SearchResult::new(Some(vec![start]), Vec::new());
        }

        let mut forward = Frontier::new(grid, start);
        let mut backward = Frontier::new(grid, goal);
        let mut explored = Vec::new();

        while !forward.queue.is_empty() && !backward.queue.is_empty() {
            if let Some(meeting) = forward.expand(grid, &backward.parents, &mut explored) {
                let path = splice(&forward.parents, &backward.parents, meeting);
                return SearchResult::new(path, explored);
            }

            if let Some(meeting) = backward.expand(grid, &forward.parents, &mut explored) {
                let path = splice(&forward.parents, &backward.parents, meeting);
                return SearchResult::new(path, explored);
            }
        }

        SearchResult::not_found(explored)
    }

    fn name(&self) -> &'static str {
        "Bidirectional"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::BFS;

    #[test]
    fn open_grid_meets_in_the_middle() {
        let grid = Grid::open(5, 5).unwrap();
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(4, 4);

        let result = Bidirectional.find_path(&grid, start, goal);
        let path = result.path.clone().unwrap();

        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]), "{} -> {}", pair[0], pair[1]);
        }

        let bfs = BFS.find_path(&grid, start, goal);
        assert!(result.hops() <= bfs.hops());
        assert!(!result.explored.contains(&start));
        assert!(!result.explored.contains(&goal));
    }

    #[test]
    fn adjacent_endpoints() {
        let grid = Grid::open(3, 3).unwrap();
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(1, 0);

        let result = Bidirectional.find_path(&grid, start, goal);
        assert_eq!(result.path, Some(vec![start, goal]));
        assert!(result.explored.is_empty());
    }

    #[test]
    fn backward_side_finds_the_meeting() {
        let grid = Grid::open(3, 1).unwrap();
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(2, 0);

        let result = Bidirectional.find_path(&grid, start, goal);
        assert_eq!(result.path, Some(vec![start, Coordinate::new(1, 0), goal]));
        assert_eq!(result.explored, vec![Coordinate::new(1, 0)]);
    }

    #[test]
    fn corridor_meets_after_one_round() {
        let grid = Grid::open(4, 1).unwrap();
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(3, 0);

        let result = Bidirectional.find_path(&grid, start, goal);
        assert_eq!(result.hops(), Some(3));
        assert_eq!(
            result.explored,
            vec![Coordinate::new(1, 0), Coordinate::new(2, 0)]
        );
    }

    #[test]
    fn same_cell() {
        let grid = Grid::open(2, 2).unwrap();
        let start = Coordinate::new(1, 1);
        let result = Bidirectional.find_path(&grid, start, start);
        assert_eq!(result.path, Some(vec![start]));
    }

    #[test]
    fn separated_halves() {
        let mut grid = Grid::open(3, 3).unwrap();
        for y in 0..3 {
            grid.set_blocked(Coordinate::new(1, y), true);
        }

        let result = Bidirectional.find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2));
        assert!(!result.found());
        assert!(!result.explored.contains(&Coordinate::new(2, 2)));
    }
}
