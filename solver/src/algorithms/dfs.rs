use crate::grid::{Coordinate, Direction, Grid};

use super::{
    path::ParentMap,
    traits::{PathfindingAlgorithm, SearchResult},
};

/// depth-first search over the default 8-way table
#[allow(clippy::upper_case_acronyms)]
pub struct DFS;

impl PathfindingAlgorithm for DFS {
    fn find_path(&self, grid: &Grid, start: Coordinate, target: Coordinate) -> SearchResult {
        stack_search(grid, start, target, &Direction::ALL)
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}

/// depth-first search without diagonal moves, preferring down, right, up, left
pub struct OrthogonalDFS;

impl PathfindingAlgorithm for OrthogonalDFS {
    fn find_path(&self, grid: &Grid, start: Coordinate, target: Coordinate) -> SearchResult {
        stack_search(grid, start, target, &Direction::ORTHOGONAL)
    }

    fn name(&self) -> &'static str {
        "DFS (orthogonal)"
    }
}

fn stack_search(
    grid: &Grid,
    start: Coordinate,
    target: Coordinate,
    table: &[Direction],
) -> SearchResult {
    let mut parents = ParentMap::rooted(grid, start);
    let mut stack = vec![start];
    let mut explored = Vec::new();

    while let Some(current) = stack.pop() {
        if current == target {
            break;
        }

        for neighbor in grid.neighbors(current, table) {
            if !parents.contains(neighbor) {
                parents.insert(neighbor, current);
                stack.push(neighbor);
                explored.push(neighbor);
            }
        }
    }

    SearchResult::new(parents.reconstruct(target), explored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(path: &[Coordinate]) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        path.windows(2).map(|pair| (pair[0], pair[1]))
    }

    #[test]
    fn orthogonal_never_moves_diagonally() {
        let grid = Grid::open(7, 5).unwrap();
        let result = OrthogonalDFS.find_path(&grid, Coordinate::new(0, 0), Coordinate::new(6, 4));
        let path = result.path.unwrap();

        assert_eq!(path.first(), Some(&Coordinate::new(0, 0)));
        assert_eq!(path.last(), Some(&Coordinate::new(6, 4)));
        for (a, b) in steps(&path) {
            assert!(a.is_adjacent(b) && !a.is_diagonal_to(b), "{a} -> {b}");
        }
    }

    #[test]
    fn orthogonal_dives_down_first() {
        let grid = Grid::open(3, 3).unwrap();
        let result = OrthogonalDFS.find_path(&grid, Coordinate::new(0, 0), Coordinate::new(0, 2));
        assert_eq!(
            result.path,
            Some(vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2)
            ])
        );
        // discovered right then down from the start, then down's neighbours
        assert_eq!(
            &result.explored[..2],
            &[Coordinate::new(1, 0), Coordinate::new(0, 1)]
        );
    }

    #[test]
    fn default_dfs_pops_last_discovered() {
        let grid = Grid::open(3, 3).unwrap();
        // from the center the last entry of the table is down-left
        let result = DFS.find_path(&grid, Coordinate::new(1, 1), Coordinate::new(0, 2));
        assert_eq!(
            result.path,
            Some(vec![Coordinate::new(1, 1), Coordinate::new(0, 2)])
        );
        assert_eq!(result.explored.len(), 8);
    }

    #[test]
    fn dfs_path_is_connected() {
        let grid = Grid::open(8, 8).unwrap();
        let result = DFS.find_path(&grid, Coordinate::new(7, 0), Coordinate::new(0, 7));
        let path = result.path.unwrap();
        for (a, b) in steps(&path) {
            assert!(a.is_adjacent(b));
        }
    }
}
