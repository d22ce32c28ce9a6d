use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::{Coordinate, Direction, Grid, WeightGrid};

use super::{
    path::ParentMap,
    traits::{PathfindingAlgorithm, SearchResult},
};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u64,
    position: Coordinate,
}

impl Ord for State {
    // min-heap on cost; equal costs pop the smaller y, then the smaller x
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// uniform-cost search; entering a cell costs that cell's weight
#[allow(clippy::upper_case_acronyms)]
pub struct UCS<'w> {
    weights: Option<&'w WeightGrid>,
}

impl<'w> UCS<'w> {
    /// Without weights every move costs 1.
    pub fn new(weights: Option<&'w WeightGrid>) -> Self {
        Self { weights }
    }

    fn weight(&self, pos: Coordinate) -> u64 {
        self.weights
            .and_then(|weights| weights.get(pos))
            .map_or(1, u64::from)
    }
}

impl PathfindingAlgorithm for UCS<'_> {
    fn find_path(&self, grid: &Grid, start: Coordinate, target: Coordinate) -> SearchResult {
        let cols = grid.cols();
        let mut heap = BinaryHeap::new();
        let mut costs = vec![u64::MAX; grid.len()];
        let mut parents = ParentMap::rooted(grid, start);
        let mut explored = Vec::new();

        costs[start.to_index(cols)] = 0;
        heap.push(State {
            cost: 0,
            position: start,
        });

        while let Some(State { cost, position }) = heap.pop() {
            if position == target {
                break;
            }

            // stale entry, a cheaper one was already expanded
            if cost > costs[position.to_index(cols)] {
                continue;
            }

            for neighbor in grid.neighbors(position, &Direction::ALL) {
                let new_cost = cost + self.weight(neighbor);
                let known = &mut costs[neighbor.to_index(cols)];

                if new_cost < *known {
                    if *known == u64::MAX {
                        explored.push(neighbor);
                    }
                    *known = new_cost;
                    parents.insert(neighbor, position);
                    heap.push(State {
                        cost: new_cost,
                        position: neighbor,
                    });
                }
            }
        }

        SearchResult::new(parents.reconstruct(target), explored)
    }

    fn name(&self) -> &'static str {
        "UCS"
    }
}
