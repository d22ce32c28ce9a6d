use std::ops::RangeInclusive;

use rand::Rng;

use super::{bounded::Grid, position::Coordinate};
use crate::error::GridError;

/// Range random weights are drawn from in weighted mode.
pub const WEIGHT_RANGE: RangeInclusive<u32> = 1..=20;

/// Per-cell traversal cost. Entering a cell costs that cell's weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightGrid {
    weights: Vec<u32>,
    cols: usize,
    rows: usize,
}

impl WeightGrid {
    /// Every open cell costs 1; blocked cells 0.
    pub fn uniform(grid: &Grid) -> Self {
        Self::from_fn(grid, |_| 1)
    }

    /// Open cells get a weight drawn from [`WEIGHT_RANGE`]; blocked cells 0.
    pub fn random<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        Self::from_fn(grid, |_| rng.random_range(WEIGHT_RANGE))
    }

    fn from_fn(grid: &Grid, mut weight: impl FnMut(Coordinate) -> u32) -> Self {
        let weights = grid
            .iter()
            .map(|(pos, cell)| if cell.is_open() { weight(pos) } else { 0 })
            .collect();

        Self {
            weights,
            cols: grid.cols(),
            rows: grid.rows(),
        }
    }

    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        for (row, weights) in rows.iter().enumerate() {
            if weights.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: weights.len(),
                });
            }
        }

        Ok(Self {
            rows: rows.len(),
            weights: rows.into_iter().flatten().collect(),
            cols,
        })
    }

    /// `(cols, rows)`
    pub fn bounds(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn get(&self, pos: Coordinate) -> Option<u32> {
        if pos.x < self.cols && pos.y < self.rows {
            Some(self.weights[pos.to_index(self.cols)])
        } else {
            None
        }
    }

    /// Sum of the weights of every cell entered along `path`; the first cell
    /// is where the walk starts and costs nothing.
    pub fn path_cost(&self, path: &[Coordinate]) -> u64 {
        path.iter()
            .skip(1)
            .map(|&pos| u64::from(self.get(pos).unwrap_or(0)))
            .sum()
    }
}
