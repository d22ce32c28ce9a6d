use std::fmt;

use super::{
    cell::Cell,
    position::{Coordinate, Direction},
};
use crate::error::GridError;

/// A fixed-size rectangle of open and blocked cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    cols: usize,
    rows: usize,
}

impl Grid {
    /// An all-open grid.
    pub fn open(cols: usize, rows: usize) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::Empty);
        }

        Ok(Self {
            cells: vec![Cell::Open; cols * rows],
            cols,
            rows,
        })
    }

    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
        }

        Ok(Self {
            rows: rows.len(),
            cells: rows.into_iter().flatten().collect(),
            cols,
        })
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `(cols, rows)`
    pub fn bounds(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: Coordinate) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    pub fn get(&self, pos: Coordinate) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.to_index(self.cols)])
        } else {
            None
        }
    }

    pub fn is_open(&self, pos: Coordinate) -> bool {
        self.get(pos).is_some_and(Cell::is_open)
    }

    /// Returns `false` if `pos` lies outside the grid.
    pub fn set(&mut self, pos: Coordinate, cell: Cell) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        self.cells[pos.to_index(self.cols)] = cell;
        true
    }

    pub fn set_blocked(&mut self, pos: Coordinate, blocked: bool) -> bool {
        self.set(pos, Cell::from(blocked))
    }

    /// Flip a cell between open and blocked.
    pub fn toggle(&mut self, pos: Coordinate) -> Option<Cell> {
        let next = match self.get(pos)? {
            Cell::Open => Cell::Blocked,
            Cell::Blocked => Cell::Open,
        };
        self.set(pos, next);
        Some(next)
    }

    /// Open, in-bounds cells reachable in one step, in the order of `table`.
    pub fn neighbors<'a>(
        &'a self,
        pos: Coordinate,
        table: &'a [Direction],
    ) -> impl Iterator<Item = Coordinate> + 'a {
        table
            .iter()
            .filter_map(move |&direction| pos.step(direction, self.bounds()))
            .filter(move |next| self.is_open(*next))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (Coordinate::from_index(idx, self.cols), cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
