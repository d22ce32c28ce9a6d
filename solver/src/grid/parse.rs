use std::str::FromStr;

use super::{bounded::Grid, cell::Cell, position::Coordinate};
use crate::error::GridError;

/// A grid read from the text map format, with optional endpoint markers.
///
/// One line per row: `.` open, `#` blocked, `S` start, `T` target. Markers
/// sit on open cells. Blank lines are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMap {
    pub grid: Grid,
    pub start: Option<Coordinate>,
    pub target: Option<Coordinate>,
}

impl FromStr for ParsedMap {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut target = None;

        let lines = s.lines().map(str::trim_end).filter(|line| !line.is_empty());

        for (y, line) in lines.enumerate() {
            let mut row = Vec::with_capacity(line.len());

            for (x, symbol) in line.chars().enumerate() {
                let marker = match symbol {
                    'S' => Some(&mut start),
                    'T' => Some(&mut target),
                    _ => None,
                };

                let cell = match marker {
                    Some(slot) => {
                        if slot.replace(Coordinate::new(x, y)).is_some() {
                            return Err(GridError::DuplicateMarker(symbol));
                        }
                        Cell::Open
                    }
                    None => Cell::from_symbol(symbol).ok_or(GridError::UnknownCell {
                        row: y,
                        col: x,
                        symbol,
                    })?,
                };

                row.push(cell);
            }

            rows.push(row);
        }

        Ok(Self {
            grid: Grid::from_cells(rows)?,
            start,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers() {
        let map: ParsedMap = "S.#\n.#.\n..T\n".parse().unwrap();
        assert_eq!(map.grid.bounds(), (3, 3));
        assert_eq!(map.start, Some(Coordinate::new(0, 0)));
        assert_eq!(map.target, Some(Coordinate::new(2, 2)));
        assert!(map.grid.is_open(Coordinate::new(2, 2)));
        assert!(!map.grid.is_open(Coordinate::new(1, 1)));
    }

    #[test]
    fn markers_are_optional() {
        let map: ParsedMap = "..\n..\n\n".parse().unwrap();
        assert_eq!(map.grid.rows(), 2);
        assert_eq!(map.start, None);
        assert_eq!(map.target, None);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "S.\n.x".parse::<ParsedMap>(),
            Err(GridError::UnknownCell {
                row: 1,
                col: 1,
                symbol: 'x'
            })
        );
        assert_eq!(
            "S.\n.S".parse::<ParsedMap>(),
            Err(GridError::DuplicateMarker('S'))
        );
        assert_eq!(
            "...\n..".parse::<ParsedMap>(),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!("".parse::<ParsedMap>(), Err(GridError::Empty));
    }
}
