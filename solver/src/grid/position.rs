use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::error::GridError;

/// A cell on the grid. `x` is the column, `y` the row; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn to_index(self, cols: usize) -> usize {
        self.y * cols + self.x
    }

    pub fn from_index(index: usize, cols: usize) -> Self {
        Self::new(index % cols, index / cols)
    }

    /// Number of king moves between two cells.
    pub fn chebyshev_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// True if `other` is one of the 8 surrounding cells.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.chebyshev_distance(other) == 1
    }

    pub fn is_diagonal_to(self, other: Self) -> bool {
        self.x.abs_diff(other.x) == 1 && self.y.abs_diff(other.y) == 1
    }

    /// Move one cell in `direction`, staying inside `bounds` (`(cols, rows)`).
    pub fn step(self, direction: Direction, bounds: (usize, usize)) -> Option<Self> {
        let (cols, rows) = bounds;
        let next = (self + direction.offset())?;

        if next.x < cols && next.y < rows {
            Some(next)
        } else {
            None
        }
    }
}

impl Ord for Coordinate {
    /// Row-major: `y` first, then `x`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<(isize, isize)> for Coordinate {
    type Output = Option<Self>;

    fn add(self, (dx, dy): (isize, isize)) -> Self::Output {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self::new(x, y))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = GridError;

    /// Parses `x,y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidCoordinate(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    DownRight,
    Left,
    UpLeft,
    UpRight,
    DownLeft,
}

impl Direction {
    /// Default expansion order shared by every 8-way search. Tie-breaking in
    /// all sequential expansions depends on this exact order.
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Right,
        Self::Down,
        Self::DownRight,
        Self::Left,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
    ];

    /// Push order of the orthogonal depth-first variant. A stack pops these
    /// back as down, right, up, left.
    pub const ORTHOGONAL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::DownRight => (1, 1),
            Self::Left => (-1, 0),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (1, -1),
            Self::DownLeft => (-1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.offset();
        dx != 0 && dy != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stays_in_bounds() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(origin.step(Direction::Up, (3, 3)), None);
        assert_eq!(origin.step(Direction::Left, (3, 3)), None);
        assert_eq!(
            origin.step(Direction::DownRight, (3, 3)),
            Some(Coordinate::new(1, 1))
        );

        let corner = Coordinate::new(2, 2);
        assert_eq!(corner.step(Direction::Right, (3, 3)), None);
        assert_eq!(corner.step(Direction::Down, (3, 3)), None);
        assert_eq!(
            corner.step(Direction::UpLeft, (3, 3)),
            Some(Coordinate::new(1, 1))
        );
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![
            Coordinate::new(2, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
                Coordinate::new(0, 1)
            ]
        );
    }

    #[test]
    fn index_round_trip() {
        let pos = Coordinate::new(3, 2);
        assert_eq!(pos.to_index(5), 13);
        assert_eq!(Coordinate::from_index(13, 5), pos);
    }

    #[test]
    fn parse() {
        assert_eq!("4, 7".parse::<Coordinate>().unwrap(), Coordinate::new(4, 7));
        assert!("4".parse::<Coordinate>().is_err());
        assert!("-1,2".parse::<Coordinate>().is_err());
    }

    #[test]
    fn orthogonal_table_has_no_diagonals() {
        assert!(Direction::ORTHOGONAL.iter().all(|d| !d.is_diagonal()));
        assert_eq!(Direction::ALL.iter().filter(|d| d.is_diagonal()).count(), 4);
    }
}
