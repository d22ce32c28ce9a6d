#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Open,
    Blocked,
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Open),
            '#' => Some(Self::Blocked),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Open => '.',
            Self::Blocked => '#',
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<bool> for Cell {
    /// `true` means blocked, matching a wall bitmap.
    fn from(blocked: bool) -> Self {
        if blocked { Self::Blocked } else { Self::Open }
    }
}
