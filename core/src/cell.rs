use serde::{Deserialize, Serialize};

/// One of the two sides of a game. The session layer maps the first
/// seated sender to `One` and the second to `Two`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    pub const fn cell(self) -> Cell {
        Cell::Taken(self)
    }
}

/// Tri-state board cell, rendered directly by the UI top row first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Taken(player) => Some(player),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
