use smallvec::SmallVec;

use crate::MOVES_PER_TURN;

/// Single coordinate axis used for row and column indices.
pub type Coord = u8;

/// Board position as `(row, col)`; row 0 is the top row.
pub type Coord2 = (Coord, Coord);

/// Column index submitted as a move.
pub type Column = Coord;

/// One player's queued columns for a turn, at most [`MOVES_PER_TURN`].
pub type Moves = SmallVec<[Column; MOVES_PER_TURN]>;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}
