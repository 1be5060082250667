use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Scan directions for win detection: horizontal, vertical, diagonal
/// descending (row and column increasing), diagonal ascending.
const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Fixed 6×7 gravity board. Pieces land on the highest free row index of
/// their column, so a taken cell never sits above an empty one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default([ROWS as usize, COLS as usize]),
        }
    }

    /// Builds a board by replaying gravity drops in order. Drops into a
    /// full or out-of-range column are ignored.
    pub fn from_drops(drops: &[(Column, Player)]) -> Self {
        let mut board = Self::new();
        for &(column, player) in drops {
            board.drop_piece(column, player);
        }
        board
    }

    pub const fn rows(&self) -> Coord {
        ROWS
    }

    pub const fn cols(&self) -> Coord {
        COLS
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Cells of one row, left to right. Iterating rows 0..ROWS yields the
    /// top-first order the UI renders.
    pub fn iter_row(&self, row: Coord) -> impl Iterator<Item = Cell> + '_ {
        (0..COLS).map(move |col| self.cell_at((row, col)))
    }

    /// Bottom-most empty row of `column`, scanning upward from the bottom.
    /// `None` when the column is full or out of range.
    pub fn lowest_empty_row(&self, column: Column) -> Option<Coord> {
        if column >= COLS {
            return None;
        }
        (0..ROWS)
            .rev()
            .find(|&row| self.cell_at((row, column)).is_empty())
    }

    /// Drops `player`'s piece into `column`, returning the landing row.
    pub(crate) fn drop_piece(&mut self, column: Column, player: Player) -> Option<Coord> {
        let row = self.lowest_empty_row(column)?;
        self.cells[(row, column).to_nd_index()] = player.cell();
        Some(row)
    }

    /// True iff `player` holds [`CONNECT`] contiguous cells in one of the
    /// four scan directions. Run after every placement so a win is caught
    /// at the exact piece that creates it.
    pub fn check_win(&self, player: Player) -> bool {
        for row in 0..ROWS {
            for col in 0..COLS {
                if DIRECTIONS
                    .iter()
                    .any(|&delta| self.run_from((row, col), delta, player))
                {
                    return true;
                }
            }
        }
        false
    }

    fn run_from(&self, start: Coord2, delta: (i8, i8), player: Player) -> bool {
        (0..CONNECT).all(|step| {
            offset(start, delta, step).is_some_and(|coords| self.cell_at(coords) == player.cell())
        })
    }
}

/// Applies `delta` scaled by `step` to `start`, returning a value only
/// when it remains in bounds.
fn offset(start: Coord2, delta: (i8, i8), step: Coord) -> Option<Coord2> {
    let (row, col) = start;
    let (dr, dc) = delta;
    let step = step as i8;

    let row = row.checked_add_signed(dr * step)?;
    let col = col.checked_add_signed(dc * step)?;

    (row < ROWS && col < COLS).then_some((row, col))
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
