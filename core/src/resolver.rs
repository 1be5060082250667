use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// One entry of the move log, in attempt order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRecord {
    Placed {
        player: Player,
        column: Column,
        row: Coord,
        won: bool,
    },
    Rejected {
        player: Player,
        column: Column,
        reason: MoveError,
    },
}

impl MoveRecord {
    pub const fn player(self) -> Player {
        match self {
            Self::Placed { player, .. } => player,
            Self::Rejected { player, .. } => player,
        }
    }

    pub const fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Outcome of replaying one committed turn pair. The caller folds this
/// into its session state and discards the previous board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnResolution {
    pub board: Board,
    pub winner: Option<Player>,
    pub log: Vec<MoveRecord>,
}

/// Replays both players' queued columns against `board`: for each slot
/// 0..[`MOVES_PER_TURN`], Player One's move first, then Player Two's.
/// The fixed interleaving is the tie-break for simultaneous submission,
/// independent of message arrival order, so every peer folding the same
/// committed pair computes an identical resolution.
///
/// The input board is never mutated. A winning placement ends the whole
/// turn immediately; a full or out-of-range column is logged as a
/// rejection and skipped. Slots past [`MOVES_PER_TURN`] and missing
/// slots are ignored.
pub fn resolve_turn(board: &Board, one_moves: &[Column], two_moves: &[Column]) -> TurnResolution {
    let mut board = board.clone();
    let mut winner = None;
    let mut log = Vec::new();

    'turn: for slot in 0..MOVES_PER_TURN {
        for (player, moves) in [(Player::One, one_moves), (Player::Two, two_moves)] {
            if let Some(&column) = moves.get(slot) {
                log.push(attempt(&mut board, player, column, &mut winner));
            }
            if winner.is_some() {
                break 'turn;
            }
        }
    }

    TurnResolution { board, winner, log }
}

fn attempt(
    board: &mut Board,
    player: Player,
    column: Column,
    winner: &mut Option<Player>,
) -> MoveRecord {
    if column >= COLS {
        return MoveRecord::Rejected {
            player,
            column,
            reason: MoveError::ColumnOutOfRange,
        };
    }

    match board.drop_piece(column, player) {
        Some(row) => {
            let won = board.check_win(player);
            if won {
                *winner = Some(player);
            }
            MoveRecord::Placed {
                player,
                column,
                row,
                won,
            }
        }
        None => MoveRecord::Rejected {
            player,
            column,
            reason: MoveError::ColumnFull,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Player::*;

    #[test]
    fn interleaves_slots_one_then_two() {
        let res = resolve_turn(&Board::new(), &[0, 0, 0], &[1, 1, 1]);

        assert_eq!(res.winner, None);
        assert_eq!(res.log.len(), 6);
        assert!(!res.log.iter().any(|record| record.is_rejected()));

        let order: Vec<Player> = res.log.iter().map(|record| record.player()).collect();
        assert_eq!(order, [One, Two, One, Two, One, Two]);

        // Three stacked pieces each; vertical needs four.
        for row in [5, 4, 3] {
            assert_eq!(res.board.cell_at((row, 0)), One.cell());
            assert_eq!(res.board.cell_at((row, 1)), Two.cell());
        }
        assert_eq!(res.board.cell_at((2, 0)), Cell::Empty);
    }

    #[test]
    fn winning_placement_ends_the_turn() {
        // One already holds column 2 rows 5, 4, 3.
        let board = Board::from_drops(&[(2, One), (2, One), (2, One)]);

        let res = resolve_turn(&board, &[2, 3, 3], &[3, 4, 5]);

        assert_eq!(res.winner, Some(One));
        assert_eq!(
            res.log,
            [MoveRecord::Placed {
                player: One,
                column: 2,
                row: 2,
                won: true,
            }]
        );
        // Neither Two's moves nor One's remaining moves were attempted.
        assert_eq!(res.board.cell_at((5, 3)), Cell::Empty);
    }

    #[test]
    fn opponent_win_mid_turn_skips_remaining_slots() {
        // Two already holds column 6 rows 5, 4, 3 and completes it at slot 1.
        let board = Board::from_drops(&[(6, Two), (6, Two), (6, Two)]);

        let res = resolve_turn(&board, &[0, 1, 2], &[5, 6, 6]);

        assert_eq!(res.winner, Some(Two));
        assert_eq!(res.log.len(), 4);
        assert_eq!(
            res.log[3],
            MoveRecord::Placed {
                player: Two,
                column: 6,
                row: 2,
                won: true,
            }
        );
        // One's slot-2 move never landed.
        assert_eq!(res.board.cell_at((5, 2)), Cell::Empty);
    }

    #[test]
    fn full_column_is_logged_and_skipped() {
        let board = Board::from_drops(&[(0, One), (0, Two), (0, One), (0, Two), (0, One), (0, Two)]);

        let res = resolve_turn(&board, &[0, 1, 2], &[]);

        assert_eq!(res.winner, None);
        assert_eq!(
            res.log[0],
            MoveRecord::Rejected {
                player: One,
                column: 0,
                reason: MoveError::ColumnFull,
            }
        );
        assert_eq!(
            res.log[1],
            MoveRecord::Placed {
                player: One,
                column: 1,
                row: 5,
                won: false,
            }
        );
        assert_eq!(
            res.log[2],
            MoveRecord::Placed {
                player: One,
                column: 2,
                row: 5,
                won: false,
            }
        );
        // The rejected move left column 0 untouched.
        assert_eq!(res.board.cell_at((0, 0)), Two.cell());
    }

    #[test]
    fn out_of_range_column_is_logged_and_skipped() {
        let res = resolve_turn(&Board::new(), &[9, 0], &[]);

        assert_eq!(
            res.log[0],
            MoveRecord::Rejected {
                player: One,
                column: 9,
                reason: MoveError::ColumnOutOfRange,
            }
        );
        assert_eq!(
            res.log[1],
            MoveRecord::Placed {
                player: One,
                column: 0,
                row: 5,
                won: false,
            }
        );
    }

    #[test]
    fn input_board_is_never_mutated() {
        let board = Board::from_drops(&[(3, One), (3, Two)]);
        let before = board.clone();

        resolve_turn(&board, &[3, 3, 3], &[0, 1, 2]);

        assert_eq!(board, before);
    }

    #[test]
    fn identical_inputs_resolve_identically() {
        let board = Board::from_drops(&[(1, Two), (5, One)]);

        let first = resolve_turn(&board, &[0, 3, 3], &[6, 6, 0]);
        let second = resolve_turn(&board, &[0, 3, 3], &[6, 6, 0]);

        assert_eq!(first, second);
    }

    #[test]
    fn short_move_lists_skip_missing_slots() {
        let res = resolve_turn(&Board::new(), &[3], &[]);

        assert_eq!(res.log.len(), 1);
        assert_eq!(res.winner, None);
    }

    #[test]
    fn slots_past_the_turn_size_are_ignored() {
        let res = resolve_turn(&Board::new(), &[0, 1, 2, 3, 4], &[]);

        assert_eq!(res.log.len(), MOVES_PER_TURN);
        assert_eq!(res.board.cell_at((5, 3)), Cell::Empty);
    }
}
