use serde::{Deserialize, Serialize};
use yonmoku_core::{Board, MoveRecord, Moves, Player, resolve_turn};

use crate::{Payload, PeerId};

/// One occupied seat, in join order. Seat 0 resolves as [`Player::One`],
/// seat 1 as [`Player::Two`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub addr: PeerId,
    pub name: String,
}

/// Lifecycle of a session as derived from its fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    WaitingForPlayers,
    InProgress,
    RoundPending,
    GameOver,
}

/// Shared game state every participant derives independently by folding
/// the ordered update stream. Folding the same payloads in the same
/// order always yields the same session, with no central arbiter.
///
/// Identity and authorization live here and nowhere deeper: the engine
/// below only ever sees two opaque sides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    seats: Vec<Seat>,
    round_moves: [Option<Moves>; 2],
    winner: Option<usize>,
    move_log: Vec<MoveRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            seats: Vec::new(),
            round_moves: [None, None],
            winner: None,
            move_log: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    pub fn winner(&self) -> Option<&Seat> {
        self.winner.map(|seat| &self.seats[seat])
    }

    pub fn seat_of(&self, addr: &str) -> Option<usize> {
        self.seats.iter().position(|seat| seat.addr == addr)
    }

    pub fn is_player(&self, addr: &str) -> bool {
        self.seat_of(addr).is_some()
    }

    /// A late arrival once both seats are taken watches the game.
    pub fn is_spectator(&self, addr: &str) -> bool {
        !self.is_player(addr) && self.seats.len() >= 2
    }

    pub fn has_submitted(&self, addr: &str) -> bool {
        self.seat_of(addr)
            .is_some_and(|seat| self.round_moves[seat].is_some())
    }

    /// Whether `addr` may draft and submit moves right now.
    pub fn can_play(&self, addr: &str) -> bool {
        self.seats.len() == 2
            && self.winner.is_none()
            && self.is_player(addr)
            && !self.has_submitted(addr)
    }

    pub fn phase(&self) -> Phase {
        if self.seats.len() < 2 {
            Phase::WaitingForPlayers
        } else if self.winner.is_some() {
            Phase::GameOver
        } else if self.round_moves.iter().any(Option::is_some) {
            Phase::RoundPending
        } else {
            Phase::InProgress
        }
    }

    /// Folds one broadcast payload into the session, returning whether
    /// anything changed. Unauthorized or stale payloads are dropped here
    /// so they never reach the resolver.
    pub fn apply(&mut self, payload: &Payload) -> bool {
        match payload {
            Payload::Join { addr, name } => self.apply_join(addr, name),
            Payload::Moves { addr, moves } => self.apply_moves(addr, moves),
            Payload::Reset => self.apply_reset(),
        }
    }

    fn apply_join(&mut self, addr: &str, name: &str) -> bool {
        if self.seat_of(addr).is_some() {
            log::debug!("join from {addr} ignored: already seated");
            return false;
        }
        if self.seats.len() >= 2 {
            log::debug!("join from {addr} ignored: seats are full");
            return false;
        }

        self.seats.push(Seat {
            addr: addr.to_owned(),
            name: name.to_owned(),
        });
        log::debug!("{addr} seated as player {}", self.seats.len());
        true
    }

    fn apply_moves(&mut self, addr: &str, moves: &Moves) -> bool {
        let Some(seat) = self.seat_of(addr) else {
            log::debug!("moves from {addr} ignored: not a player");
            return false;
        };
        if self.winner.is_some() {
            log::debug!("moves from {addr} ignored: game is over");
            return false;
        }
        if self.round_moves[seat].is_some() {
            log::debug!("moves from {addr} ignored: already submitted this round");
            return false;
        }

        self.round_moves[seat] = Some(moves.clone());
        self.try_resolve_round();
        true
    }

    fn try_resolve_round(&mut self) {
        if self.seats.len() < 2 {
            return;
        }
        let (Some(one), Some(two)) = (&self.round_moves[0], &self.round_moves[1]) else {
            return;
        };

        let resolution = resolve_turn(&self.board, one, two);
        log::debug!(
            "round resolved: {} log entries, winner {:?}",
            resolution.log.len(),
            resolution.winner
        );

        self.board = resolution.board;
        self.winner = resolution.winner.map(|player| match player {
            Player::One => 0,
            Player::Two => 1,
        });
        self.move_log.extend(resolution.log);
        self.round_moves = [None, None];
    }

    fn apply_reset(&mut self) -> bool {
        // The loser opens the next game: when the seat that moved first
        // won, the seats swap before the board is rebuilt.
        let swapped = self.winner == Some(0) && self.seats.len() == 2;
        if swapped {
            self.seats.swap(0, 1);
        }

        let fresh = Board::new();
        let stale = self.board != fresh
            || self.winner.is_some()
            || self.round_moves.iter().any(Option::is_some)
            || !self.move_log.is_empty();

        self.board = fresh;
        self.winner = None;
        self.round_moves = [None, None];
        self.move_log.clear();
        swapped || stale
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
