use serde::{Deserialize, Serialize};
use yonmoku_core::Moves;

/// Transport-level sender address. Opaque to the game; only compared
/// for equality when assigning and matching seats.
pub type PeerId = String;

/// Broadcast payload carried by one update of the shared channel.
///
/// The wire shape is JSON tagged by `type`, so independently built
/// clients agree on the stream format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Payload {
    Join { addr: PeerId, name: String },
    Moves { addr: PeerId, moves: Moves },
    Reset,
}

/// One record of the totally ordered, reliable update stream. The
/// transport guarantees every participant sees the same serials in the
/// same order; serial 0 marks the transport's own echo and is skipped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub serial: u64,
    pub payload: Payload,
}
