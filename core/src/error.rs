use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a single move attempt is rejected during resolution.
///
/// A rejection only produces a move-log entry; it never aborts the turn
/// and is never raised to the caller.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    #[error("Column full")]
    ColumnFull,
    #[error("Column out of range")]
    ColumnOutOfRange,
}
