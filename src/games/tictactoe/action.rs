//! First-class action types for tic-tac-toe.
//!
//! A move is the single-square difference between two consecutive
//! snapshots in a game's history. Moves that cannot be played are
//! described by [`MoveRejection`], which is a reason and not an error:
//! the history simply stays where it was.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a requested move left the history unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The cell index is not on the board.
    #[display("Cell {} is not on the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already over ({} has won)", _0)]
    GameOver(Player),
}

/// Result of asking the history to play a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as a new snapshot.
    Applied(Move),
    /// The move was ignored; the history is unchanged.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// Returns true if the move was recorded.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Applied(_) => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}
