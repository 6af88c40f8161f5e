//! Read-only views derived from a game history.
//!
//! Nothing here is stored alongside the history; every value is
//! recomputed from the snapshots and the current-move pointer.

use super::action::Move;
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The derived state of the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct CurrentView {
    /// The snapshot the pointer selects.
    board: Board,
    /// Whose turn it is, from the pointer's parity.
    to_move: Player,
    /// Winner of the current snapshot, if any.
    winner: Option<Player>,
    /// True when the board is full and nobody has won.
    is_draw: bool,
}

impl CurrentView {
    /// Status line for the current snapshot.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress(self.to_move),
        }
    }
}

/// Status of the current snapshot as shown to players.
///
/// A drawn board reports `InProgress` here; draws are carried by
/// [`CurrentView::is_draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Someone completed a line.
    #[display("{} has won", _0)]
    Won(Player),
    /// No winner; the given player moves next.
    #[display("Next turn: {}", _0)]
    InProgress(Player),
}

impl GameStatus {
    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress(_) => None,
        }
    }
}

/// One entry of the move list: a label and the index to jump to.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// History index to pass to `jump_to`.
    index: usize,
    /// Human-readable label.
    label: String,
    /// The move that produced this snapshot (`None` for the start).
    played: Option<Move>,
}

impl MoveDescriptor {
    /// Creates the descriptor for history index `index`.
    pub fn new(index: usize, played: Option<Move>) -> Self {
        let label = if index > 0 {
            format!("Go to move #{}", index)
        } else {
            "Go to game start".to_string()
        };
        Self {
            index,
            label,
            played,
        }
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.played {
            Some(mov) => write!(f, "{}. {} ({})", self.index, self.label, mov),
            None => write!(f, "{}. {}", self.index, self.label),
        }
    }
}
