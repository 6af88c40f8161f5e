//! Tic-tac-toe with a navigable move history.

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Move, MoveOutcome, MoveRejection};
pub use history::{GameHistory, HistoryError, JumpPolicy};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, WINNING_LINES};
pub use types::{Board, Player, Square};
pub use view::{CurrentView, GameStatus, MoveDescriptor};

/// Alias for clarity: a player's mark on the board.
pub type Mark = Player;
