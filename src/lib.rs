//! Strictly Timeline - tic-tac-toe with move history and time travel
//!
//! The library holds the game core: an append-only list of board
//! snapshots, a pointer selecting the current one, and pure rules that
//! evaluate any snapshot. A presentation layer reads derived views and
//! sends two kinds of intent back: play a cell, or jump to a move.
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameHistory, GameStatus, TicTacToePlayer as Player};
//!
//! let mut history = GameHistory::new();
//! for cell in [0, 4, 1, 3, 2] {
//!     history.apply_move(cell);
//! }
//! assert_eq!(history.status(), GameStatus::Won(Player::X));
//!
//! history.jump_to(2).unwrap();
//! assert_eq!(history.current().winner(), &None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, TimelineConfig};

// Crate-level exports - Text front end
pub use console::{Intent, IntentError, Report, HELP};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    check_winner, is_draw, is_full, Board, CurrentView, GameHistory, GameStatus, HistoryError,
    JumpPolicy, Mark, Move, MoveDescriptor, MoveOutcome, MoveRejection, Position, Square,
    WINNING_LINES, Player as TicTacToePlayer,
};
