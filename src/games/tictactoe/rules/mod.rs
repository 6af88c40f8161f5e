//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from history storage so they can be checked
//! against any snapshot, past or present.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, WINNING_LINES};
