//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::history::GameHistory;
use super::super::Square;
use super::Invariant;

/// Invariant: Consecutive snapshots differ in exactly one square.
///
/// That square is empty in the earlier snapshot and occupied in the
/// later one. Marks are never removed or overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<GameHistory> for MonotonicBoardInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            match before.diff(after).as_slice() {
                [pos] => before.get(*pos) == Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut history = GameHistory::new();
        for cell in [4, 0, 8, 2, 1] {
            history.apply_move(cell);
        }

        assert!(MonotonicBoardInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let mut history = GameHistory::new();
        history.snapshots.push(Board::new());

        assert!(!MonotonicBoardInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut history = GameHistory::new();
        history.apply_move(4);
        let overwritten = Board::new().with_mark(Position::Center, Player::O);
        history.snapshots.push(overwritten);

        assert!(!MonotonicBoardInvariant::holds(&history));
    }
}
