//! History consistency invariant: a non-empty history starting empty.

use super::super::history::GameHistory;
use super::super::Board;
use super::Invariant;

/// Invariant: The history is well-formed.
///
/// There is at least one snapshot, the first one is the empty board,
/// and the pointer selects an existing snapshot.
pub struct HistoryConsistentInvariant;

impl Invariant<GameHistory> for HistoryConsistentInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();

        snapshots.first() == Some(&Board::new()) && history.pointer() < snapshots.len()
    }

    fn description() -> &'static str {
        "History starts with the empty board and the pointer is in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_holds_after_jump_back() {
        let mut history = GameHistory::new();
        history.apply_move(0);
        history.apply_move(1);
        history.jump_to(0).unwrap();

        assert!(HistoryConsistentInvariant::holds(&history));
    }

    #[test]
    fn test_pointer_past_end_violates() {
        let mut history = GameHistory::new();
        history.pointer = 1;

        assert!(!HistoryConsistentInvariant::holds(&history));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut history = GameHistory::new();
        history.snapshots.clear();

        assert!(!HistoryConsistentInvariant::holds(&history));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut history = GameHistory::new();
        history.snapshots[0] = Board::new().with_mark(Position::Center, Player::X);

        assert!(!HistoryConsistentInvariant::holds(&history));
    }
}
