//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::history::GameHistory;
use super::super::{Player, Square};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Every mark added by snapshot `k` belongs to the player whose turn it
/// was at snapshot `k - 1`, so the first move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                let expected = Square::Occupied(Player::for_turn(k));
                before.diff(after).iter().all(|pos| after.get(*pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut history = GameHistory::new();
        for cell in [0, 4, 2, 6, 8] {
            history.apply_move(cell);
        }

        assert!(AlternatingTurnInvariant::holds(&history));
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_o_moving_first_violates() {
        let mut history = GameHistory::new();
        history
            .snapshots
            .push(Board::new().with_mark(Position::Center, Player::O));

        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut history = GameHistory::new();
        history.apply_move(0);
        let again = history.current_board().with_mark(Position::Center, Player::X);
        history.snapshots.push(again);

        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
