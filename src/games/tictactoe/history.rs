//! Game history with time travel.
//!
//! The history is an append-only list of board snapshots plus a pointer
//! to the "current" one. Snapshot 0 is always the empty board and each
//! later snapshot adds exactly one mark. Whose turn it is comes from the
//! pointer's parity and is never stored.
//!
//! Playing a move after jumping back discards every snapshot after the
//! pointer before appending, so there is only ever one line of play.

use super::action::{Move, MoveOutcome, MoveRejection};
use super::invariants::assert_invariants;
use super::rules::{check_winner, is_draw};
use super::types::{Board, Player};
use super::view::{CurrentView, GameStatus, MoveDescriptor};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What `jump_to` does with an index past the end of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum JumpPolicy {
    /// Refuse the jump and leave the pointer alone.
    #[default]
    #[display("reject")]
    Reject,
    /// Jump to the last snapshot instead.
    #[display("clamp")]
    Clamp,
}

/// Error returned by history navigation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested move index is not in the history.
    #[display("Move {} is out of range (history has {} snapshots)", requested, len)]
    MoveOutOfRange {
        /// Index the caller asked for.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

/// Board snapshots and the pointer selecting the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) pointer: usize,
    policy: JumpPolicy,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_policy(JumpPolicy::default())
    }

    /// Creates an empty-board history with the given jump policy.
    #[instrument]
    pub fn with_policy(policy: JumpPolicy) -> Self {
        Self {
            snapshots: vec![Board::new()],
            pointer: 0,
            policy,
        }
    }

    /// Plays each cell in order from a fresh history.
    ///
    /// Returns the history and the outcome of every requested cell.
    #[instrument(skip(cells), fields(count = cells.len()))]
    pub fn replay(policy: JumpPolicy, cells: &[usize]) -> (Self, Vec<MoveOutcome>) {
        let mut history = Self::with_policy(policy);
        let outcomes = cells.iter().map(|&cell| history.apply_move(cell)).collect();
        (history, outcomes)
    }

    /// Returns the jump policy.
    pub fn policy(&self) -> JumpPolicy {
        self.policy
    }

    /// Returns every snapshot, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the number of snapshots (always at least one).
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns the current-move pointer.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Returns the snapshot the pointer selects.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.pointer]
    }

    /// Returns whose turn it is at the current snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.pointer)
    }

    /// Returns the winner of the current snapshot, if any.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Derives board, turn, winner and draw flag for the current snapshot.
    #[instrument(skip(self), fields(pointer = self.pointer))]
    pub fn current(&self) -> CurrentView {
        let board = *self.current_board();
        CurrentView::new(board, self.to_move(), check_winner(&board), is_draw(&board))
    }

    /// Returns the status line for the current snapshot.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        self.current().status()
    }

    /// Plays the current player's mark at `cell` (0-8).
    ///
    /// Moves on an occupied square, off the board, or on a board that
    /// already has a winner are ignored and reported as
    /// [`MoveOutcome::Rejected`]. An applied move drops any snapshots
    /// after the pointer, appends the new board, and moves the pointer
    /// to it.
    #[instrument(skip(self), fields(pointer = self.pointer, player = %self.to_move()))]
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(cell) else {
            debug!(cell, "Ignoring move off the board");
            return MoveOutcome::Rejected(MoveRejection::OutOfBounds(cell));
        };

        let current = *self.current_board();
        if !current.is_empty(position) {
            debug!(%position, "Ignoring move on occupied square");
            return MoveOutcome::Rejected(MoveRejection::SquareOccupied(position));
        }
        if let Some(winner) = check_winner(&current) {
            debug!(%winner, "Ignoring move after game is decided");
            return MoveOutcome::Rejected(MoveRejection::GameOver(winner));
        }

        let player = self.to_move();
        let next = current.with_mark(position, player);

        let discarded = self.snapshots.len() - (self.pointer + 1);
        if discarded > 0 {
            info!(discarded, "Discarding snapshots after the current move");
        }
        self.snapshots.truncate(self.pointer + 1);
        self.snapshots.push(next);
        self.pointer = self.snapshots.len() - 1;

        assert_invariants(self);

        let mov = Move::new(player, position);
        debug!(%mov, pointer = self.pointer, "Move applied");
        MoveOutcome::Applied(mov)
    }

    /// Moves the pointer to `move_index` without touching the snapshots.
    ///
    /// Returns the new pointer. Indices past the end are rejected or
    /// clamped according to the [`JumpPolicy`].
    #[instrument(skip(self), fields(pointer = self.pointer, policy = %self.policy))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<usize, HistoryError> {
        let len = self.snapshots.len();
        let target = if move_index < len {
            move_index
        } else {
            match self.policy {
                JumpPolicy::Reject => {
                    warn!(move_index, len, "Rejecting jump past end of history");
                    return Err(HistoryError::MoveOutOfRange {
                        requested: move_index,
                        len,
                    });
                }
                JumpPolicy::Clamp => {
                    warn!(move_index, len, "Clamping jump to last move");
                    len - 1
                }
            }
        };

        self.pointer = target;
        debug!(pointer = target, "Jumped");
        Ok(target)
    }

    /// Returns the move that produced snapshot `index`.
    ///
    /// `None` for index 0 and for indices outside the history.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let before = self.snapshots.get(index.checked_sub(1)?)?;
        let after = self.snapshots.get(index)?;
        match before.diff(after).as_slice() {
            [position] => after.get(*position).player().map(|p| Move::new(p, *position)),
            _ => None,
        }
    }

    /// Returns every move in the history, including those after the pointer.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.snapshots.len()).filter_map(|i| self.move_at(i)).collect()
    }

    /// Labels every snapshot so a caller can offer a jump to it.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn describe_moves(&self) -> Vec<MoveDescriptor> {
        (0..self.snapshots.len())
            .map(|i| MoveDescriptor::new(i, self.move_at(i)))
            .collect()
    }

    /// Starts over from the empty board, keeping the jump policy.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.snapshots.len() - 1, "Resetting history");
        *self = Self::with_policy(self.policy);
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_new_history() {
        let history = GameHistory::new();
        assert_eq!(history.snapshot_count(), 1);
        assert_eq!(history.pointer(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.to_move(), Player::X);
        assert_eq!(history.policy(), JumpPolicy::Reject);
    }

    #[test]
    fn test_apply_move_appends_snapshot() {
        let mut history = GameHistory::new();
        let outcome = history.apply_move(4);

        assert_eq!(outcome, MoveOutcome::Applied(Move::new(Player::X, Position::Center)));
        assert_eq!(history.snapshot_count(), 2);
        assert_eq!(history.pointer(), 1);
        assert_eq!(history.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(history.snapshots()[0], Board::new());
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut history = GameHistory::new();
        history.apply_move(4);
        let before = history.clone();

        let outcome = history.apply_move(4);

        assert_eq!(
            outcome,
            MoveOutcome::Rejected(MoveRejection::SquareOccupied(Position::Center))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_out_of_bounds_cell_is_noop() {
        let mut history = GameHistory::new();
        let outcome = history.apply_move(9);

        assert_eq!(outcome.rejection(), Some(MoveRejection::OutOfBounds(9)));
        assert_eq!(history, GameHistory::new());
    }

    #[test]
    fn test_jump_then_play_discards_future() {
        let (mut history, _) = GameHistory::replay(JumpPolicy::Reject, &[0, 4, 1, 3]);
        assert_eq!(history.snapshot_count(), 5);

        assert_eq!(history.jump_to(1), Ok(1));
        assert_eq!(history.snapshot_count(), 5);

        let outcome = history.apply_move(8);
        assert_eq!(outcome, MoveOutcome::Applied(Move::new(Player::O, Position::BottomRight)));
        assert_eq!(history.snapshot_count(), 3);
        assert_eq!(history.pointer(), 2);
        assert!(history.current_board().is_empty(Position::Center));
    }

    #[test]
    fn test_jump_reject_policy() {
        let mut history = GameHistory::new();
        history.apply_move(0);

        let err = history.jump_to(5).unwrap_err();
        assert_eq!(err, HistoryError::MoveOutOfRange { requested: 5, len: 2 });
        assert_eq!(history.pointer(), 1);
        assert_eq!(err.to_string(), "Move 5 is out of range (history has 2 snapshots)");
    }

    #[test]
    fn test_jump_clamp_policy() {
        let (mut history, _) = GameHistory::replay(JumpPolicy::Clamp, &[0, 4]);
        history.jump_to(0).unwrap();

        assert_eq!(history.jump_to(99), Ok(2));
        assert_eq!(history.pointer(), 2);
    }

    #[test]
    fn test_moves_include_abandoned_future_until_pruned() {
        let (mut history, _) = GameHistory::replay(JumpPolicy::Reject, &[0, 4, 8]);
        history.jump_to(1).unwrap();

        assert_eq!(history.moves().len(), 3);
        assert_eq!(history.describe_moves().len(), 4);
        assert_eq!(history.move_at(0), None);
        assert_eq!(history.move_at(4), None);
        assert_eq!(history.move_at(3), Some(Move::new(Player::X, Position::BottomRight)));
    }

    #[test]
    fn test_reset_keeps_policy() {
        let (mut history, _) = GameHistory::replay(JumpPolicy::Clamp, &[0, 1, 2]);
        history.reset();

        assert_eq!(history, GameHistory::with_policy(JumpPolicy::Clamp));
    }
}
