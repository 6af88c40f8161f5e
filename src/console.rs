//! Text front end: parses typed intents and renders the current view.

use crate::games::tictactoe::{CurrentView, GameHistory, MoveDescriptor, Position};
use serde::Serialize;
use tracing::instrument;

/// A command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Play the current player's mark at a cell index.
    Play(usize),
    /// Move the pointer to a history index.
    Jump(usize),
    /// Start a new game.
    Reset,
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// A line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Can't understand {:?}: {}", input, reason)]
pub struct IntentError {
    /// The offending line.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl IntentError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Help text for the interactive loop.
pub const HELP: &str = "Commands:
  play <cell>   place your mark (0-8 or a label like \"top left\")
  <cell>        same as play
  jump <move>   go to a move from the list (0 is the game start)
  reset         start a new game
  help          show this text
  quit          leave";

impl Intent {
    /// Parses one input line.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, IntentError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(IntentError::new(line, "empty command")),
            "play" | "p" => parse_cell(line, rest).map(Intent::Play),
            "jump" | "j" | "goto" => rest
                .parse()
                .map(Intent::Jump)
                .map_err(|_| IntentError::new(line, "jump needs a move number")),
            "reset" | "new" => Ok(Intent::Reset),
            "help" | "?" => Ok(Intent::Help),
            "quit" | "q" | "exit" => Ok(Intent::Quit),
            _ => parse_cell(line, line).map(Intent::Play),
        }
    }
}

fn parse_cell(line: &str, cell: &str) -> Result<usize, IntentError> {
    if cell.is_empty() {
        return Err(IntentError::new(line, "play needs a cell"));
    }
    // Raw numbers pass through so the history can reject off-board cells.
    if let Ok(index) = cell.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(cell)
        .map(Position::to_index)
        .ok_or_else(|| IntentError::new(line, "unknown cell"))
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// History index of the current snapshot.
    pub pointer: usize,
    /// Status line, e.g. "Next turn: O".
    pub status: String,
    /// Derived state of the current snapshot.
    pub current: CurrentView,
    /// Jump targets, oldest first.
    pub moves: Vec<MoveDescriptor>,
}

impl Report {
    /// Collects the report for `history`.
    #[instrument(skip(history))]
    pub fn from_history(history: &GameHistory) -> Self {
        let current = history.current();
        Self {
            pointer: history.pointer(),
            status: current.status().to_string(),
            current,
            moves: history.describe_moves(),
        }
    }

    /// Renders the board, status and (optionally) the move list.
    pub fn render(&self, show_history: bool) -> String {
        let mut out = self.current.board().display();
        out.push_str("\n\n");
        out.push_str(&self.status);
        if *self.current.is_draw() {
            out.push_str(" (board full, no winner)");
        }
        out.push('\n');

        if show_history {
            for descriptor in &self.moves {
                let marker = if *descriptor.index() == self.pointer {
                    '>'
                } else {
                    ' '
                };
                out.push_str(&format!("{} {}\n", marker, descriptor));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intents() {
        assert_eq!(Intent::parse("play 4"), Ok(Intent::Play(4)));
        assert_eq!(Intent::parse("  7 "), Ok(Intent::Play(7)));
        assert_eq!(Intent::parse("p top right"), Ok(Intent::Play(2)));
        assert_eq!(Intent::parse("center"), Ok(Intent::Play(4)));
        assert_eq!(Intent::parse("play 12"), Ok(Intent::Play(12)));
        assert_eq!(Intent::parse("JUMP 3"), Ok(Intent::Jump(3)));
        assert_eq!(Intent::parse("reset"), Ok(Intent::Reset));
        assert_eq!(Intent::parse("q"), Ok(Intent::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Intent::parse("").unwrap_err().reason, "empty command");
        assert_eq!(Intent::parse("jump x").unwrap_err().reason, "jump needs a move number");
        assert_eq!(Intent::parse("play").unwrap_err().reason, "play needs a cell");
        assert_eq!(Intent::parse("dance").unwrap_err().reason, "unknown cell");
    }

    #[test]
    fn test_render_marks_current_move() {
        let mut history = GameHistory::new();
        history.apply_move(0);
        history.apply_move(4);
        history.jump_to(1).unwrap();

        let text = Report::from_history(&history).render(true);

        assert!(text.starts_with("X|1|2\n"));
        assert!(text.contains("Next turn: O\n"));
        assert!(text.contains("  0. Go to game start\n"));
        assert!(text.contains("> 1. Go to move #1 (X -> Top-left)\n"));
        assert!(text.contains("  2. Go to move #2 (O -> Center)\n"));
    }

    #[test]
    fn test_render_without_history() {
        let text = Report::from_history(&GameHistory::new()).render(false);
        assert!(text.ends_with("Next turn: X\n"));
        assert!(!text.contains("Go to"));
    }
}
