//! Terminal condition after a move.

use crate::rules::{all_filled, has_line};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board for the player who just moved.
///
/// Both flags are computed independently: the final move of a game can
/// complete a line and fill the board at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outcome {
    /// The mover owns a complete row, column or diagonal.
    pub line_found: bool,
    /// No empty cell remains.
    pub board_full: bool,
}

impl Outcome {
    /// Evaluates `board` from `player`'s point of view.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn evaluate(board: &Board, player: Player) -> Self {
        Self {
            line_found: has_line(board, player),
            board_full: all_filled(board),
        }
    }

    /// Checks if the game has ended, by a line or a full board.
    pub fn is_terminal(&self) -> bool {
        self.line_found || self.board_full
    }
}
