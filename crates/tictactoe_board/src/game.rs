//! Turn bookkeeping on top of the board.

use crate::coordinate::Coordinate;
use crate::error::BoardError;
use crate::outcome::Outcome;
use crate::{Board, Player};
use tracing::{debug, instrument};

/// A game in progress: the latest board and whose turn it is.
///
/// Player one always opens. The turn passes only after a move that does
/// not complete a line, so once a line is found [`Game::to_move`] names
/// the winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: Outcome,
}

impl Game {
    /// Starts a game on an empty `size × size` board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            to_move: Player::One,
            outcome: Outcome::default(),
        })
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move it is (or who won).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the outcome of the last accepted move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Plays move text such as `B2` for the active player.
    ///
    /// On error the game is left exactly as it was.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, text: &str) -> Result<Outcome, BoardError> {
        let coordinate = Coordinate::parse(text).inspect_err(|err| {
            debug!(%err, "Rejected move text");
        })?;
        self.play_at(coordinate)
    }

    /// Plays a parsed coordinate for the active player.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play_at(&mut self, coordinate: Coordinate) -> Result<Outcome, BoardError> {
        if self.outcome.is_terminal() {
            return Err(BoardError::GameOver);
        }

        let board = self
            .board
            .update(self.to_move, coordinate.row, coordinate.col)
            .inspect_err(|err| debug!(%err, "Rejected move"))?;
        let outcome = Outcome::evaluate(&board, self.to_move);

        self.board = board;
        self.outcome = outcome;
        if outcome.is_terminal() {
            debug!(?outcome, "Game finished");
        }
        if !outcome.line_found {
            self.to_move = self.to_move.opponent();
        }
        Ok(outcome)
    }
}
