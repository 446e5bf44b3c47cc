//! Read-render loop driving a [`Game`] over text streams.

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use tictactoe_board::{BoardError, Game, Outcome, Player};
use tracing::{info, instrument, warn};

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The named player completed a line.
    Victory(Player),
    /// The board filled up without a line.
    Draw,
    /// Input ran out before the game finished.
    Abandoned,
}

/// Console front end: owns the streams, the game owns the rules.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    ///
    /// When `clear` is set the terminal is wiped before every frame.
    pub fn new(input: R, output: W, clear: bool) -> Self {
        Self {
            input,
            output,
            clear,
        }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays `game` to completion, prompting the active player each turn.
    ///
    /// Rejected moves re-prompt the same player with a corrective message.
    /// A game that is already over goes straight to the end screen.
    #[instrument(skip(self, game), fields(size = game.board().size()))]
    pub fn run(&mut self, mut game: Game) -> std::io::Result<Ending> {
        let mut prefix = "";
        while !game.outcome().is_terminal() {
            self.frame(&game)?;
            write!(self.output, "{prefix}Move Player {}: ", game.to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                warn!("Input closed before the game finished");
                writeln!(self.output)?;
                return Ok(Ending::Abandoned);
            }

            prefix = match game.play(line.trim()) {
                Ok(_) => "",
                Err(err) => correction(&err),
            };
        }

        self.frame(&game)?;
        let ending = ending(game.outcome(), game.to_move());
        match ending {
            Ending::Victory(player) => writeln!(self.output, "Player {player} is victorious")?,
            _ => writeln!(self.output, "No one is victorious")?,
        }
        self.output.flush()?;
        info!(?ending, "Game over");
        Ok(ending)
    }

    fn frame(&mut self, game: &Game) -> std::io::Result<()> {
        if self.clear {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.output, "{}", game.board())
    }
}

fn ending(outcome: Outcome, mover: Player) -> Ending {
    if outcome.line_found {
        Ending::Victory(mover)
    } else {
        Ending::Draw
    }
}

/// Message shown above the prompt after a rejected move.
pub fn correction(err: &BoardError) -> &'static str {
    match err {
        BoardError::OutOfRange { .. } => "Out of range, try again!\n",
        BoardError::CellOccupied { .. } => "Already taken, try again!\n",
        BoardError::InvalidInput(_) | BoardError::InvalidSize(_) => "Invalid, try again!\n",
        BoardError::GameOver => "",
    }
}
