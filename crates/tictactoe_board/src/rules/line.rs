//! Line detection: rows, columns and both diagonals.

use crate::{Board, Mark, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if `player` owns a complete row, column or diagonal.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Mark::from(player);
    let size = board.size();
    let cells = board.cells();
    let owned = |row: usize, col: usize| cells[row * size + col] == mark;

    let row_line = (0..size).any(|row| (0..size).all(|col| owned(row, col)));
    let column_line = || (0..size).any(|col| (0..size).all(|row| owned(row, col)));
    let main_diagonal = || (0..size).all(|i| owned(i, i));
    let anti_diagonal = || (0..size).all(|i| owned(i, size - 1 - i));

    row_line || column_line() || main_diagonal() || anti_diagonal()
}

/// Returns the first player, in turn order, who owns a complete line.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| has_line(board, *player))
}
