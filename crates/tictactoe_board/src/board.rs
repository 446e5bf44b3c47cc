//! Square board value and move application.

use crate::coordinate::Coordinate;
use crate::error::BoardError;
use crate::types::{Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Largest supported side length. Rows are addressed by a single letter.
pub const MAX_SIZE: usize = 26;

/// Square N×N board.
///
/// Boards are values: [`Board::update`] returns a fresh board and never
/// touches the one it was called on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<Mark>>", try_from = "Vec<Vec<Mark>>")]
pub struct Board {
    size: usize,
    /// Cells in row-major order, `size * size` long.
    cells: Vec<Mark>,
}

impl Board {
    /// Creates an empty `size × size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is zero or larger
    /// than [`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size],
        })
    }

    /// Builds a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] unless every row is exactly as
    /// long as there are rows.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Mark>>) -> Result<Self, BoardError> {
        let size = rows.len();
        check_size(size)?;
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            debug!(size, width = row.len(), "Rejecting non-square board");
            return Err(BoardError::InvalidSize(row.len()));
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the mark at the given cell.
    pub fn get(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size)
    }

    /// Coordinates of every cell still free to play.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(idx, _)| Coordinate::new(idx / self.size, idx % self.size))
    }

    /// Returns a copy of this board with `player`'s mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`BoardError::OutOfRange`] if either coordinate is `>= size`
    /// - [`BoardError::CellOccupied`] if the cell is not empty
    #[instrument(skip(self), fields(size = self.size))]
    pub fn update(&self, player: Player, row: usize, col: usize) -> Result<Board, BoardError> {
        let idx = self.index(row, col)?;
        if !self.cells[idx].is_empty() {
            return Err(BoardError::CellOccupied { row, col });
        }

        let mut next = self.clone();
        next.cells[idx] = Mark::from(player);
        Ok(next)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if size == 0 || size > MAX_SIZE {
        return Err(BoardError::InvalidSize(size));
    }
    Ok(())
}

impl TryFrom<Vec<Vec<Mark>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Mark>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for Vec<Vec<Mark>> {
    fn from(board: Board) -> Self {
        board.rows().map(<[Mark]>::to_vec).collect()
    }
}
