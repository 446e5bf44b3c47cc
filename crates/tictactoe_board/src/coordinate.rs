//! Move notation: one row letter followed by a 1-based column number.

use crate::board::MAX_SIZE;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A 0-based `(row, col)` pair decoded from notation such as `B6`.
///
/// Parsing does not know the board size; [`crate::Board::update`] performs
/// the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row index, `A` = 0.
    pub row: usize,
    /// Column index, `1` = 0.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate from 0-based indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Decodes move text, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidInput`] if the text does not start with
    /// an ASCII letter, if the remainder is not a base-10 number, or if the
    /// column number is zero.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let invalid = || BoardError::InvalidInput(text.to_string());

        let mut chars = text.chars();
        let letter = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(invalid)?
            .to_ascii_uppercase();

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let column: usize = digits.parse().map_err(|_| invalid())?;
        if column == 0 {
            return Err(invalid());
        }

        Ok(Self {
            row: usize::from(letter as u8 - b'A'),
            col: column - 1,
        })
    }

    /// Letter naming the given row (`0` → `A`), or `None` past `Z`.
    pub fn row_letter(row: usize) -> Option<char> {
        let row = u8::try_from(row).ok().filter(|r| usize::from(*r) < MAX_SIZE)?;
        Some(char::from(b'A' + row))
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes move notation such as `B6`.
///
/// Rows past `Z` have no letter and are written as `R27C1`, which
/// [`Coordinate::parse`] rejects.
impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let col = self.col.saturating_add(1);
        match Self::row_letter(self.row) {
            Some(letter) => write!(f, "{letter}{col}"),
            None => write!(f, "R{}C{col}", self.row.saturating_add(1)),
        }
    }
}
