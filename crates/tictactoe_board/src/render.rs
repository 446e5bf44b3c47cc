//! Text rendering of a board.

use crate::Board;
use crate::coordinate::Coordinate;
use tracing::instrument;

/// Renders the board as a column header followed by one lettered line
/// per row.
///
/// ```text
///    1 2 3
/// A: O X _
/// B: X _ _
/// C: _ _ O
/// ```
///
/// Lines are separated by `\n` with no trailing newline.
#[instrument(skip(board), fields(size = board.size()))]
pub fn render(board: &Board) -> String {
    let mut lines = Vec::with_capacity(board.size() + 1);

    let mut header = String::from("  ");
    for col in 1..=board.size() {
        header.push_str(&format!(" {col}"));
    }
    lines.push(header);

    for (row, marks) in board.rows().enumerate() {
        // Boards stop at MAX_SIZE rows, so every row has a letter.
        let mut line = format!("{}:", Coordinate::row_letter(row).unwrap_or('?'));
        for mark in marks {
            line.push(' ');
            line.push(mark.symbol());
        }
        lines.push(line);
    }

    lines.join("\n")
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}
