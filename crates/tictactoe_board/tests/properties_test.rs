//! Property tests over arbitrary boards and move sequences.

use proptest::prelude::*;
use tictactoe_board::{Board, BoardError, Coordinate, MAX_SIZE, Mark, Player, all_filled};

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::One), Just(Player::Two)]
}

fn mark() -> impl Strategy<Value = Mark> {
    prop_oneof![
        Just(Mark::Empty),
        Just(Mark::PlayerOne),
        Just(Mark::PlayerTwo),
    ]
}

/// Arbitrary square board of side 1..=6.
fn board() -> impl Strategy<Value = Board> {
    (1usize..=6).prop_flat_map(|size| {
        prop::collection::vec(prop::collection::vec(mark(), size), size)
            .prop_map(|rows| Board::from_rows(rows).unwrap())
    })
}

proptest! {
    #[test]
    fn new_board_is_all_empty(size in 1usize..=MAX_SIZE) {
        let board = Board::new(size).unwrap();
        prop_assert_eq!(board.cells().len(), size * size);
        prop_assert!(board.cells().iter().all(|m| *m == Mark::Empty));
    }

    #[test]
    fn update_never_mutates_input(
        board in board(),
        p in player(),
        row in 0usize..8,
        col in 0usize..8
    ) {
        let before = board.clone();
        let _ = board.update(p, row, col);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn update_out_of_range(
        board in board(),
        p in player(),
        extra in 0usize..10,
        other in 0usize..6
    ) {
        let size = board.size();
        let other = other % size;
        prop_assert_eq!(
            board.update(p, size + extra, other),
            Err(BoardError::OutOfRange { row: size + extra, col: other, size })
        );
        prop_assert_eq!(
            board.update(p, other, size + extra),
            Err(BoardError::OutOfRange { row: other, col: size + extra, size })
        );
    }

    #[test]
    fn update_changes_exactly_one_cell(board in board(), p in player()) {
        if let Some(at) = board.empty_cells().next() {
            let next = board.update(p, at.row, at.col).unwrap();
            let changed = board
                .cells()
                .iter()
                .zip(next.cells())
                .filter(|(a, b)| a != b)
                .count();
            prop_assert_eq!(changed, 1);
            prop_assert_eq!(next.get(at.row, at.col), Ok(Mark::from(p)));
            prop_assert_eq!(
                next.update(p.opponent(), at.row, at.col),
                Err(BoardError::CellOccupied { row: at.row, col: at.col })
            );
        }
    }

    #[test]
    fn all_filled_iff_no_empty(board in board()) {
        prop_assert_eq!(all_filled(&board), board.empty_cells().next().is_none());
    }

    #[test]
    fn notation_round_trip(row in 0usize..MAX_SIZE, col in 0usize..1000) {
        let coordinate = Coordinate::new(row, col);
        prop_assert_eq!(Coordinate::parse(&coordinate.to_string()), Ok(coordinate));
    }

    #[test]
    fn rows_past_z_never_parse(row in MAX_SIZE..=usize::MAX, col in 0usize..1000) {
        let text = Coordinate::new(row, col).to_string();
        prop_assert_eq!(
            Coordinate::parse(&text),
            Err(BoardError::InvalidInput(text.clone()))
        );
    }
}
