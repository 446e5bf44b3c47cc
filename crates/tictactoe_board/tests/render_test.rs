//! Tests for the text rendering contract.

use tictactoe_board::{Board, Mark, render};

#[test]
fn test_render_one_by_one_empty() {
    let board = Board::new(1).unwrap();
    assert_eq!(render(&board), "   1\nA: _");
}

#[test]
fn test_render_one_by_one_player_one() {
    let board = Board::from_rows(vec![vec![Mark::PlayerOne]]).unwrap();
    assert_eq!(render(&board), "   1\nA: X");
}

#[test]
fn test_render_one_by_one_player_two() {
    let board = Board::from_rows(vec![vec![Mark::PlayerTwo]]).unwrap();
    assert_eq!(render(&board), "   1\nA: O");
}

#[test]
fn test_render_three_by_three() {
    let board = Board::from_rows(vec![
        vec![Mark::PlayerTwo, Mark::PlayerOne, Mark::Empty],
        vec![Mark::PlayerOne, Mark::Empty, Mark::Empty],
        vec![Mark::Empty, Mark::Empty, Mark::PlayerTwo],
    ])
    .unwrap();

    let expected = concat!(
        "   1 2 3\n",
        "A: O X _\n",
        "B: X _ _\n",
        "C: _ _ O",
    );
    assert_eq!(render(&board), expected);
    assert_eq!(board.to_string(), expected);
}

#[test]
fn test_render_two_digit_columns() {
    let board = Board::new(10).unwrap();
    let rendered = render(&board);
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("   1 2 3 4 5 6 7 8 9 10"));
    assert_eq!(lines.last(), Some("J: _ _ _ _ _ _ _ _ _ _"));
    assert!(!rendered.ends_with('\n'));
}
