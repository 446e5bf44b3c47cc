//! Tests for move notation decoding.

use tictactoe_board::{BoardError, Coordinate};

#[test]
fn test_coords_b6() {
    assert_eq!(Coordinate::parse("B6"), Ok(Coordinate::new(1, 5)));
}

#[test]
fn test_coords_c87() {
    assert_eq!(Coordinate::parse("C87"), Ok(Coordinate::new(2, 86)));
}

#[test]
fn test_invalid_input_6b() {
    assert_eq!(
        Coordinate::parse("6B"),
        Err(BoardError::InvalidInput("6B".to_string()))
    );
}

#[test]
fn test_invalid_input_z0() {
    assert_eq!(
        Coordinate::parse("Z0"),
        Err(BoardError::InvalidInput("Z0".to_string()))
    );
}

#[test]
fn test_from_str() {
    let coordinate: Coordinate = "z26".parse().unwrap();
    assert_eq!(coordinate, Coordinate::new(25, 25));
}

#[test]
fn test_error_message() {
    let err = Coordinate::parse("?1").unwrap_err();
    assert_eq!(err.to_string(), r#"Invalid move input: "?1""#);
}
