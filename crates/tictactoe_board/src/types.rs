//! Core domain types for the board engine.

use serde::{Deserialize, Serialize};

/// A player taking turns on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Moves first, marks cells with `X`.
    One,
    /// Moves second, marks cells with `O`.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// The content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Claimed by [`Player::One`].
    PlayerOne,
    /// Claimed by [`Player::Two`].
    PlayerTwo,
}

impl Mark {
    /// Checks if the cell is unclaimed.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Single-character symbol used by the text rendering.
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::PlayerOne => 'X',
            Mark::PlayerTwo => 'O',
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Mark::PlayerOne,
            Player::Two => Mark::PlayerTwo,
        }
    }
}
