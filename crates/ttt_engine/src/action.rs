//! Moves and the errors that reject them.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.to_index())
    }
}

/// Reasons a move is rejected.
///
/// All variants are recoverable: the board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The input is not an integer.
    #[display("'{}' is not an integer. Enter a position from 0 to 8.", _0)]
    InvalidFormat(String),

    /// The integer does not name a cell.
    #[display("Position {} is off the board. Enter a position from 0 to 8.", _0)]
    OutOfRange(i64),

    /// The cell already holds a mark.
    #[display("Cell {} is already taken. Choose an empty cell.", _0.to_index())]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
