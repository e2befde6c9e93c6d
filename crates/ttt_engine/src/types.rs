//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first by default).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    ///
    /// Applying it twice yields the original player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Square {
    /// Character shown for this cell when the board is rendered.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '_',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Marks the cell at `pos` for `player`.
    ///
    /// Unconditional: an occupied cell is overwritten. Occupancy policy
    /// belongs to [`crate::Game::play`].
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position, player: Player) {
        self.squares[pos.to_index()] = Square::Occupied(player);
    }

    /// Returns all cells as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of claimed cells.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for player in [Player::X, Player::O] {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_apply_move_marks_cell() {
        let mut board = Board::new();
        board.apply_move(Position::Center, Player::O);
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert!(!board.is_empty(Position::Center));
        assert!(board.is_empty(Position::TopLeft));
    }

    #[test]
    fn test_apply_move_overwrites() {
        let mut board = Board::new();
        board.apply_move(Position::TopLeft, Player::X);
        board.apply_move(Position::TopLeft, Player::O);
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Square::Empty.symbol(), '_');
        assert_eq!(Square::Occupied(Player::X).symbol(), 'X');
        assert_eq!(Square::Occupied(Player::O).symbol(), 'O');
    }
}
