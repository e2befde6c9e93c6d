//! Draw detection logic for tic-tac-toe.

use super::win::is_terminal;
use crate::Board;

/// Moves in a full game; reaching it without a line is a draw.
pub const MAX_TURNS: u8 = 9;

/// A game is drawn once `turn_count` reaches [`MAX_TURNS`] with no
/// completed line.
pub fn is_draw(board: &Board, turn_count: u8) -> bool {
    turn_count >= MAX_TURNS && !is_terminal(board)
}
