//! Serializable summary of a game.

use crate::action::Move;
use crate::game::GameStatus;
use crate::{Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What happened in a game: who started, every accepted move, and how it
/// ended.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Player who moved first.
    first_player: Player,
    /// Accepted moves in order.
    moves: Vec<Move>,
    /// Status when the record was taken.
    status: GameStatus,
    /// The completed line, if the game was won.
    winning_line: Option<[Position; 3]>,
}

impl GameRecord {
    pub(crate) fn new(
        first_player: Player,
        moves: Vec<Move>,
        status: GameStatus,
        winning_line: Option<[Position; 3]>,
    ) -> Self {
        Self {
            first_player,
            moves,
            status,
            winning_line,
        }
    }

    /// Number of accepted moves.
    pub fn turns(&self) -> usize {
        self.moves.len()
    }
}
