//! Game engine: owns the board, the player to move and the turn counter.

use crate::action::{Move, MoveError};
use crate::record::GameRecord;
use crate::rules::{is_draw, is_terminal, winning_line};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// What to do when a move targets a cell that already holds a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OccupiedPolicy {
    /// Refuse the move with [`MoveError::CellOccupied`].
    #[default]
    Reject,
    /// Replace the existing mark; the move still counts as a turn.
    Overwrite,
}

/// Tic-tac-toe game engine.
///
/// Starts with an empty board and X to move. Each accepted move bumps the
/// turn counter, then either ends the game (a completed line wins for the
/// mover, nine turns without one is a draw) or passes the turn.
/// Once the game is over every further move is refused.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Player,
    first_player: Player,
    turn_count: u8,
    status: GameStatus,
    history: Vec<Move>,
    policy: OccupiedPolicy,
}

impl Game {
    /// Creates a new game with X moving first, rejecting occupied cells.
    pub fn new() -> Self {
        Self::with_options(Player::X, OccupiedPolicy::default())
    }

    /// Creates a new game with the given first player and occupancy policy.
    #[instrument]
    pub fn with_options(first_player: Player, policy: OccupiedPolicy) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            first_player,
            turn_count: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
            policy,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the winner, once won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of accepted moves.
    pub fn turn_count(&self) -> u8 {
        self.turn_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the occupancy policy.
    pub fn policy(&self) -> OccupiedPolicy {
        self.policy
    }

    /// Places the current player's mark at `position` and advances the game.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended.
    /// - [`MoveError::CellOccupied`] if the cell is taken and the policy is
    ///   [`OccupiedPolicy::Reject`].
    ///
    /// A rejected move leaves the game unchanged.
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.turn_count))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            debug!(status = ?self.status, "Move after game end refused");
            return Err(MoveError::GameOver);
        }

        if self.policy == OccupiedPolicy::Reject && !self.board.is_empty(position) {
            debug!(%position, "Cell already occupied");
            return Err(MoveError::CellOccupied(position));
        }

        let player = self.current_player;
        let mv = Move::new(player, position);
        self.board.apply_move(position, player);
        self.history.push(mv);
        self.turn_count += 1;
        debug!(%mv, occupied = self.board.occupied(), "Move applied");

        self.status = if is_terminal(&self.board) {
            info!(winner = %player, turns = self.turn_count, "Game won");
            GameStatus::Won(player)
        } else if is_draw(&self.board, self.turn_count) {
            info!(turns = self.turn_count, "Game drawn");
            GameStatus::Draw
        } else {
            self.current_player = player.opponent();
            GameStatus::InProgress
        };

        Ok(self.status)
    }

    /// Snapshot of the game for reporting.
    pub fn record(&self) -> GameRecord {
        GameRecord::new(
            self.first_player,
            self.history.clone(),
            self.status,
            winning_line(&self.board).map(|(_, line)| line),
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
