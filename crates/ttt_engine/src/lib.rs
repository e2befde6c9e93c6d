//! Tic-tac-toe game engine.
//!
//! Pure game logic with no I/O: the board and its cells, win and draw
//! rules, the text rendering of the board, and the turn state machine
//! that ties them together.
//!
//! # Example
//!
//! ```
//! use ttt_engine::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     let position = Position::from_index(index).unwrap();
//!     game.play(position).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
mod record;
mod render;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, GameStatus, OccupiedPolicy};
pub use position::{Position, parse_position};
pub use record::GameRecord;
pub use render::render;
pub use rules::{MAX_TURNS, is_draw, is_terminal, winner, winning_line};
pub use types::{Board, Player, Square};
