//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They never mutate and
//! never print; reporting the outcome is up to the caller.

mod draw;
mod win;

pub use draw::{MAX_TURNS, is_draw};
pub use win::{is_terminal, winner, winning_line};
