//! Text rendering of the board.
//!
//! ```text
//! Board state
//! X _ _  0 1 2
//! _ O _  3 4 5
//! _ _ _  6 7 8
//! ```
//!
//! Each row is followed by the index legend for that row so players can
//! see which number selects which cell. Unclaimed cells show `_`.

use crate::{Board, Position};
use std::fmt;

const HEADER: &str = "Board state";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        for row in (0..3).filter_map(Position::row) {
            for pos in row {
                write!(f, "{} ", self.get(pos).symbol())?;
            }
            write!(f, " ")?;
            let legend: Vec<String> = row.iter().map(|p| p.to_index().to_string()).collect();
            writeln!(f, "{}", legend.join(" "))?;
        }
        Ok(())
    }
}

/// Renders the board, including its header line and a trailing newline.
pub fn render(board: &Board) -> String {
    board.to_string()
}
