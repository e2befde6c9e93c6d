//! Board positions and parsing of typed-in positions.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// The three positions of board row `row` (0-2), left to right.
    ///
    /// Returns `None` for rows past the bottom of the board.
    pub fn row(row: usize) -> Option<[Position; 3]> {
        let first = Self::from_index(row.checked_mul(3)?)?;
        let i = first.to_index();
        Some([first, Self::from_index(i + 1)?, Self::from_index(i + 2)?])
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses a line of user input into a board position.
///
/// Surrounding whitespace is ignored. Input that is not an integer is
/// [`MoveError::InvalidFormat`]; an integer outside 0-8 is
/// [`MoveError::OutOfRange`]. Integers too large for `i64` saturate to
/// `i64::MAX` or `i64::MIN`.
#[instrument]
pub fn parse_position(input: &str) -> Result<Position, MoveError> {
    let trimmed = input.trim();
    let value = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => return Err(MoveError::InvalidFormat(trimmed.to_string())),
        },
    };

    usize::try_from(value)
        .ok()
        .and_then(Position::from_index)
        .ok_or(MoveError::OutOfRange(value))
}
