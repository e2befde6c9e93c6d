//! Command-line interface for the console game.

use clap::{Parser, ValueEnum};
use ttt_engine::{OccupiedPolicy, Player};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ttt")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Player who moves first
    #[arg(long, value_enum, default_value_t = FirstPlayer::X)]
    pub first: FirstPlayer,

    /// Let a move replace a mark that is already on the board
    #[arg(long)]
    pub overwrite: bool,

    /// Print the finished game as one line of JSON
    #[arg(long)]
    pub json: bool,
}

/// Choice of opening player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstPlayer {
    /// X opens
    X,
    /// O opens
    O,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::X => Player::X,
            FirstPlayer::O => Player::O,
        }
    }
}

impl Cli {
    /// Occupancy policy selected by `--overwrite`.
    pub fn policy(&self) -> OccupiedPolicy {
        if self.overwrite {
            OccupiedPolicy::Overwrite
        } else {
            OccupiedPolicy::Reject
        }
    }
}
