//! Interactive game loop.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};
use ttt_engine::{Game, GameStatus, parse_position};

/// Plays `game` to the end, reading one position per line from `input`
/// and writing the board, prompts and result to `output`.
///
/// Unparseable, off-board and (under the reject policy) occupied
/// positions are reported and the same player is asked again.
///
/// # Errors
///
/// Fails if `input` runs out before the game ends or if reading or
/// writing fails.
#[instrument(skip_all, fields(first = %game.current_player(), policy = ?game.policy()))]
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> Result<GameStatus> {
    info!("Starting game");
    write!(output, "{}", game.board()).context("Failed to write board")?;

    let mut line = String::new();
    loop {
        let player = game.current_player();
        write!(
            output,
            "\n{player}'s turn. \nEnter an integer position to place your mark (0-8).\n"
        )
        .context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            bail!(
                "Input closed after {} moves, before the game finished",
                game.turn_count()
            );
        }

        let status = match parse_position(&line).and_then(|pos| game.play(pos)) {
            Ok(status) => status,
            Err(e) => {
                warn!(%player, error = %e, "Move rejected");
                writeln!(output, "{e}").context("Failed to write error")?;
                continue;
            }
        };

        write!(output, "{}", game.board()).context("Failed to write board")?;

        match status {
            GameStatus::InProgress => {}
            GameStatus::Won(winner) => {
                writeln!(output, "GAME OVER!").context("Failed to write result")?;
                writeln!(output, "Player {winner} wins!").context("Failed to write result")?;
                return Ok(status);
            }
            GameStatus::Draw => {
                writeln!(output, "It's a tie. Game over.").context("Failed to write result")?;
                return Ok(status);
            }
        }
    }
}
