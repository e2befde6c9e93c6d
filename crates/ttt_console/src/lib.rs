//! Console front end for the tic-tac-toe engine.
//!
//! The [`run`] loop is generic over its input and output so whole games
//! can be played from memory in tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod driver;

pub use cli::{Cli, FirstPlayer};
pub use driver::run;
