//! Game state: travel log, win evaluation, and the `GameState`
//! orchestrator that ties the board, players and move generator together.

pub mod game;
pub mod log;
mod winner;

pub use game::GameState;
pub use log::{LogEntry, TravelLog};
