//! The board: transport graph, reveal schedule, and their pairing into a
//! per-game setup.

pub mod graph;
pub mod setup;

pub use graph::{NodeId, TransportGraph};
pub use setup::{GameSetup, Schedule};
