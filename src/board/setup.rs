//! Game setup: the transport graph plus the reveal schedule.
//!
//! A `GameSetup` is fixed for the lifetime of a game; every `GameState`
//! derived from it shares the same instance.

use serde::{Deserialize, Serialize};

use super::graph::TransportGraph;

/// Ordered reveal flags, one per round: `true` where the evader's location
/// is disclosed in the travel log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    rounds: Vec<bool>,
}

impl Schedule {
    /// Create a schedule from explicit per-round flags.
    #[must_use]
    pub fn new(rounds: Vec<bool>) -> Self {
        Self { rounds }
    }

    /// An all-hidden schedule of `len` rounds.
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            rounds: vec![false; len],
        }
    }

    /// The classic 24-round schedule, revealing on rounds 3, 8, 13, 18
    /// and 24 (1-based).
    #[must_use]
    pub fn standard24() -> Self {
        let rounds = (1..=24)
            .map(|round| matches!(round, 3 | 8 | 13 | 18 | 24))
            .collect();
        Self { rounds }
    }

    /// Number of rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Check whether the schedule has no rounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Whether `round` (0-based) is a reveal round. Out-of-range rounds
    /// never reveal.
    #[must_use]
    pub fn reveals(&self, round: usize) -> bool {
        self.rounds.get(round).copied().unwrap_or(false)
    }

    /// Rounds left to play from `round` (0-based) onwards.
    #[must_use]
    pub fn remaining(&self, round: usize) -> usize {
        self.rounds.len().saturating_sub(round)
    }
}

/// Immutable setup shared by every state of one game: the transport graph
/// and the reveal schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSetup {
    graph: TransportGraph,
    schedule: Schedule,
}

impl GameSetup {
    /// Combine a graph and a schedule.
    ///
    /// Emptiness of either is rejected by the `GameState` factory rather
    /// than here, so partial setups can be staged.
    #[must_use]
    pub fn new(graph: TransportGraph, schedule: Schedule) -> Self {
        Self { graph, schedule }
    }

    /// The transport graph.
    #[must_use]
    pub fn graph(&self) -> &TransportGraph {
        &self.graph
    }

    /// The reveal schedule.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}
