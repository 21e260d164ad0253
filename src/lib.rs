//! # shadowchase
//!
//! State engine for a turn-based, asymmetric hidden-movement pursuit game:
//! one hidden evader against several visible pursuers, moving over a
//! shared transport graph under per-player ticket constraints.
//!
//! ## Design Principles
//!
//! 1. **Immutable values**: `GameState::advance` derives a new state and
//!    never mutates the old one, so earlier snapshots stay valid for
//!    inspection or rewind and concurrent readers never contend.
//!
//! 2. **Eager derived data**: the legal-move set and the winner are
//!    computed at state construction, not on demand. Reading a snapshot
//!    is always cheap and race-free.
//!
//! 3. **Closed unions over dispatch**: `Move` is a tagged enum matched
//!    exhaustively wherever it is consumed. No visitors.
//!
//! ## Modules
//!
//! - `core`: pieces, tickets, players, errors
//! - `board`: transport graph, reveal schedule, game setup
//! - `moves`: the `Move` union and the legal-move generator
//! - `state`: travel log, win evaluation, the `GameState` orchestrator
//!
//! ## Example
//!
//! ```
//! use shadowchase::{
//!     GameSetup, GameState, NodeId, Piece, Player, Schedule, Ticket, Tickets, Transport,
//!     TransportGraph,
//! };
//!
//! let mut graph = TransportGraph::new();
//! graph.connect(NodeId::new(1), NodeId::new(2), Transport::Taxi);
//! graph.connect(NodeId::new(2), NodeId::new(3), Transport::Taxi);
//!
//! let evader = Player::new(
//!     Piece::Evader,
//!     NodeId::new(1),
//!     Tickets::empty().with(Ticket::Taxi, 4),
//! );
//! let pursuer = Player::new(
//!     Piece::pursuer(0),
//!     NodeId::new(3),
//!     Tickets::empty().with(Ticket::Taxi, 4),
//! );
//!
//! let setup = GameSetup::new(graph, Schedule::hidden(5));
//! let state = GameState::new(setup, evader, vec![pursuer]).unwrap();
//!
//! // The evader moves first: taxi 1 -> 2 is its only option.
//! assert_eq!(state.available_moves().len(), 1);
//! let mv = *state.available_moves().iter().next().unwrap();
//! let next = state.advance(&mv).unwrap();
//! assert!(next.winner().is_empty());
//! ```

pub mod board;
pub mod core;
pub mod moves;
pub mod state;

// Re-export commonly used types
pub use crate::board::{GameSetup, NodeId, Schedule, TransportGraph};
pub use crate::core::{
    ConstructionError, IllegalMove, Piece, Player, PursuerId, Ticket, Tickets, Transport,
};
pub use crate::moves::{legal_moves, Move};
pub use crate::state::{GameState, LogEntry, TravelLog};
