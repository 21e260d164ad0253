//! Error types for state construction and move application.
//!
//! Every operation in this crate is a pure computation over explicit
//! inputs, so failures are caller errors, never transient: nothing here is
//! worth retrying.

use thiserror::Error;

use super::piece::PursuerId;
use super::ticket::Ticket;
use crate::board::NodeId;
use crate::moves::Move;

/// Rejections raised by the `GameState` factory. Fatal: no state is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("at least one pursuer is required")]
    NoPursuers,

    #[error("the evader player does not carry the evader piece")]
    EvaderMisclassified,

    #[error("pursuer at index {0} does not carry a pursuer piece")]
    PursuerMisclassified(usize),

    #[error("duplicate pursuer piece: {0}")]
    DuplicatePursuer(PursuerId),

    #[error("two pursuers start on node {0}")]
    SharedLocation(NodeId),

    #[error("{0} holds a forbidden {1} ticket")]
    ForbiddenTicket(PursuerId, Ticket),

    #[error("the reveal schedule is empty")]
    EmptySchedule,

    #[error("the transport graph has no nodes")]
    EmptyGraph,
}

/// Rejections raised by `GameState::advance`. The state that rejected the
/// move is left unchanged and remains usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// The move is not in the current legal-move set.
    #[error("not a legal move here: {0}")]
    NotAvailable(Move),

    /// The game already has a winner; no further moves are accepted.
    #[error("the game is over")]
    GameOver,
}
