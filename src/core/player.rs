//! A piece together with its board position and ticket holdings.

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::ticket::{Ticket, Tickets};
use crate::board::NodeId;

/// One participant's full per-state data: identity, location, inventory.
///
/// `Player` is a small `Copy` value; relocation and ticket changes return
/// new values, leaving earlier snapshots intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    piece: Piece,
    location: NodeId,
    tickets: Tickets,
}

impl Player {
    /// Create a player at `location` holding `tickets`.
    #[must_use]
    pub const fn new(piece: Piece, location: NodeId, tickets: Tickets) -> Self {
        Self {
            piece,
            location,
            tickets,
        }
    }

    /// The piece this player moves.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// Current graph node.
    #[must_use]
    pub const fn location(&self) -> NodeId {
        self.location
    }

    /// Read-only view of the ticket inventory.
    #[must_use]
    pub const fn tickets(&self) -> &Tickets {
        &self.tickets
    }

    /// Check whether at least one of `ticket` is held.
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.tickets.has(ticket)
    }

    /// Check whether at least `n` of `ticket` are held.
    #[must_use]
    pub const fn has_at_least(&self, ticket: Ticket, n: u32) -> bool {
        self.tickets.has_at_least(ticket, n)
    }

    /// This player relocated to `location`.
    pub(crate) fn at(self, location: NodeId) -> Self {
        Self { location, ..self }
    }

    /// This player with `n` of `ticket` spent.
    pub(crate) fn spend(self, ticket: Ticket, n: u32) -> Self {
        Self {
            tickets: self.tickets.spend(ticket, n),
            ..self
        }
    }

    /// This player with `n` of `ticket` gained.
    pub(crate) fn gain(self, ticket: Ticket, n: u32) -> Self {
        Self {
            tickets: self.tickets.gain(ticket, n),
            ..self
        }
    }
}
