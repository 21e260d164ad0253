//! Moves: the closed `Move` union and the legal-move generator.
//!
//! `Move` is a plain tagged union matched exhaustively wherever it is
//! consumed; there is no visitor indirection. Two moves comparing equal
//! means they are the same move: equality is over piece, ticket kinds and
//! nodes, so enumeration into a set deduplicates by ticket kind.

pub mod generator;

pub use generator::legal_moves;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::NodeId;
use crate::core::{Piece, Ticket};

/// A legal relocation of one piece, spending tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// One leg: travel `source -> destination` spending `ticket`.
    Single {
        piece: Piece,
        ticket: Ticket,
        source: NodeId,
        destination: NodeId,
    },
    /// Two legs in one turn, via the intermediate node `middle`. The
    /// source is implicit: the mover's current location.
    Double {
        piece: Piece,
        first: Ticket,
        middle: NodeId,
        second: Ticket,
        destination: NodeId,
    },
}

impl Move {
    /// The piece commencing this move.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        match *self {
            Self::Single { piece, .. } | Self::Double { piece, .. } => piece,
        }
    }

    /// The node the mover ends on.
    #[must_use]
    pub const fn destination(&self) -> NodeId {
        match *self {
            Self::Single { destination, .. } | Self::Double { destination, .. } => destination,
        }
    }

    /// The tickets this move spends, in leg order.
    #[must_use]
    pub fn tickets(&self) -> SmallVec<[Ticket; 2]> {
        match *self {
            Self::Single { ticket, .. } => SmallVec::from_slice(&[ticket]),
            Self::Double { first, second, .. } => SmallVec::from_slice(&[first, second]),
        }
    }

    /// Number of legs (1 or 2).
    #[must_use]
    pub const fn leg_count(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Double { .. } => 2,
        }
    }

    /// Check whether this is a double move.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Self::Double { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single {
                piece,
                ticket,
                source,
                destination,
            } => write!(f, "{piece} {ticket} {source}->{destination}"),
            Self::Double {
                piece,
                first,
                middle,
                second,
                destination,
            } => write!(f, "{piece} double: {first}->{middle}, {second}->{destination}"),
        }
    }
}
