//! Piece identity: one hidden evader, N visible pursuers.
//!
//! A `Piece` names a participant; it carries no board position or tickets.
//! Those live on `Player`, which pairs a piece with its mutable-per-state
//! data.

use serde::{Deserialize, Serialize};

/// Identifier for one of the pursuer pieces.
///
/// Indices are caller-assigned and opaque to the engine; they only need to
/// be unique within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PursuerId(pub u8);

impl PursuerId {
    /// Create a new pursuer ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PursuerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pursuer {}", self.0)
    }
}

/// A game piece: the single hidden-movement evader or one of the visible
/// pursuers attempting capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Piece {
    /// The hidden piece being pursued. Exactly one per game.
    Evader,
    /// A visible pursuer.
    Pursuer(PursuerId),
}

impl Piece {
    /// Create a pursuer piece from a raw index.
    #[must_use]
    pub const fn pursuer(id: u8) -> Self {
        Self::Pursuer(PursuerId::new(id))
    }

    /// Check whether this is the evader piece.
    #[must_use]
    pub const fn is_evader(self) -> bool {
        matches!(self, Self::Evader)
    }

    /// Check whether this is a pursuer piece.
    #[must_use]
    pub const fn is_pursuer(self) -> bool {
        matches!(self, Self::Pursuer(_))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Evader => write!(f, "Evader"),
            Self::Pursuer(id) => write!(f, "{id}"),
        }
    }
}
