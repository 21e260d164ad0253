//! Core value types: pieces, tickets, players, errors.
//!
//! Everything here is a small immutable value. State-level invariants
//! (unique pursuer locations, no specials for pursuers) are enforced by the
//! `GameState` factory, not by these types.

pub mod error;
pub mod piece;
pub mod player;
pub mod ticket;

pub use error::{ConstructionError, IllegalMove};
pub use piece::{Piece, PursuerId};
pub use player::Player;
pub use ticket::{Ticket, Tickets, Transport};
