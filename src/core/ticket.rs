//! Tickets: the transport tokens spent to move, and per-player inventories.
//!
//! ## Ticket kinds
//!
//! One ticket kind per ordinary transport, plus two special kinds held only
//! by the evader:
//! - `Secret`: rides any edge regardless of its listed transports.
//! - `Double`: plays two single moves within one turn.
//!
//! ## Tickets (inventory)
//!
//! A dense ticket-kind -> count map. Counts never go negative: spending is
//! crate-internal and only reachable through moves the generator already
//! priced.

use serde::{Deserialize, Serialize};

/// A transport kind carried by a graph edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    /// River crossing; only secret-ticket holders may ride it.
    Ferry,
}

impl Transport {
    /// The ticket a traveller must spend to ride this transport.
    #[must_use]
    pub const fn ticket(self) -> Ticket {
        match self {
            Self::Taxi => Ticket::Taxi,
            Self::Bus => Ticket::Bus,
            Self::Underground => Ticket::Underground,
            Self::Ferry => Ticket::Secret,
        }
    }
}

/// Token consumed to use a transport or special capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    /// Edge travel ignoring the edge's listed transport kinds.
    Secret,
    /// Two single moves in one turn.
    Double,
}

impl Ticket {
    /// Number of ticket kinds.
    pub const COUNT: usize = 5;

    /// Every ticket kind, in inventory order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Taxi,
        Self::Bus,
        Self::Underground,
        Self::Secret,
        Self::Double,
    ];

    /// Check whether this kind is reserved to the evader.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Self::Secret | Self::Double)
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Taxi => "taxi",
            Self::Bus => "bus",
            Self::Underground => "underground",
            Self::Secret => "secret",
            Self::Double => "double",
        };
        write!(f, "{name}")
    }
}

/// Per-player ticket counts.
///
/// A small `Copy` value; "mutation" returns a new value, so snapshots of
/// earlier states keep their own counts.
///
/// ```
/// use shadowchase::{Ticket, Tickets};
///
/// let tickets = Tickets::empty().with(Ticket::Taxi, 4).with(Ticket::Bus, 3);
/// assert_eq!(tickets.count(Ticket::Taxi), 4);
/// assert!(tickets.has_at_least(Ticket::Bus, 3));
/// assert!(!tickets.has(Ticket::Secret));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tickets {
    counts: [u32; Ticket::COUNT],
}

impl Tickets {
    /// An inventory holding no tickets at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            counts: [0; Ticket::COUNT],
        }
    }

    /// Builder-style: this inventory with `ticket` set to `count`.
    #[must_use]
    pub const fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts[ticket.slot()] = count;
        self
    }

    /// The evader's opening hand: 4 taxi, 3 bus, 3 underground, 5 secret,
    /// 2 double.
    #[must_use]
    pub const fn evader_defaults() -> Self {
        Self::empty()
            .with(Ticket::Taxi, 4)
            .with(Ticket::Bus, 3)
            .with(Ticket::Underground, 3)
            .with(Ticket::Secret, 5)
            .with(Ticket::Double, 2)
    }

    /// A pursuer's opening hand: 11 taxi, 8 bus, 4 underground, no
    /// specials.
    #[must_use]
    pub const fn pursuer_defaults() -> Self {
        Self::empty()
            .with(Ticket::Taxi, 11)
            .with(Ticket::Bus, 8)
            .with(Ticket::Underground, 4)
    }

    /// Count held of one kind.
    #[must_use]
    pub const fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.slot()]
    }

    /// Check whether at least one of `ticket` is held.
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// Check whether at least `n` of `ticket` are held.
    #[must_use]
    pub const fn has_at_least(&self, ticket: Ticket, n: u32) -> bool {
        self.count(ticket) >= n
    }

    /// Total tickets held across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// This inventory with `n` of `ticket` removed.
    ///
    /// Callers must have priced the spend first; the move generator never
    /// emits a move the mover cannot afford.
    pub(crate) fn spend(mut self, ticket: Ticket, n: u32) -> Self {
        debug_assert!(self.has_at_least(ticket, n), "spending unheld {ticket}");
        self.counts[ticket.slot()] -= n;
        self
    }

    /// This inventory with `n` of `ticket` added.
    pub(crate) fn gain(mut self, ticket: Ticket, n: u32) -> Self {
        self.counts[ticket.slot()] += n;
        self
    }
}
