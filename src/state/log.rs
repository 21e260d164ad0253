//! The evader's travel log and its round-indexed reveal policy.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{NodeId, Schedule};
use crate::core::Ticket;

/// One leg of evader travel: the ticket used and, on reveal rounds only,
/// the resulting location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    ticket: Ticket,
    location: Option<NodeId>,
}

impl LogEntry {
    /// An entry for a concealed round: the ticket is public, the
    /// destination is not.
    #[must_use]
    pub const fn hidden(ticket: Ticket) -> Self {
        Self {
            ticket,
            location: None,
        }
    }

    /// An entry for a reveal round, disclosing the destination.
    #[must_use]
    pub const fn revealed(ticket: Ticket, location: NodeId) -> Self {
        Self {
            ticket,
            location: Some(location),
        }
    }

    /// The ticket the evader used for this leg.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// The disclosed location, if this leg fell on a reveal round.
    #[must_use]
    pub const fn location(&self) -> Option<NodeId> {
        self.location
    }

    /// Check whether this leg disclosed the evader's location.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.location.is_some()
    }
}

/// Ordered per-leg history of the evader's travel.
///
/// One entry per leg, so `len()` equals the number of rounds the evader
/// has commenced; at round boundaries it is exactly the round index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelLog {
    entries: Vector<LogEntry>,
}

impl TravelLog {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of legs recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no legs have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for leg `index`, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// A log with one more leg appended. The destination is recorded iff
    /// the leg's round (the current length) is a reveal round.
    pub(crate) fn record(&self, ticket: Ticket, destination: NodeId, schedule: &Schedule) -> Self {
        let entry = if schedule.reveals(self.entries.len()) {
            LogEntry::revealed(ticket, destination)
        } else {
            LogEntry::hidden(ticket)
        };
        let mut entries = self.entries.clone();
        entries.push_back(entry);
        Self { entries }
    }
}
