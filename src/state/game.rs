//! The immutable game state and its transition function.
//!
//! ## Turn structure
//!
//! Each round, the evader moves first; then every pursuer that has a legal
//! move takes one turn, in any order the caller likes. A pursuer with no
//! legal move is skipped the moment that is discovered, consuming no turn.
//! When the last owed pursuer has moved, the round index advances by one
//! per evader leg played, so a double counts twice, and it is the
//! evader's turn again.
//!
//! ## Value semantics
//!
//! `advance` never mutates: it derives a new `GameState` from the old one.
//! The legal-move set and the winner are computed eagerly at construction,
//! so readers of any snapshot never race on derived data. `im` collections
//! and the shared `Arc<GameSetup>` keep the derivation cheap.

use std::sync::Arc;

use im::HashSet as ImHashSet;
use log::debug;

use super::log::TravelLog;
use super::winner;
use crate::board::{GameSetup, NodeId};
use crate::core::{ConstructionError, IllegalMove, Piece, Player, PursuerId, Ticket, Tickets};
use crate::moves::{legal_moves, Move};

/// A complete position: setup, players, travel log, round index, the set
/// of pieces still owed a move this round, and the cached legal-move and
/// winner sets.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    setup: Arc<GameSetup>,
    remaining: ImHashSet<Piece>,
    log: TravelLog,
    evader: Player,
    pursuers: Vec<Player>,
    moves: ImHashSet<Move>,
    round: usize,
    winner: ImHashSet<Piece>,
}

impl GameState {
    /// Validating factory for the opening position.
    ///
    /// Rejects: an empty schedule or graph, no pursuers, a mislabelled
    /// evader or pursuer, duplicate pursuer pieces or locations, and any
    /// pursuer holding a secret or double ticket.
    pub fn new(
        setup: GameSetup,
        evader: Player,
        pursuers: Vec<Player>,
    ) -> Result<Self, ConstructionError> {
        if setup.schedule().is_empty() {
            return Err(ConstructionError::EmptySchedule);
        }
        if setup.graph().is_empty() {
            return Err(ConstructionError::EmptyGraph);
        }
        if pursuers.is_empty() {
            return Err(ConstructionError::NoPursuers);
        }
        if !evader.piece().is_evader() {
            return Err(ConstructionError::EvaderMisclassified);
        }

        for (index, pursuer) in pursuers.iter().enumerate() {
            let Piece::Pursuer(id) = pursuer.piece() else {
                return Err(ConstructionError::PursuerMisclassified(index));
            };
            if pursuers[..index].iter().any(|p| p.piece() == pursuer.piece()) {
                return Err(ConstructionError::DuplicatePursuer(id));
            }
            if pursuers[..index]
                .iter()
                .any(|p| p.location() == pursuer.location())
            {
                return Err(ConstructionError::SharedLocation(pursuer.location()));
            }
            for ticket in [Ticket::Secret, Ticket::Double] {
                if pursuer.has(ticket) {
                    return Err(ConstructionError::ForbiddenTicket(id, ticket));
                }
            }
        }

        debug!(
            "new game: {} pursuers, {} rounds",
            pursuers.len(),
            setup.schedule().len()
        );
        Ok(Self::rebuild(
            Arc::new(setup),
            ImHashSet::unit(Piece::Evader),
            TravelLog::new(),
            evader,
            pursuers,
            0,
            false,
        ))
    }

    /// Assemble a state and compute its derived caches: winner first, then
    /// the legal-move set (empty once terminal). `pursuers_skipped` marks
    /// that this state was reached by skipping an entire pursuer phase.
    #[allow(clippy::too_many_arguments)]
    fn rebuild(
        setup: Arc<GameSetup>,
        remaining: ImHashSet<Piece>,
        log: TravelLog,
        evader: Player,
        pursuers: Vec<Player>,
        round: usize,
        pursuers_skipped: bool,
    ) -> Self {
        let evader_turn = remaining.contains(&Piece::Evader);
        let winner = winner::evaluate(
            &setup,
            round,
            &evader,
            &pursuers,
            evader_turn,
            pursuers_skipped,
        );

        let moves = if !winner.is_empty() {
            ImHashSet::new()
        } else if evader_turn {
            legal_moves(&setup, round, &pursuers, &evader)
        } else {
            pursuers
                .iter()
                .filter(|p| remaining.contains(&p.piece()))
                .map(|p| legal_moves(&setup, round, &pursuers, p))
                .fold(ImHashSet::new(), |acc, set| acc.union(set))
        };

        Self {
            setup,
            remaining,
            log,
            evader,
            pursuers,
            moves,
            round,
            winner,
        }
    }

    /// Apply a legal move, returning the successor state.
    ///
    /// Fails without side effects when the game is over or the move is not
    /// in `available_moves`; `self` is untouched either way.
    pub fn advance(&self, mv: &Move) -> Result<Self, IllegalMove> {
        if !self.winner.is_empty() {
            return Err(IllegalMove::GameOver);
        }
        if !self.moves.contains(mv) {
            return Err(IllegalMove::NotAvailable(*mv));
        }

        let mut evader = self.evader;
        let mut pursuers = self.pursuers.clone();
        let mut log = self.log.clone();
        let schedule = self.setup.schedule();

        match *mv {
            Move::Single {
                piece: Piece::Evader,
                ticket,
                destination,
                ..
            } => {
                evader = evader.spend(ticket, 1).at(destination);
                log = log.record(ticket, destination, schedule);
            }
            Move::Double {
                piece: Piece::Evader,
                first,
                middle,
                second,
                destination,
            } => {
                evader = if first == second {
                    evader.spend(first, 2)
                } else {
                    evader.spend(first, 1).spend(second, 1)
                };
                evader = evader.at(destination);
                // Each leg's reveal flag is checked independently, at
                // rounds r and r + 1.
                log = log
                    .record(first, middle, schedule)
                    .record(second, destination, schedule);
            }
            Move::Single {
                piece: piece @ Piece::Pursuer(_),
                ticket,
                destination,
                ..
            } => {
                let Some(index) = pursuers.iter().position(|p| p.piece() == piece) else {
                    return Err(IllegalMove::NotAvailable(*mv));
                };
                pursuers[index] = pursuers[index].spend(ticket, 1).at(destination);
                // Spent pursuer tickets pool into the evader's inventory.
                evader = evader.gain(ticket, 1);
            }
            // Pursuers cannot hold double tickets, so the cache never
            // contains this shape.
            Move::Double {
                piece: Piece::Pursuer(_),
                ..
            } => return Err(IllegalMove::NotAvailable(*mv)),
        }

        let (remaining, round, pursuers_skipped) = self.next_turn(mv.piece(), &pursuers, &log);
        let next = Self::rebuild(
            Arc::clone(&self.setup),
            remaining,
            log,
            evader,
            pursuers,
            round,
            pursuers_skipped,
        );
        debug!(
            "{mv}: round {}, {} legal moves, {} winners",
            next.round,
            next.moves.len(),
            next.winner.len()
        );
        Ok(next)
    }

    /// Who is owed a move after `mover` played, the round index for that
    /// turn, and whether the entire pursuer phase was skipped. The round
    /// advances to the log length (one per evader leg) whenever the turn
    /// passes back to the evader.
    fn next_turn(
        &self,
        mover: Piece,
        pursuers: &[Player],
        log: &TravelLog,
    ) -> (ImHashSet<Piece>, usize, bool) {
        let mobile = |piece: Piece| {
            pursuers
                .iter()
                .find(|p| p.piece() == piece)
                .is_some_and(|p| !legal_moves(&self.setup, self.round, pursuers, p).is_empty())
        };

        let owed: ImHashSet<Piece> = if mover.is_evader() {
            // A pursuer with no legal move is excluded up front, consuming
            // no turn.
            pursuers
                .iter()
                .map(Player::piece)
                .filter(|&piece| mobile(piece))
                .collect()
        } else {
            // Occupancy shifted: drop any still-owed pursuer that just
            // became stuck.
            self.remaining
                .iter()
                .copied()
                .filter(|&piece| piece != mover && mobile(piece))
                .collect()
        };

        if owed.is_empty() {
            let skipped = mover.is_evader();
            (ImHashSet::unit(Piece::Evader), log.len(), skipped)
        } else {
            (owed, self.round, false)
        }
    }

    // === Observers ===

    /// The shared setup.
    #[must_use]
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// Every piece in the game.
    #[must_use]
    pub fn players(&self) -> ImHashSet<Piece> {
        std::iter::once(Piece::Evader)
            .chain(self.pursuers.iter().map(Player::piece))
            .collect()
    }

    /// A pursuer's current location, or `None` for an unknown ID. The
    /// evader's location is deliberately not reachable this way.
    #[must_use]
    pub fn pursuer_location(&self, id: PursuerId) -> Option<NodeId> {
        self.pursuers
            .iter()
            .find(|p| p.piece() == Piece::Pursuer(id))
            .map(Player::location)
    }

    /// The evader's true location.
    ///
    /// Hidden-information filtering is the presenting collaborator's job;
    /// the engine itself always knows the full position.
    #[must_use]
    pub fn evader_location(&self) -> NodeId {
        self.evader.location()
    }

    /// Read-only ticket view for any piece, or `None` for an unknown ID.
    #[must_use]
    pub fn tickets(&self, piece: Piece) -> Option<&Tickets> {
        if piece.is_evader() {
            return Some(self.evader.tickets());
        }
        self.pursuers
            .iter()
            .find(|p| p.piece() == piece)
            .map(|p| p.tickets())
    }

    /// The evader's travel log.
    #[must_use]
    pub fn travel_log(&self) -> &TravelLog {
        &self.log
    }

    /// Legal moves for whichever piece(s) are owed a move. Empty once the
    /// game is over.
    #[must_use]
    pub fn available_moves(&self) -> &ImHashSet<Move> {
        &self.moves
    }

    /// The winner set; empty while the game is ongoing.
    #[must_use]
    pub fn winner(&self) -> &ImHashSet<Piece> {
        &self.winner
    }

    /// Check whether the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.winner.is_empty()
    }

    /// Completed rounds (0-based round index of the evader's next leg).
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }
}
