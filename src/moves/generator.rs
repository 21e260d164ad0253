//! Legal-move enumeration.
//!
//! Pure and deterministic: a function of the setup, the round index, the
//! pursuer occupancy snapshot, and the mover's own position and tickets.
//! Unaffordable or blocked legs simply produce no moves, never errors.

use im::HashSet as ImHashSet;

use crate::board::{GameSetup, NodeId};
use crate::core::{Player, Ticket};
use crate::moves::Move;

/// Enumerate every legal move for `mover` in the given position.
///
/// Single moves go to unblocked adjacent nodes, one per affordable ticket
/// kind on the edge, plus a secret variant per destination while the mover
/// holds secret tickets. Double moves are composed from two such legs when
/// the mover holds a double ticket and at least two schedule rounds remain
/// from `round`.
///
/// Occupancy exclusion is pursuer-vs-pursuer only: a node held by a
/// pursuer blocks everyone, while the evader's location never blocks:
/// a pursuer landing on it is a capture, resolved by win evaluation
/// rather than move rejection.
#[must_use]
pub fn legal_moves(
    setup: &GameSetup,
    round: usize,
    pursuers: &[Player],
    mover: &Player,
) -> ImHashSet<Move> {
    let mut moves = ImHashSet::new();
    let source = mover.location();
    let first_legs = leg_options(setup, pursuers, mover, source);

    for &(ticket, destination) in &first_legs {
        moves.insert(Move::Single {
            piece: mover.piece(),
            ticket,
            source,
            destination,
        });
    }

    // A double needs the capability ticket and room for both legs in the
    // schedule. The double ticket gates the move; only the leg tickets are
    // priced.
    if mover.has(Ticket::Double) && setup.schedule().remaining(round) >= 2 {
        for &(first, middle) in &first_legs {
            for (second, destination) in leg_options(setup, pursuers, mover, middle) {
                // Both legs draw from one pool: reusing the first leg's
                // kind takes two of it, any other kind takes one.
                let needed = if second == first { 2 } else { 1 };
                if mover.has_at_least(second, needed) {
                    moves.insert(Move::Double {
                        piece: mover.piece(),
                        first,
                        middle,
                        second,
                        destination,
                    });
                }
            }
        }
    }

    moves
}

/// Affordable (ticket, destination) pairs for one leg out of `source`.
///
/// Both legs of a double are priced against the same pre-move occupancy:
/// the first leg does not relocate anyone.
fn leg_options(
    setup: &GameSetup,
    pursuers: &[Player],
    mover: &Player,
    source: NodeId,
) -> Vec<(Ticket, NodeId)> {
    let mut legs = Vec::new();
    for destination in setup.graph().adjacent(source) {
        if pursuers.iter().any(|p| p.location() == destination) {
            continue;
        }
        for transport in setup.graph().transports(source, destination) {
            if mover.has(transport.ticket()) {
                legs.push((transport.ticket(), destination));
            }
        }
        if mover.has(Ticket::Secret) {
            legs.push((Ticket::Secret, destination));
        }
    }
    legs
}
