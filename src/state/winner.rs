//! Terminal and win-condition evaluation.
//!
//! A pure function of the post-move position. The winner set is cached on
//! every `GameState` at construction; an empty set means the game is
//! ongoing.

use im::HashSet as ImHashSet;

use crate::board::GameSetup;
use crate::core::{Piece, Player};
use crate::moves::legal_moves;

/// Evaluate the winner set for a position.
///
/// `pursuers_skipped` marks a state reached by handing the turn straight
/// back to the evader because not one pursuer could move: a whole pursuer
/// phase passed without a move, and capture has become impossible. A
/// pursuer side that merely ran dry between rounds is not beaten until a
/// full phase confirms it, so the flag comes from the transition, not from
/// the fields of the state itself.
///
/// Precedence: capture, then schedule exhaustion, then a fully skipped
/// pursuer phase, then a stuck evader.
pub(crate) fn evaluate(
    setup: &GameSetup,
    round: usize,
    evader: &Player,
    pursuers: &[Player],
    evader_turn: bool,
    pursuers_skipped: bool,
) -> ImHashSet<Piece> {
    if pursuers.iter().any(|p| p.location() == evader.location()) {
        return pursuer_side(pursuers);
    }

    if evader_turn {
        if setup.schedule().remaining(round) == 0 {
            return evader_side();
        }
        if pursuers_skipped {
            return evader_side();
        }
        if legal_moves(setup, round, pursuers, evader).is_empty() {
            return pursuer_side(pursuers);
        }
    }

    ImHashSet::new()
}

fn evader_side() -> ImHashSet<Piece> {
    ImHashSet::unit(Piece::Evader)
}

fn pursuer_side(pursuers: &[Player]) -> ImHashSet<Piece> {
    pursuers.iter().map(Player::piece).collect()
}
