//! Win-condition tests: capture, schedule exhaustion, stuck sides,
//! terminal-state behaviour, and randomized whole-game invariants.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use shadowchase::{
    GameSetup, GameState, IllegalMove, Move, NodeId, Piece, Player, PursuerId, Schedule, Ticket,
    Tickets, Transport, TransportGraph,
};

fn node(id: u16) -> NodeId {
    NodeId::new(id)
}

fn taxi_graph(edges: &[(u16, u16)]) -> TransportGraph {
    let mut graph = TransportGraph::new();
    for &(a, b) in edges {
        graph.connect(node(a), node(b), Transport::Taxi);
    }
    graph
}

fn taxis(n: u32) -> Tickets {
    Tickets::empty().with(Ticket::Taxi, n)
}

fn single(piece: Piece, source: u16, destination: u16) -> Move {
    Move::Single {
        piece,
        ticket: Ticket::Taxi,
        source: node(source),
        destination: node(destination),
    }
}

/// Triangle 1-2-3: evader at 1, one pursuer at 3, one taxi each.
fn triangle_game(rounds: usize) -> GameState {
    let graph = taxi_graph(&[(1, 2), (2, 3), (1, 3)]);
    let evader = Player::new(Piece::Evader, node(1), taxis(1));
    let pursuer = Player::new(Piece::pursuer(0), node(3), taxis(1));
    GameState::new(
        GameSetup::new(graph, Schedule::hidden(rounds)),
        evader,
        vec![pursuer],
    )
    .unwrap()
}

#[test]
fn test_capture_ends_the_game() {
    let state = triangle_game(5);
    let s1 = state.advance(&single(Piece::Evader, 1, 2)).unwrap();

    // The pursuer steps onto the evader's node: capture.
    let s2 = s1.advance(&single(Piece::pursuer(0), 3, 2)).unwrap();
    assert!(s2.is_terminal());
    assert_eq!(s2.winner().len(), 1);
    assert!(s2.winner().contains(&Piece::pursuer(0)));
    assert!(s2.available_moves().is_empty());
}

#[test]
fn test_terminal_state_rejects_every_advance() {
    let state = triangle_game(5);
    let captured = state
        .advance(&single(Piece::Evader, 1, 2))
        .unwrap()
        .advance(&single(Piece::pursuer(0), 3, 2))
        .unwrap();
    assert!(captured.is_terminal());

    for mv in [
        single(Piece::Evader, 2, 1),
        single(Piece::pursuer(0), 2, 3),
    ] {
        assert_eq!(captured.advance(&mv), Err(IllegalMove::GameOver));
    }
    // The terminal snapshot itself stays readable.
    assert_eq!(captured.evader_location(), node(2));
    assert_eq!(captured.pursuer_location(PursuerId::new(0)), Some(node(2)));
}

#[test]
fn test_capture_wins_for_every_pursuer_piece() {
    let graph = taxi_graph(&[(1, 2), (2, 3), (1, 3), (3, 4)]);
    let evader = Player::new(Piece::Evader, node(1), taxis(2));
    let pursuers = vec![
        Player::new(Piece::pursuer(0), node(3), taxis(2)),
        Player::new(Piece::pursuer(1), node(4), taxis(2)),
    ];
    let state = GameState::new(
        GameSetup::new(graph, Schedule::hidden(5)),
        evader,
        pursuers,
    )
    .unwrap();

    let s1 = state.advance(&single(Piece::Evader, 1, 2)).unwrap();
    let s2 = s1.advance(&single(Piece::pursuer(0), 3, 2)).unwrap();

    // The whole pursuer side shares the win, not just the capturer.
    assert_eq!(s2.winner().len(), 2);
    assert!(s2.winner().contains(&Piece::pursuer(0)));
    assert!(s2.winner().contains(&Piece::pursuer(1)));
}

#[test]
fn test_exhausted_schedule_wins_for_evader() {
    let state = triangle_game(1);
    let s1 = state.advance(&single(Piece::Evader, 1, 2)).unwrap();
    let s2 = s1.advance(&single(Piece::pursuer(0), 3, 1)).unwrap();

    // One round played, none left, no capture.
    assert!(s2.is_terminal());
    assert_eq!(s2.winner().len(), 1);
    assert!(s2.winner().contains(&Piece::Evader));
}

#[test]
fn test_cornered_evader_loses() {
    // Dead-end node 1; the pursuer holds the only exit.
    let graph = taxi_graph(&[(1, 2), (2, 3)]);
    let evader = Player::new(Piece::Evader, node(1), taxis(5));
    let pursuer = Player::new(Piece::pursuer(0), node(2), taxis(5));
    let state = GameState::new(
        GameSetup::new(graph, Schedule::hidden(5)),
        evader,
        vec![pursuer],
    )
    .unwrap();

    // It is the evader's turn and it has nowhere to go.
    assert!(state.is_terminal());
    assert!(state.winner().contains(&Piece::pursuer(0)));
    assert!(state.available_moves().is_empty());
}

#[test]
fn test_ticketless_evader_loses_on_its_turn() {
    let graph = taxi_graph(&[(1, 2), (3, 4)]);
    let evader = Player::new(Piece::Evader, node(1), Tickets::empty());
    let pursuer = Player::new(Piece::pursuer(0), node(3), taxis(5));
    let state = GameState::new(
        GameSetup::new(graph, Schedule::hidden(5)),
        evader,
        vec![pursuer],
    )
    .unwrap();

    assert!(state.is_terminal());
    assert!(state.winner().contains(&Piece::pursuer(0)));
}

#[test]
fn test_immobile_pursuer_side_loses_after_its_skipped_phase() {
    // The lone pursuer holds no tickets; once the evader has moved, a
    // whole pursuer phase passes without a move and the chase is off.
    let graph = taxi_graph(&[(1, 2), (5, 6)]);
    let evader = Player::new(Piece::Evader, node(1), taxis(5));
    let pursuer = Player::new(Piece::pursuer(0), node(5), Tickets::empty());
    let state = GameState::new(
        GameSetup::new(graph, Schedule::hidden(6)),
        evader,
        vec![pursuer],
    )
    .unwrap();

    // Not over yet: the pursuer phase has not been reached.
    assert!(!state.is_terminal());

    let s1 = state.advance(&single(Piece::Evader, 1, 2)).unwrap();
    assert!(s1.is_terminal());
    assert_eq!(s1.winner().len(), 1);
    assert!(s1.winner().contains(&Piece::Evader));
}

/// A ring of 8 nodes with taxi edges, bus chords across it, and one
/// underground diameter. Enough texture for doubles and secret rides.
fn ring_setup(schedule: Schedule) -> GameSetup {
    let mut graph = TransportGraph::new();
    for i in 1..=8u16 {
        let next = if i == 8 { 1 } else { i + 1 };
        graph.connect(node(i), node(next), Transport::Taxi);
    }
    graph.connect(node(1), node(4), Transport::Bus);
    graph.connect(node(2), node(6), Transport::Bus);
    graph.connect(node(5), node(8), Transport::Bus);
    graph.connect(node(3), node(7), Transport::Underground);
    GameSetup::new(graph, schedule)
}

/// Play whole games with random legal moves, asserting the state
/// invariants after every transition.
#[test]
fn test_random_playouts_hold_invariants() {
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let evader = Player::new(Piece::Evader, node(1), Tickets::evader_defaults());
        let pursuers = vec![
            Player::new(Piece::pursuer(0), node(4), Tickets::pursuer_defaults()),
            Player::new(Piece::pursuer(1), node(7), Tickets::pursuer_defaults()),
        ];
        let schedule = Schedule::standard24();
        let turn_bound = schedule.len() * (pursuers.len() + 1) + 1;
        let mut state =
            GameState::new(ring_setup(schedule), evader, pursuers).unwrap();

        let mut turns = 0;
        while !state.is_terminal() {
            assert!(turns < turn_bound, "seed {seed}: game did not terminate");
            let mv = *state
                .available_moves()
                .iter()
                .choose(&mut rng)
                .expect("non-terminal state with no moves");

            // Every cached move must be accepted.
            state = state.advance(&mv).unwrap();
            turns += 1;

            // No two pursuers ever share a location.
            let locations: Vec<_> = [PursuerId::new(0), PursuerId::new(1)]
                .iter()
                .map(|&id| state.pursuer_location(id).unwrap())
                .collect();
            assert_ne!(locations[0], locations[1], "seed {seed}");

            // Pursuer moves are ordinary singles.
            for pending in state.available_moves().iter() {
                if pending.piece().is_pursuer() {
                    assert!(!pending.is_double(), "seed {seed}");
                    assert!(
                        pending.tickets().iter().all(|t| !t.is_special()),
                        "seed {seed}"
                    );
                }
            }
        }

        assert!(!state.winner().is_empty(), "seed {seed}");
        assert!(state.available_moves().is_empty(), "seed {seed}");
    }
}
