//! Property tests: ticket conservation, turn rotation, Fugitive-first order,
//! turn skipping, occupancy exclusion and wildcard gating.

mod common;

use std::collections::HashMap;

use common::{complete_graph_with, config, started, FUGITIVE};
use proptest::prelude::*;
use proptest::sample::Index;
use pursuit_engine::{
    legal_tickets, Edge, Occupancy, PlayerId, Role, StationId, Ticket, TicketCounts, TransportGraph, TransportMode,
    TurnScheduler, Wallet,
};

const TICKETS: [Ticket; 4] = [Ticket::SHORT, Ticket::MEDIUM, Ticket::LONG, Ticket::Wildcard];

fn mode_strategy() -> impl Strategy<Value = TransportMode> {
    prop_oneof![
        Just(TransportMode::Short),
        Just(TransportMode::Medium),
        Just(TransportMode::Long),
    ]
}

fn edge_strategy(stations: u32) -> impl Strategy<Value = Edge> {
    (1..=stations, 1..=stations, mode_strategy())
        .prop_filter("no self-loops", |(a, b, _)| a != b)
        .prop_map(|(a, b, mode)| Edge::new(StationId(a), StationId(b), mode))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn ticket_balances_drop_by_exactly_the_moves_made(
        seed in any::<u64>(),
        trackers in 1u64..=4,
        choices in prop::collection::vec((any::<Index>(), any::<Index>()), 1..80),
    ) {
        let graph = complete_graph_with(15, &TransportMode::ALL);
        let (session, _) = started(graph, config().with_seed(seed), trackers);

        let initial: HashMap<PlayerId, Wallet> = session.inspect(|state| {
            state
                .roster()
                .iter()
                .map(|&p| (p, *state.ledger().wallet(p).unwrap()))
                .collect()
        });
        let players = initial.len() as u32;
        let mut used: HashMap<PlayerId, Vec<Ticket>> = HashMap::new();
        // Turns taken so far, skipped ones included.
        let mut turns = 0u32;

        for (pick_move, pick_ticket) in choices {
            let Some(current) = session.snapshot().current_player() else { break };
            let moves = session.possible_moves(current).unwrap();
            if moves.is_empty() {
                break;
            }
            let (destination, options) = pick_move.get(&moves);
            let ticket = *pick_ticket.get(options.as_slice());

            let report = session.submit_move(current, *destination, ticket).unwrap();
            used.entry(current).or_default().push(ticket);
            turns += 1 + report.skipped.len() as u32;
            if report.is_game_over() {
                break;
            }

            let state = session.snapshot();
            prop_assert_eq!(state.round(), 1 + turns / players);
            for skipped in &report.skipped {
                prop_assert!(session.possible_moves(*skipped).unwrap().is_empty());
            }
            prop_assert_eq!(state.turn_order()[0], FUGITIVE);
            if let Some(next) = report.next_turn {
                if next.new_round {
                    prop_assert_eq!(next.next, FUGITIVE);
                }
            }

            for (player, start) in &initial {
                let wallet = state.ledger().wallet(*player).unwrap();
                let spent = used.get(player).map(Vec::as_slice).unwrap_or(&[]);
                for ticket in TICKETS {
                    let uses = spent.iter().filter(|&&t| t == ticket).count() as u32;
                    prop_assert_eq!(wallet.balance(ticket), start.balance(ticket) - uses);
                }
            }
        }
    }

    #[test]
    fn scheduler_rotation_counts_rounds(trackers in 1u64..=4, rounds in 1u32..10) {
        let tracker_ids: Vec<PlayerId> = (0..trackers).map(|i| PlayerId(10 + i)).collect();
        let mut scheduler = TurnScheduler::new(FUGITIVE, tracker_ids);
        let n = scheduler.len();

        for round in 1..=rounds {
            prop_assert_eq!(scheduler.round(), round);
            prop_assert_eq!(scheduler.current(), Some(FUGITIVE));
            for step in 0..n {
                let advance = scheduler.advance().unwrap();
                prop_assert_eq!(advance.new_round, step == n - 1);
                prop_assert!(!advance.repaired);
            }
        }
        prop_assert_eq!(scheduler.round(), rounds + 1);
    }

    #[test]
    fn trackers_never_target_teammates(
        placement in prop::sample::subsequence((1u32..=12).collect::<Vec<_>>(), 3),
        order in Just(vec![0usize, 1, 2]).prop_shuffle(),
    ) {
        let graph = complete_graph_with(12, &TransportMode::ALL);
        let stations: Vec<StationId> = order.iter().map(|&i| StationId(placement[i])).collect();
        let (mover, teammate, fugitive) = (PlayerId(1), PlayerId(2), PlayerId(3));
        let occupancy = Occupancy::new()
            .with(mover, Role::Tracker, stations[0])
            .with(teammate, Role::Tracker, stations[1])
            .with(fugitive, Role::Fugitive, stations[2]);
        let wallet = Wallet::Tracker { tickets: TicketCounts::new(10, 8, 4) };

        let blocked = legal_tickets(&graph, mover, &wallet, stations[0], stations[1], &occupancy);
        prop_assert!(blocked.is_empty());

        let capture = legal_tickets(&graph, mover, &wallet, stations[0], stations[2], &occupancy);
        prop_assert_eq!(capture.len(), 3);
    }

    #[test]
    fn wildcard_needs_an_ordinary_mode(
        edges in prop::collection::vec(edge_strategy(8), 1..20),
        short in 0u32..3,
        medium in 0u32..3,
        long in 0u32..3,
        wildcards in 0u32..3,
    ) {
        let graph = TransportGraph::from_edges(edges).unwrap();
        let wallet = Wallet::Fugitive { tickets: TicketCounts::new(short, medium, long), wildcards };
        let count = graph.station_count();

        for origin in StationId::all(count) {
            for destination in StationId::all(count) {
                let legal = legal_tickets(&graph, FUGITIVE, &wallet, origin, destination, &Occupancy::new());
                if legal.contains(Ticket::Wildcard) {
                    prop_assert!(legal.modes().count() > 0);
                    prop_assert!(wildcards > 0);
                }
                for mode in legal.modes() {
                    prop_assert!(graph.is_connected(origin, destination, mode));
                    prop_assert!(wallet.balance(Ticket::Transit(mode)) > 0);
                }
            }
        }
    }
}
