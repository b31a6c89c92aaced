//! Shared fixtures for the session integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use pursuit_engine::{
    BeginReport, Edge, PlayerId, PursuitRules, Role, RoleSelection, RulesConfig, RulesEngine, SessionController, StationId,
    TransportGraph, TransportMode,
};

pub const FUGITIVE: PlayerId = PlayerId(100);

pub fn tracker(i: u64) -> PlayerId {
    PlayerId(200 + i)
}

/// Every pair of stations joined by a short edge.
pub fn complete_graph(stations: u32) -> Arc<TransportGraph> {
    complete_graph_with(stations, &[TransportMode::Short])
}

/// Every pair of stations joined once per listed mode.
pub fn complete_graph_with(stations: u32, modes: &[TransportMode]) -> Arc<TransportGraph> {
    let mut edges = Vec::new();
    for a in 1..=stations {
        for b in (a + 1)..=stations {
            for &mode in modes {
                edges.push(Edge::new(StationId(a), StationId(b), mode));
            }
        }
    }
    Arc::new(TransportGraph::from_edges(edges).unwrap())
}

/// Stations 1..=n on a ring of short edges.
pub fn ring_graph(stations: u32) -> Arc<TransportGraph> {
    let edges = (1..=stations)
        .map(|a| Edge::new(StationId(a), StationId(a % stations + 1), TransportMode::Short))
        .collect();
    Arc::new(TransportGraph::from_edges(edges).unwrap())
}

/// Stations 1..=n in a line of short edges.
pub fn line_graph(stations: u32) -> Arc<TransportGraph> {
    let edges = (1..stations)
        .map(|a| Edge::new(StationId(a), StationId(a + 1), TransportMode::Short))
        .collect();
    Arc::new(TransportGraph::from_edges(edges).unwrap())
}

/// First seed in `0..10_000` whose opening placement puts the Fugitive and
/// Trackers `0..` on exactly `stations`, in that order.
pub fn started_at(
    graph: Arc<TransportGraph>,
    config: RulesConfig,
    stations: &[StationId],
) -> (SessionController, BeginReport) {
    let trackers = stations.len() as u64 - 1;
    (0..10_000u64)
        .find_map(|seed| {
            let (session, report) = started(Arc::clone(&graph), config.clone().with_seed(seed), trackers);
            let placed: Vec<StationId> = std::iter::once(FUGITIVE)
                .chain((0..trackers).map(tracker))
                .map(|p| location(&session, p))
                .collect();
            (placed == stations).then_some((session, report))
        })
        .unwrap()
}

/// A quiet config: long enough game, no reveal rounds.
pub fn config() -> RulesConfig {
    RulesConfig::default().with_reveal_rounds([]).with_seed(7)
}

pub fn controller(graph: Arc<TransportGraph>, config: RulesConfig) -> SessionController {
    SessionController::new(PursuitRules::new(graph, config).unwrap())
}

/// Join the Fugitive and `trackers` Trackers, pick roles and begin.
pub fn started(graph: Arc<TransportGraph>, config: RulesConfig, trackers: u64) -> (SessionController, BeginReport) {
    let session = controller(graph, config);
    seat(&session, trackers);
    let report = session.begin().unwrap();
    (session, report)
}

pub fn seat(session: &SessionController, trackers: u64) {
    session.join(FUGITIVE).unwrap();
    session
        .assign_role(FUGITIVE, RoleSelection::Chose(Role::Fugitive))
        .unwrap();
    for i in 0..trackers {
        session.join(tracker(i)).unwrap();
        session
            .assign_role(tracker(i), RoleSelection::Chose(Role::Tracker))
            .unwrap();
    }
}

pub fn location(session: &SessionController, player: PlayerId) -> StationId {
    session.inspect(|state| state.location(player)).unwrap()
}

/// Lowest station nobody stands on.
pub fn free_station(session: &SessionController) -> StationId {
    let station_count = session.rules().graph().station_count();
    session.inspect(|state| {
        (1..=station_count)
            .map(StationId)
            .find(|&s| state.roster().iter().all(|&p| state.location(p) != Some(s)))
            .unwrap()
    })
}
