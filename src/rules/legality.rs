//! Move legality: which tickets may pay for a given hop.
//!
//! ## Algorithm
//!
//! 1. Every ordinary mode that connects origin to destination and that the
//!    mover still holds a ticket for.
//! 2. For the Fugitive, a wildcard is added if step 1 produced at least one
//!    mode and a wildcard is left. A wildcard never opens a connection of
//!    its own; it only hides which mode was ridden.
//! 3. Occupancy: a Tracker may not land on a station held by another
//!    Tracker. The Fugitive's station is never blocked (that is how capture
//!    happens), and the Fugitive is not restricted by occupancy.
//!
//! An empty result means "no legal move to that destination", not an error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, Role, StationId, Ticket, TransportMode};
use crate::graph::TransportGraph;
use crate::tickets::Wallet;

/// Tickets that can legally pay for one hop, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalTickets(SmallVec<[Ticket; 4]>);

impl LegalTickets {
    /// No legal ticket.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, ticket: Ticket) -> bool {
        self.0.contains(&ticket)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Ticket] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Ticket> + '_ {
        self.0.iter().copied()
    }

    /// Ordinary modes in the set, wildcard excluded.
    pub fn modes(&self) -> impl Iterator<Item = TransportMode> + '_ {
        self.0.iter().filter_map(|t| t.mode())
    }
}

impl FromIterator<Ticket> for LegalTickets {
    fn from_iter<I: IntoIterator<Item = Ticket>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Where every player stands, as seen by the legality check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    fugitive: Option<(PlayerId, StationId)>,
    trackers: SmallVec<[(PlayerId, StationId); 4]>,
}

impl Occupancy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a player's station.
    pub fn place(&mut self, player: PlayerId, role: Role, station: StationId) {
        match role {
            Role::Fugitive => self.fugitive = Some((player, station)),
            Role::Tracker => self.trackers.push((player, station)),
        }
    }

    #[must_use]
    pub fn with(mut self, player: PlayerId, role: Role, station: StationId) -> Self {
        self.place(player, role, station);
        self
    }

    /// Station of the Fugitive, if placed.
    #[must_use]
    pub fn fugitive_station(&self) -> Option<StationId> {
        self.fugitive.map(|(_, station)| station)
    }

    /// Every placed Tracker and its station.
    pub fn trackers(&self) -> impl Iterator<Item = (PlayerId, StationId)> + '_ {
        self.trackers.iter().copied()
    }

    /// Check if the occupancy rule forbids `mover` from landing on `destination`.
    #[must_use]
    pub fn blocks(&self, mover: PlayerId, role: Role, destination: StationId) -> bool {
        role == Role::Tracker
            && self
                .trackers
                .iter()
                .any(|&(player, station)| player != mover && station == destination)
    }
}

/// Compute the tickets that legally pay for `origin -> destination`.
#[must_use]
pub fn legal_tickets(
    graph: &TransportGraph,
    mover: PlayerId,
    wallet: &Wallet,
    origin: StationId,
    destination: StationId,
    occupancy: &Occupancy,
) -> LegalTickets {
    let role = wallet.role();
    if occupancy.blocks(mover, role, destination) {
        return LegalTickets::none();
    }

    let mut tickets: LegalTickets = TransportMode::ALL
        .into_iter()
        .filter(|&mode| graph.is_connected(origin, destination, mode))
        .map(Ticket::Transit)
        .filter(|&ticket| wallet.balance(ticket) > 0)
        .collect();

    if role == Role::Fugitive && !tickets.is_empty() && wallet.balance(Ticket::Wildcard) > 0 {
        tickets.0.push(Ticket::Wildcard);
    }

    tickets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketCounts;
    use crate::graph::Edge;

    const FUGITIVE: PlayerId = PlayerId(1);
    const TRACKER_A: PlayerId = PlayerId(2);
    const TRACKER_B: PlayerId = PlayerId(3);

    fn graph() -> TransportGraph {
        TransportGraph::from_edges(vec![
            Edge::new(StationId(1), StationId(2), TransportMode::Short),
            Edge::new(StationId(1), StationId(2), TransportMode::Medium),
            Edge::new(StationId(2), StationId(5), TransportMode::Short),
            Edge::new(StationId(1), StationId(5), TransportMode::Long),
        ])
        .unwrap()
    }

    fn tracker(tickets: TicketCounts) -> Wallet {
        Wallet::Tracker { tickets }
    }

    fn fugitive(tickets: TicketCounts, wildcards: u32) -> Wallet {
        Wallet::Fugitive { tickets, wildcards }
    }

    #[test]
    fn test_modes_need_edge_and_balance() {
        let graph = graph();
        let wallet = tracker(TicketCounts::new(1, 0, 4));
        let legal = legal_tickets(&graph, TRACKER_A, &wallet, StationId(1), StationId(2), &Occupancy::new());
        assert_eq!(legal.as_slice(), &[Ticket::SHORT]);

        let none = legal_tickets(&graph, TRACKER_A, &wallet, StationId(2), StationId(3), &Occupancy::new());
        assert!(none.is_empty());
    }

    #[test]
    fn test_fugitive_gets_wildcard_after_ordinary_modes() {
        let graph = graph();
        let wallet = fugitive(TicketCounts::uniform(999), 2);
        let legal = legal_tickets(&graph, FUGITIVE, &wallet, StationId(1), StationId(2), &Occupancy::new());
        assert_eq!(legal.as_slice(), &[Ticket::SHORT, Ticket::MEDIUM, Ticket::Wildcard]);
        assert_eq!(legal.modes().count(), 2);
    }

    #[test]
    fn test_no_wildcard_without_balance() {
        let graph = graph();
        let wallet = fugitive(TicketCounts::uniform(999), 0);
        let legal = legal_tickets(&graph, FUGITIVE, &wallet, StationId(1), StationId(5), &Occupancy::new());
        assert_eq!(legal.as_slice(), &[Ticket::LONG]);
    }

    #[test]
    fn test_wildcard_cannot_replace_missing_balance() {
        let graph = TransportGraph::from_edges(vec![Edge::new(StationId(1), StationId(2), TransportMode::Short)]).unwrap();
        let wallet = fugitive(TicketCounts::new(0, 5, 5), 1);
        let legal = legal_tickets(&graph, FUGITIVE, &wallet, StationId(1), StationId(2), &Occupancy::new());
        assert!(legal.is_empty());
    }

    #[test]
    fn test_wildcard_cannot_open_missing_edge() {
        let graph = graph();
        let wallet = fugitive(TicketCounts::uniform(999), 5);
        let legal = legal_tickets(&graph, FUGITIVE, &wallet, StationId(2), StationId(4), &Occupancy::new());
        assert!(legal.is_empty());
    }

    #[test]
    fn test_tracker_blocked_by_teammate() {
        let graph = graph();
        let occupancy = Occupancy::new()
            .with(TRACKER_A, Role::Tracker, StationId(5))
            .with(TRACKER_B, Role::Tracker, StationId(2))
            .with(FUGITIVE, Role::Fugitive, StationId(1));
        let wallet = tracker(TicketCounts::new(10, 8, 4));

        let legal = legal_tickets(&graph, TRACKER_B, &wallet, StationId(2), StationId(5), &occupancy);
        assert!(legal.is_empty());
        assert!(occupancy.blocks(TRACKER_B, Role::Tracker, StationId(5)));
    }

    #[test]
    fn test_tracker_may_land_on_fugitive() {
        let graph = graph();
        let occupancy = Occupancy::new()
            .with(TRACKER_A, Role::Tracker, StationId(2))
            .with(FUGITIVE, Role::Fugitive, StationId(1));
        let wallet = tracker(TicketCounts::new(10, 8, 4));

        let legal = legal_tickets(&graph, TRACKER_A, &wallet, StationId(2), StationId(1), &occupancy);
        assert_eq!(legal.as_slice(), &[Ticket::SHORT, Ticket::MEDIUM]);
        assert_eq!(occupancy.fugitive_station(), Some(StationId(1)));
    }

    #[test]
    fn test_fugitive_not_restricted_by_occupancy() {
        let graph = graph();
        let occupancy = Occupancy::new()
            .with(TRACKER_A, Role::Tracker, StationId(2))
            .with(FUGITIVE, Role::Fugitive, StationId(1));
        let wallet = fugitive(TicketCounts::uniform(999), 0);

        assert!(!occupancy.blocks(FUGITIVE, Role::Fugitive, StationId(2)));
        let legal = legal_tickets(&graph, FUGITIVE, &wallet, StationId(1), StationId(2), &occupancy);
        assert!(!legal.is_empty());
    }
}
