//! The pursuit rules: legality over the shared board, and win evaluation.

use std::sync::Arc;

use tracing::debug;

use super::engine::{EscapeReason, GameResult, RulesEngine};
use super::legality::{legal_tickets, LegalTickets};
use crate::core::{ConfigError, PlayerId, RulesConfig, StationId};
use crate::graph::TransportGraph;
use crate::session::SessionState;

/// Rules for one board and one configuration.
///
/// Cheap to clone: the board is shared.
#[derive(Clone, Debug)]
pub struct PursuitRules {
    graph: Arc<TransportGraph>,
    config: RulesConfig,
}

impl PursuitRules {
    /// Validate the configuration and bind it to a board.
    pub fn new(graph: Arc<TransportGraph>, config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { graph, config })
    }
}

impl RulesEngine for PursuitRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn graph(&self) -> &TransportGraph {
        &self.graph
    }

    fn legal_tickets(&self, state: &SessionState, player: PlayerId, destination: StationId) -> LegalTickets {
        let (Some(wallet), Some(origin)) = (state.ledger().wallet(player), state.location(player)) else {
            return LegalTickets::none();
        };

        let tickets = legal_tickets(&self.graph, player, wallet, origin, destination, &state.occupancy());
        debug!(%player, %origin, %destination, options = tickets.len(), "legal tickets");
        tickets
    }

    /// Checks, first match wins:
    /// 1. Capture: a Tracker shares the Fugitive's station
    /// 2. Stalemate: no Tracker has a legal move
    /// 3. Clock: the round counter is past the round limit
    fn is_terminal(&self, state: &SessionState) -> Option<GameResult> {
        let fugitive = state.fugitive()?;
        let station = state.location(fugitive)?;

        let trackers: Vec<PlayerId> = state.trackers().collect();

        let captors: Vec<PlayerId> = trackers
            .iter()
            .copied()
            .filter(|&t| state.location(t) == Some(station))
            .collect();
        if !captors.is_empty() {
            return Some(GameResult::Captured {
                station,
                trackers: captors,
            });
        }

        if !trackers.is_empty() && trackers.iter().all(|&t| !self.can_move(state, t)) {
            return Some(GameResult::Escaped(EscapeReason::TrackersStuck));
        }

        if state.round() > self.config.max_rounds {
            return Some(GameResult::Escaped(EscapeReason::RoundLimit));
        }

        None
    }
}
