//! Rules engine trait.
//!
//! The session calls into a `RulesEngine` for the two questions it cannot
//! answer from its own data:
//! - Which tickets legally pay for a hop
//! - Whether the game is over
//!
//! ## Implementation Notes
//!
//! - `legal_tickets`: Return an empty set if the player cannot reach the
//!   destination; emptiness is not an error
//! - `is_terminal`: Return `None` while the game continues
//! - Both must be pure with respect to the session state

use serde::{Deserialize, Serialize};

use super::legality::LegalTickets;
use crate::core::{PlayerId, Role, RulesConfig, StationId};
use crate::graph::TransportGraph;
use crate::session::SessionState;

/// Why the Fugitive won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscapeReason {
    /// No Tracker has a legal move left.
    TrackersStuck,
    /// The round counter passed the round limit.
    RoundLimit,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Trackers win: at least one of them shares the Fugitive's station.
    Captured {
        station: StationId,
        trackers: Vec<PlayerId>,
    },
    /// The Fugitive wins.
    Escaped(EscapeReason),
}

impl GameResult {
    /// Role that won.
    #[must_use]
    pub fn winner(&self) -> Role {
        match self {
            GameResult::Captured { .. } => Role::Tracker,
            GameResult::Escaped(_) => Role::Fugitive,
        }
    }

    /// Check if a role won.
    #[must_use]
    pub fn is_winner(&self, role: Role) -> bool {
        self.winner() == role
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Captured { station, .. } => {
                write!(f, "Trackers win: the Fugitive was caught at {}", station)
            }
            GameResult::Escaped(EscapeReason::TrackersStuck) => {
                write!(f, "Fugitive wins: all trackers are stuck")
            }
            GameResult::Escaped(EscapeReason::RoundLimit) => {
                write!(f, "Fugitive wins: survived the clock")
            }
        }
    }
}

/// Rules engine trait.
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Get the board.
    fn graph(&self) -> &TransportGraph;

    /// Tickets that legally pay for moving `player` to `destination`.
    fn legal_tickets(&self, state: &SessionState, player: PlayerId, destination: StationId) -> LegalTickets;

    /// Check if the game is over.
    fn is_terminal(&self, state: &SessionState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Every destination `player` can legally reach, with its tickets.
    fn legal_moves(&self, state: &SessionState, player: PlayerId) -> Vec<(StationId, LegalTickets)> {
        let Some(origin) = state.location(player) else {
            return Vec::new();
        };

        self.graph()
            .reachable(origin)
            .into_iter()
            .filter_map(|destination| {
                let tickets = self.legal_tickets(state, player, destination);
                (!tickets.is_empty()).then_some((destination, tickets))
            })
            .collect()
    }

    /// Check if `player` has at least one legal move.
    fn can_move(&self, state: &SessionState, player: PlayerId) -> bool {
        let Some(origin) = state.location(player) else {
            return false;
        };

        self.graph()
            .reachable(origin)
            .into_iter()
            .any(|destination| !self.legal_tickets(state, player, destination).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_winner() {
        let caught = GameResult::Captured {
            station: StationId(4),
            trackers: vec![PlayerId(2)],
        };
        assert_eq!(caught.winner(), Role::Tracker);
        assert!(caught.is_winner(Role::Tracker));
        assert!(!caught.is_winner(Role::Fugitive));

        let escaped = GameResult::Escaped(EscapeReason::RoundLimit);
        assert!(escaped.is_winner(Role::Fugitive));
    }

    #[test]
    fn test_game_result_display() {
        let caught = GameResult::Captured {
            station: StationId(4),
            trackers: vec![PlayerId(2)],
        };
        assert_eq!(caught.to_string(), "Trackers win: the Fugitive was caught at Station 4");
        assert_eq!(
            GameResult::Escaped(EscapeReason::TrackersStuck).to_string(),
            "Fugitive wins: all trackers are stuck"
        );
    }
}
