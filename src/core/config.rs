//! Rules configuration.
//!
//! `RulesConfig` carries every tunable constant of a session: roster cap,
//! round limit, starting ticket balances, reveal rounds and the RNG seed.
//! Defaults reproduce the classic board setup. Hosts can override them with
//! the `with_*` builders or load a JSON document with `RulesConfig::from_json`;
//! missing JSON fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use super::ticket::TicketCounts;

/// Errors raised by an invalid configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("max_players must be at least 2 (got {0})")]
    TooFewPlayers(usize),
    #[error("max_rounds must be at least 1")]
    NoRounds,
    #[error("recent_ticket_window must be at least 1")]
    EmptyTicketWindow,
    #[error("reveal round {round} is outside 1..={max_rounds}")]
    RevealRoundOutOfRange { round: u32, max_rounds: u32 },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete rules configuration for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Roster cap, Fugitive included.
    pub max_players: usize,

    /// Last playable round. The Fugitive wins once the round counter passes it.
    pub max_rounds: u32,

    /// Starting balances for each Tracker.
    pub tracker_tickets: TicketCounts,

    /// Starting balances for the Fugitive. Large enough to never run out.
    pub fugitive_tickets: TicketCounts,

    /// Starting wildcard balance for the Fugitive.
    pub fugitive_wildcards: u32,

    /// Rounds on which the Fugitive's location is disclosed to everyone.
    pub reveal_rounds: Vec<u32>,

    /// How many recent Fugitive tickets stay in the public ticket log.
    pub recent_ticket_window: usize,

    /// Seed for random placement.
    pub seed: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_players: 5,
            max_rounds: 24,
            tracker_tickets: TicketCounts::new(10, 8, 4),
            fugitive_tickets: TicketCounts::uniform(999),
            fugitive_wildcards: 5,
            reveal_rounds: vec![3, 8, 13, 18, 24],
            recent_ticket_window: 5,
            seed: 0x5EED,
        }
    }
}

impl RulesConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values no session can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_players < 2 {
            return Err(ConfigError::TooFewPlayers(self.max_players));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.recent_ticket_window == 0 {
            return Err(ConfigError::EmptyTicketWindow);
        }
        if let Some(&round) = self
            .reveal_rounds
            .iter()
            .find(|&&r| r == 0 || r > self.max_rounds)
        {
            return Err(ConfigError::RevealRoundOutOfRange {
                round,
                max_rounds: self.max_rounds,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub fn with_tracker_tickets(mut self, tickets: TicketCounts) -> Self {
        self.tracker_tickets = tickets;
        self
    }

    #[must_use]
    pub fn with_fugitive_tickets(mut self, tickets: TicketCounts, wildcards: u32) -> Self {
        self.fugitive_tickets = tickets;
        self.fugitive_wildcards = wildcards;
        self
    }

    #[must_use]
    pub fn with_reveal_rounds(mut self, rounds: impl IntoIterator<Item = u32>) -> Self {
        self.reveal_rounds = rounds.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_recent_ticket_window(mut self, window: usize) -> Self {
        self.recent_ticket_window = window;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Maximum number of Trackers a session can seat.
    #[must_use]
    pub fn max_trackers(&self) -> usize {
        self.max_players.saturating_sub(1)
    }

    /// Check if `round` discloses the Fugitive's location.
    #[must_use]
    pub fn is_reveal_round(&self, round: u32) -> bool {
        self.reveal_rounds.contains(&round)
    }
}
