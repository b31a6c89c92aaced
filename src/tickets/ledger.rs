//! Per-player ticket balances.
//!
//! Each seated player owns a `Wallet` whose shape depends on the role: only
//! the Fugitive's wallet has a wildcard counter. Balances never go negative;
//! `consume` refuses instead of underflowing.
//!
//! Callers gate moves with `has_balance` (through the legality check)
//! before committing; a failing `consume` therefore indicates a caller bug
//! and is logged.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{PlayerId, Role, RulesConfig, Ticket, TicketCounts};

/// Errors from ticket consumption.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("{0} has no wallet")]
    UnknownPlayer(PlayerId),
    #[error("{player} has no {ticket} tickets left")]
    InsufficientTickets { player: PlayerId, ticket: Ticket },
    #[error("{0} cannot use wildcard tickets")]
    WildcardNotAllowed(PlayerId),
}

/// Ticket balances for one player, shaped by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wallet {
    Fugitive { tickets: TicketCounts, wildcards: u32 },
    Tracker { tickets: TicketCounts },
}

impl Wallet {
    /// Starting wallet for a role.
    #[must_use]
    pub fn starting(role: Role, config: &RulesConfig) -> Self {
        match role {
            Role::Fugitive => Wallet::Fugitive {
                tickets: config.fugitive_tickets,
                wildcards: config.fugitive_wildcards,
            },
            Role::Tracker => Wallet::Tracker {
                tickets: config.tracker_tickets,
            },
        }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Wallet::Fugitive { .. } => Role::Fugitive,
            Wallet::Tracker { .. } => Role::Tracker,
        }
    }

    /// Ordinary ticket balances.
    #[must_use]
    pub fn tickets(&self) -> TicketCounts {
        match self {
            Wallet::Fugitive { tickets, .. } | Wallet::Tracker { tickets } => *tickets,
        }
    }

    /// Wildcard balance; `None` for roles without wildcards.
    #[must_use]
    pub fn wildcards(&self) -> Option<u32> {
        match self {
            Wallet::Fugitive { wildcards, .. } => Some(*wildcards),
            Wallet::Tracker { .. } => None,
        }
    }

    /// Balance for a ticket kind. Wildcards count as zero for Trackers.
    #[must_use]
    pub fn balance(&self, ticket: Ticket) -> u32 {
        match ticket {
            Ticket::Transit(mode) => self.tickets().get(mode),
            Ticket::Wildcard => self.wildcards().unwrap_or(0),
        }
    }

    fn counter_mut(&mut self, ticket: Ticket) -> Option<&mut u32> {
        match (self, ticket) {
            (Wallet::Fugitive { tickets, .. } | Wallet::Tracker { tickets }, Ticket::Transit(mode)) => {
                Some(tickets.get_mut(mode))
            }
            (Wallet::Fugitive { wildcards, .. }, Ticket::Wildcard) => Some(wildcards),
            (Wallet::Tracker { .. }, Ticket::Wildcard) => None,
        }
    }
}

/// Wallets for every seated player.
#[derive(Clone, Debug, Default)]
pub struct TicketLedger {
    wallets: FxHashMap<PlayerId, Wallet>,
}

impl TicketLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `player` the starting wallet for `role`, replacing any previous one.
    pub fn initialize(&mut self, player: PlayerId, role: Role, config: &RulesConfig) {
        self.wallets.insert(player, Wallet::starting(role, config));
    }

    #[must_use]
    pub fn wallet(&self, player: PlayerId) -> Option<&Wallet> {
        self.wallets.get(&player)
    }

    /// Check if `player` can pay for one move with `ticket`.
    #[must_use]
    pub fn has_balance(&self, player: PlayerId, ticket: Ticket) -> bool {
        self.wallet(player).is_some_and(|w| w.balance(ticket) > 0)
    }

    /// Spend one `ticket`. Returns the remaining balance.
    pub fn consume(&mut self, player: PlayerId, ticket: Ticket) -> Result<u32, LedgerError> {
        let wallet = self
            .wallets
            .get_mut(&player)
            .ok_or(LedgerError::UnknownPlayer(player))?;

        let Some(counter) = wallet.counter_mut(ticket) else {
            warn!(%player, "wildcard consumption refused for non-fugitive");
            return Err(LedgerError::WildcardNotAllowed(player));
        };

        if *counter == 0 {
            warn!(%player, %ticket, "ticket consumption refused: balance is zero");
            return Err(LedgerError::InsufficientTickets { player, ticket });
        }
        *counter -= 1;
        Ok(*counter)
    }

    /// Drop every wallet.
    pub fn clear(&mut self) {
        self.wallets.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FUGITIVE: PlayerId = PlayerId(1);
    const TRACKER: PlayerId = PlayerId(2);

    fn ledger() -> TicketLedger {
        let config = RulesConfig::default();
        let mut ledger = TicketLedger::new();
        ledger.initialize(FUGITIVE, Role::Fugitive, &config);
        ledger.initialize(TRACKER, Role::Tracker, &config);
        ledger
    }

    #[test]
    fn test_initialize_by_role() {
        let ledger = ledger();

        let tracker = ledger.wallet(TRACKER).unwrap();
        assert_eq!(tracker.role(), Role::Tracker);
        assert_eq!(tracker.tickets(), TicketCounts::new(10, 8, 4));
        assert_eq!(tracker.wildcards(), None);

        let fugitive = ledger.wallet(FUGITIVE).unwrap();
        assert_eq!(fugitive.role(), Role::Fugitive);
        assert_eq!(fugitive.tickets(), TicketCounts::uniform(999));
        assert_eq!(fugitive.wildcards(), Some(5));
    }

    #[test]
    fn test_consume_decrements_one() {
        let mut ledger = ledger();
        assert_eq!(ledger.consume(TRACKER, Ticket::LONG), Ok(3));
        assert_eq!(ledger.wallet(TRACKER).unwrap().balance(Ticket::LONG), 3);
        assert_eq!(ledger.wallet(TRACKER).unwrap().balance(Ticket::SHORT), 10);
    }

    #[test]
    fn test_consume_refuses_at_zero() {
        let config = RulesConfig::default().with_tracker_tickets(TicketCounts::new(1, 0, 0));
        let mut ledger = TicketLedger::new();
        ledger.initialize(TRACKER, Role::Tracker, &config);

        assert!(ledger.has_balance(TRACKER, Ticket::SHORT));
        assert_eq!(ledger.consume(TRACKER, Ticket::SHORT), Ok(0));
        assert!(!ledger.has_balance(TRACKER, Ticket::SHORT));
        assert_eq!(
            ledger.consume(TRACKER, Ticket::SHORT),
            Err(LedgerError::InsufficientTickets { player: TRACKER, ticket: Ticket::SHORT })
        );
        assert_eq!(ledger.wallet(TRACKER).unwrap().balance(Ticket::SHORT), 0);
    }

    #[test]
    fn test_wildcards_are_fugitive_only() {
        let mut ledger = ledger();
        assert!(!ledger.has_balance(TRACKER, Ticket::Wildcard));
        assert_eq!(
            ledger.consume(TRACKER, Ticket::Wildcard),
            Err(LedgerError::WildcardNotAllowed(TRACKER))
        );

        assert_eq!(ledger.consume(FUGITIVE, Ticket::Wildcard), Ok(4));
        // Wildcards are a separate counter.
        assert_eq!(ledger.wallet(FUGITIVE).unwrap().tickets(), TicketCounts::uniform(999));
    }

    #[test]
    fn test_unknown_player() {
        let mut ledger = ledger();
        assert!(!ledger.has_balance(PlayerId(99), Ticket::SHORT));
        assert_eq!(
            ledger.consume(PlayerId(99), Ticket::SHORT),
            Err(LedgerError::UnknownPlayer(PlayerId(99)))
        );
    }

    #[test]
    fn test_clear() {
        let mut ledger = ledger();
        assert_eq!(ledger.len(), 2);
        ledger.clear();
        assert!(ledger.is_empty());
    }
}
