//! Ticket economy: per-player consumable balances.

pub mod ledger;

pub use ledger::{LedgerError, TicketLedger, Wallet};
