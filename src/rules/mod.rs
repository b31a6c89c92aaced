//! Game rules: move legality and win evaluation.
//!
//! `RulesEngine` is the seam the session calls through; `PursuitRules` is
//! the implementation bound to a board and a configuration.

pub mod engine;
pub mod legality;
pub mod pursuit;

pub use engine::{EscapeReason, GameResult, RulesEngine};
pub use legality::{legal_tickets, LegalTickets, Occupancy};
pub use pursuit::PursuitRules;
