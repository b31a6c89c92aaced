//! Core engine types: players, stations, tickets, configuration, history, RNG.
//!
//! Everything here is plain data with no knowledge of the board graph or of
//! session flow.

pub mod player;
pub mod station;
pub mod ticket;
pub mod config;
pub mod history;
pub mod rng;

pub use player::{PlayerId, Role};
pub use station::StationId;
pub use ticket::{Ticket, TicketCounts, TransportMode, UnknownMode};
pub use config::{ConfigError, RulesConfig};
pub use history::{MoveRecord, TicketLog};
pub use rng::GameRng;
