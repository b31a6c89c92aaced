//! # pursuit-engine
//!
//! Rules engine for a hidden-movement pursuit game played on a transit map.
//! One Fugitive moves in secret; up to four Trackers try to land on the
//! Fugitive's station before the clock runs out.
//!
//! ## Design Principles
//!
//! 1. **No I/O in the core**: Hosts feed requests in and get reports out.
//!    Rendering and messaging are collaborator traits.
//!
//! 2. **Reject, never corrupt**: Every request is validated before any
//!    state changes. A rejected request leaves the session as it was.
//!
//! 3. **Configuration Over Convention**: Player caps, round limit, reveal
//!    rounds and starting tickets all come from `RulesConfig`.
//!
//! ## Architecture
//!
//! - **Immutable board**: `TransportGraph` is loaded once and shared
//!   read-only (`Arc`) across sessions.
//!
//! - **Serialized sessions**: `SessionController` puts each session behind
//!   a reader-writer lock. Moves are atomic; queries see consistent state.
//!
//! - **Persistent history**: The Fugitive's move list is an `im::Vector`,
//!   so snapshots are O(1) clones.
//!
//! ## Modules
//!
//! - `core`: Player and station ids, roles, tickets, configuration, RNG
//! - `graph`: Transport graph and its loaders
//! - `tickets`: Per-player ticket wallets
//! - `rules`: RulesEngine trait, move legality and win evaluation
//! - `turns`: Turn order and round counter
//! - `visibility`: Who sees the Fugitive
//! - `session`: Lobby, game flow and host-facing views
//! - `collab`: Renderer and notifier traits
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pursuit_engine::{
//!     load_text, PursuitRules, Role, RoleSelection, RulesConfig, SessionController, PlayerId,
//! };
//!
//! let graph = load_text("1,2,taxi\n2,3,bus\n3,4,underground\n4,1,taxi\n", None).unwrap();
//! let rules = PursuitRules::new(Arc::new(graph), RulesConfig::default()).unwrap();
//! let session = SessionController::new(rules);
//!
//! let (fugitive, tracker) = (PlayerId(10), PlayerId(20));
//! session.join(fugitive).unwrap();
//! session.join(tracker).unwrap();
//! session.assign_role(fugitive, RoleSelection::Chose(Role::Fugitive)).unwrap();
//! session.assign_role(tracker, RoleSelection::Chose(Role::Tracker)).unwrap();
//!
//! let started = session.begin().unwrap();
//! assert_eq!(started.turn_order, vec![fugitive, tracker]);
//! assert_eq!(started.round, 1);
//! ```

pub mod core;
pub mod graph;
pub mod tickets;
pub mod rules;
pub mod turns;
pub mod visibility;
pub mod session;
pub mod collab;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Role, StationId,
    Ticket, TicketCounts, TransportMode,
    RulesConfig, ConfigError,
    MoveRecord, TicketLog, GameRng,
};

pub use crate::graph::{load_files, load_json, load_text, Edge, GraphError, Station, TransportGraph, MAX_STATIONS};

pub use crate::tickets::{LedgerError, TicketLedger, Wallet};

pub use crate::rules::{legal_tickets, EscapeReason, GameResult, LegalTickets, Occupancy, PursuitRules, RulesEngine};

pub use crate::turns::{Advance, TurnScheduler};

pub use crate::visibility::{LocationVisibility, Viewer, VisibilityPolicy, VisibleToken};

pub use crate::session::{
    announce, announce_begin,
    BeginReport, FugitiveNotepad, MoveReport, PlayerStatus, PublicMove,
    RoleAssignment, RoleSelection,
    Phase, SessionController, SessionError, SessionState,
};

pub use crate::collab::{Delivery, MapRequest, Notice, Notifier, Renderer};
