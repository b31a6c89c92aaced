//! Session state: everything that changes while a game is set up and played.
//!
//! ## Layout
//!
//! - Roster: joined players in join order, with their chosen roles
//! - Ticket ledger: one wallet per player with a role
//! - Locations: each player's station once the game has begun
//! - Turn scheduler: turn order, current index and round counter
//! - Fugitive history: bounded recent-ticket log and full move list
//!
//! The move list is an `im::Vector`, so cloning the whole state for a
//! snapshot is cheap.
//!
//! Mutating operations live in `flow.rs`; this file holds the data and the
//! read accessors.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::info;

use crate::core::{GameRng, MoveRecord, PlayerId, Role, RulesConfig, StationId, TicketLog};
use crate::rules::Occupancy;
use crate::tickets::TicketLedger;
use crate::turns::TurnScheduler;

/// Game phase, derived from the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Players join and pick roles.
    Lobby,
    /// Moves are being played.
    InProgress,
}

/// Mutable state of one game session.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub(super) roster: Vec<PlayerId>,
    pub(super) roles: FxHashMap<PlayerId, Role>,
    pub(super) fugitive: Option<PlayerId>,
    pub(super) ledger: TicketLedger,
    pub(super) locations: FxHashMap<PlayerId, StationId>,
    pub(super) scheduler: TurnScheduler,
    pub(super) recent_tickets: TicketLog,
    pub(super) fugitive_moves: Vector<MoveRecord>,
    pub(super) rng: GameRng,
}

impl SessionState {
    /// Empty lobby.
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            roster: Vec::new(),
            roles: FxHashMap::default(),
            fugitive: None,
            ledger: TicketLedger::new(),
            locations: FxHashMap::default(),
            scheduler: TurnScheduler::idle(),
            recent_tickets: TicketLog::new(config.recent_ticket_window),
            fugitive_moves: Vector::new(),
            rng: GameRng::new(config.seed),
        }
    }

    // === Phase ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.scheduler.is_empty() {
            Phase::Lobby
        } else {
            Phase::InProgress
        }
    }

    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.phase() == Phase::InProgress
    }

    /// Current round (1 in the lobby).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.scheduler.round()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.scheduler.current()
    }

    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        self.scheduler.order()
    }

    // === Players ===

    /// Joined players in join order.
    #[must_use]
    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }

    #[must_use]
    pub fn is_joined(&self, player: PlayerId) -> bool {
        self.roster.contains(&player)
    }

    #[must_use]
    pub fn role(&self, player: PlayerId) -> Option<Role> {
        self.roles.get(&player).copied()
    }

    #[must_use]
    pub fn fugitive(&self) -> Option<PlayerId> {
        self.fugitive
    }

    /// Players with the Tracker role, in join order.
    pub fn trackers(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.roster
            .iter()
            .copied()
            .filter(|p| self.roles.get(p) == Some(&Role::Tracker))
    }

    #[must_use]
    pub fn tracker_count(&self) -> usize {
        self.trackers().count()
    }

    // === Board ===

    #[must_use]
    pub fn location(&self, player: PlayerId) -> Option<StationId> {
        self.locations.get(&player).copied()
    }

    /// Every placed player's station, for the legality check.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        let mut occupancy = Occupancy::new();
        for &player in &self.roster {
            if let (Some(role), Some(station)) = (self.role(player), self.location(player)) {
                occupancy.place(player, role, station);
            }
        }
        occupancy
    }

    // === Tickets and history ===

    #[must_use]
    pub fn ledger(&self) -> &TicketLedger {
        &self.ledger
    }

    /// The Fugitive's most recent tickets, oldest first.
    #[must_use]
    pub fn recent_tickets(&self) -> &TicketLog {
        &self.recent_tickets
    }

    /// Every Fugitive move this game.
    #[must_use]
    pub fn fugitive_moves(&self) -> &Vector<MoveRecord> {
        &self.fugitive_moves
    }

    // === Reset ===

    /// Back to an empty lobby. The RNG stream carries on so consecutive
    /// games get fresh placements.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.roles.clear();
        self.fugitive = None;
        self.ledger.clear();
        self.locations.clear();
        self.scheduler = TurnScheduler::idle();
        self.recent_tickets = TicketLog::new(self.recent_tickets.capacity());
        self.fugitive_moves = Vector::new();
        info!("session reset");
    }
}
