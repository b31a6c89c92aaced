//! Thread-safe front door to one session.
//!
//! Mutating requests take the write lock, so at most one `join`,
//! `assign_role`, `begin`, `submit_move` or `reset` runs at a time and each
//! runs to completion before the next. Queries take the read lock: they
//! may run side by side and always see a state between two requests.

use parking_lot::RwLock;

use super::error::SessionError;
use super::report::{BeginReport, FugitiveNotepad, MoveReport, PlayerStatus, RoleAssignment, RoleSelection};
use super::state::SessionState;
use crate::collab::MapRequest;
use crate::core::{PlayerId, StationId, Ticket};
use crate::rules::{LegalTickets, PursuitRules, RulesEngine};
use crate::visibility::Viewer;

/// One game session behind a reader-writer lock.
///
/// Share it between request handlers with an `Arc`.
#[derive(Debug)]
pub struct SessionController<R = PursuitRules> {
    rules: R,
    state: RwLock<SessionState>,
}

impl<R: RulesEngine> SessionController<R> {
    /// New session in the lobby.
    pub fn new(rules: R) -> Self {
        let state = SessionState::new(rules.config());
        Self {
            rules,
            state: RwLock::new(state),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    // === Mutations ===

    pub fn join(&self, player: PlayerId) -> Result<(), SessionError> {
        self.state.write().join(&self.rules, player)
    }

    pub fn assign_role(&self, player: PlayerId, selection: RoleSelection) -> Result<RoleAssignment, SessionError> {
        self.state.write().assign_role(&self.rules, player, selection)
    }

    pub fn begin(&self) -> Result<BeginReport, SessionError> {
        self.state.write().begin(&self.rules)
    }

    pub fn submit_move(
        &self,
        player: PlayerId,
        destination: StationId,
        ticket: Ticket,
    ) -> Result<MoveReport, SessionError> {
        self.state.write().submit_move(&self.rules, player, destination, ticket)
    }

    /// Abandon any game and empty the lobby.
    pub fn reset(&self) {
        self.state.write().reset();
    }

    // === Queries ===

    pub fn status(&self, player: PlayerId) -> Result<PlayerStatus, SessionError> {
        self.state.read().status(player)
    }

    pub fn possible_moves(&self, player: PlayerId) -> Result<Vec<(StationId, LegalTickets)>, SessionError> {
        self.state.read().possible_moves(&self.rules, player)
    }

    pub fn transport_options(&self, player: PlayerId, destination: StationId) -> Result<LegalTickets, SessionError> {
        self.state.read().transport_options(&self.rules, player, destination)
    }

    pub fn fugitive_notepad(&self, player: PlayerId) -> Result<FugitiveNotepad, SessionError> {
        self.state.read().fugitive_notepad(player)
    }

    pub fn map_request(&self, viewer: Viewer) -> Result<MapRequest, SessionError> {
        self.state.read().map_request(&self.rules, viewer)
    }

    /// Run `f` against the state under the read lock.
    pub fn inspect<T>(&self, f: impl FnOnce(&SessionState) -> T) -> T {
        f(&self.state.read())
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }
}
