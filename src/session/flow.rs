//! Session operations.
//!
//! Every operation validates first and mutates after, so a rejected request
//! leaves the session untouched.
//!
//! ## Move pipeline
//!
//! 1. Turn and range checks
//! 2. Legality through the rules engine
//! 3. Commit: spend the ticket, move the token, log Fugitive moves
//! 4. Win evaluation
//! 5. Turn advance; on a round boundary, evaluate again for the clock and
//!    open the reveal if the new round is a reveal round
//! 6. Players with no legal move are skipped, repeating step 5 for each
//! 7. On a result, reset to an empty lobby

use tracing::{debug, info};

use super::error::SessionError;
use super::report::{
    BeginReport, FugitiveNotepad, MoveReport, PlayerStatus, PublicMove, RoleAssignment, RoleSelection,
};
use super::state::SessionState;
use crate::collab::MapRequest;
use crate::core::{MoveRecord, PlayerId, Role, StationId, Ticket, TicketLog};
use crate::rules::{LegalTickets, RulesEngine};
use crate::turns::{Advance, TurnScheduler};
use crate::visibility::{Viewer, VisibilityPolicy};

impl SessionState {
    // === Lobby ===

    /// Add a player to the lobby.
    pub fn join<R: RulesEngine>(&mut self, rules: &R, player: PlayerId) -> Result<(), SessionError> {
        self.require_lobby()?;
        if self.is_joined(player) {
            return Err(SessionError::AlreadyJoined(player));
        }
        let max = rules.config().max_players;
        if self.roster.len() >= max {
            return Err(SessionError::RosterFull { max });
        }

        self.roster.push(player);
        info!(%player, players = self.roster.len(), "player joined");
        Ok(())
    }

    /// Record a joined player's role and hand out the matching wallet.
    pub fn assign_role<R: RulesEngine>(
        &mut self,
        rules: &R,
        player: PlayerId,
        selection: RoleSelection,
    ) -> Result<RoleAssignment, SessionError> {
        self.require_lobby()?;
        if !self.is_joined(player) {
            return Err(SessionError::UnknownPlayer(player));
        }
        let RoleSelection::Chose(role) = selection else {
            info!(%player, "role prompt expired");
            return Ok(RoleAssignment::NoSelection);
        };
        if let Some(existing) = self.role(player) {
            return Err(SessionError::RoleAlreadyChosen { player, role: existing });
        }
        match role {
            Role::Fugitive if self.fugitive.is_some() => return Err(SessionError::FugitiveTaken),
            Role::Tracker if self.tracker_count() >= rules.config().max_trackers() => {
                return Err(SessionError::TrackerSlotsFull {
                    max: rules.config().max_trackers(),
                });
            }
            _ => {}
        }

        self.roles.insert(player, role);
        if role == Role::Fugitive {
            self.fugitive = Some(player);
        }
        self.ledger.initialize(player, role, rules.config());
        info!(%player, %role, "role assigned");
        Ok(RoleAssignment::Assigned(role))
    }

    /// Start the game: place every player on a distinct random station and
    /// build the turn order, Fugitive first.
    pub fn begin<R: RulesEngine>(&mut self, rules: &R) -> Result<BeginReport, SessionError> {
        self.require_lobby()?;

        let trackers: Vec<PlayerId> = self.trackers().collect();
        let fugitive = match self.fugitive {
            Some(fugitive) if !trackers.is_empty() => fugitive,
            _ => {
                return Err(SessionError::NotEnoughPlayers {
                    fugitives: usize::from(self.fugitive.is_some()),
                    trackers: trackers.len(),
                })
            }
        };
        if let Some(&missing) = self.roster.iter().find(|&p| !self.roles.contains_key(p)) {
            return Err(SessionError::RolesIncomplete(missing));
        }

        let players = self.roster.len();
        let station_count = rules.graph().station_count();
        let stations = self
            .rng
            .distinct_stations(station_count, players)
            .ok_or(SessionError::NotEnoughStations { station_count, players })?;

        let placements: Vec<(PlayerId, StationId)> = self.roster.iter().copied().zip(stations).collect();
        let fugitive_station = placements
            .iter()
            .find_map(|&(player, station)| (player == fugitive).then_some(station))
            .ok_or(SessionError::UnknownPlayer(fugitive))?;
        let tracker_stations = placements
            .iter()
            .copied()
            .filter(|&(player, _)| player != fugitive)
            .collect();

        self.locations = placements.into_iter().collect();
        self.scheduler = TurnScheduler::new(fugitive, trackers);
        self.recent_tickets = TicketLog::new(self.recent_tickets.capacity());
        self.fugitive_moves.clear();

        let round = self.round();
        let reveal = rules.config().is_reveal_round(round).then_some(fugitive_station);

        info!(players, seed = self.rng.seed(), "game started");
        Ok(BeginReport {
            turn_order: self.scheduler.order().to_vec(),
            fugitive,
            fugitive_station,
            tracker_stations,
            round,
            reveal,
        })
    }

    // === Moves ===

    /// Play one move for the player whose turn it is.
    pub fn submit_move<R: RulesEngine>(
        &mut self,
        rules: &R,
        player: PlayerId,
        destination: StationId,
        ticket: Ticket,
    ) -> Result<MoveReport, SessionError> {
        let origin = self.check_turn(rules, player, destination)?;
        let role = self.role(player).ok_or(SessionError::UnknownPlayer(player))?;
        self.check_ticket(rules, player, role, origin, destination, ticket)?;

        let remaining = self.ledger.consume(player, ticket)?;
        self.locations.insert(player, destination);
        let round = self.round();
        let disclosure = match role {
            Role::Fugitive => {
                self.recent_tickets.push(ticket);
                self.fugitive_moves
                    .push_back(MoveRecord::new(ticket, origin, destination, round));
                PublicMove::Fugitive { player, ticket }
            }
            Role::Tracker => PublicMove::Tracker {
                player,
                ticket,
                destination,
            },
        };
        debug!(%player, %ticket, %origin, %destination, round, remaining, "move committed");

        let mut result = rules.is_terminal(self);
        let mut next_turn: Option<Advance> = None;
        let mut reveal = None;
        let mut skipped = Vec::new();

        // Pass the turn on, skipping players with no legal move. Some Tracker
        // can still move here, otherwise the stalemate check would have fired.
        while result.is_none() {
            let Some(advance) = self.scheduler.advance() else {
                break;
            };
            if advance.new_round {
                result = rules.is_terminal(self);
                if result.is_none() && rules.config().is_reveal_round(advance.round) {
                    reveal = self.fugitive.and_then(|f| self.location(f));
                    info!(round = advance.round, "reveal round");
                }
            }
            next_turn = Some(match next_turn {
                Some(earlier) => earlier.then(advance),
                None => advance,
            });

            if result.is_some() || skipped.len() + 1 >= self.scheduler.len() || rules.can_move(self, advance.next) {
                break;
            }
            info!(player = %advance.next, round = advance.round, "no legal move, turn skipped");
            skipped.push(advance.next);
        }
        if result.is_some() {
            next_turn = None;
        }

        if let Some(result) = &result {
            info!(%result, round = self.round(), "game over");
            self.reset();
        }

        Ok(MoveReport {
            player,
            role,
            ticket,
            origin,
            destination,
            disclosure,
            result,
            next_turn,
            skipped,
            reveal,
        })
    }

    // === Queries ===

    /// A player's role, station, balances and whether it is their turn.
    pub fn status(&self, player: PlayerId) -> Result<PlayerStatus, SessionError> {
        if !self.is_joined(player) {
            return Err(SessionError::UnknownPlayer(player));
        }
        Ok(PlayerStatus {
            player,
            role: self.role(player),
            location: self.location(player),
            wallet: self.ledger.wallet(player).copied(),
            round: self.round(),
            is_turn: self.current_player() == Some(player),
        })
    }

    /// Every destination `player` can legally reach right now.
    pub fn possible_moves<R: RulesEngine>(
        &self,
        rules: &R,
        player: PlayerId,
    ) -> Result<Vec<(StationId, LegalTickets)>, SessionError> {
        self.require_in_progress()?;
        if self.role(player).is_none() {
            return Err(SessionError::UnknownPlayer(player));
        }
        Ok(rules.legal_moves(self, player))
    }

    /// Tickets the current player may pick from to reach `destination`.
    pub fn transport_options<R: RulesEngine>(
        &self,
        rules: &R,
        player: PlayerId,
        destination: StationId,
    ) -> Result<LegalTickets, SessionError> {
        let origin = self.check_turn(rules, player, destination)?;
        let options = rules.legal_tickets(self, player, destination);
        if options.is_empty() {
            return Err(SessionError::NoLegalTransport { origin, destination });
        }
        Ok(options)
    }

    /// The Fugitive's private record.
    pub fn fugitive_notepad(&self, player: PlayerId) -> Result<FugitiveNotepad, SessionError> {
        self.require_in_progress()?;
        match self.role(player) {
            None => Err(SessionError::UnknownPlayer(player)),
            Some(Role::Tracker) => Err(SessionError::NotFugitive(player)),
            Some(Role::Fugitive) => Ok(FugitiveNotepad {
                round: self.round(),
                location: self.location(player),
                moves: self.fugitive_moves.iter().copied().collect(),
                recent_tickets: self.recent_tickets.to_vec(),
                wallet: self.ledger.wallet(player).copied(),
            }),
        }
    }

    /// Map data for `viewer`, with hidden tokens filtered out.
    pub fn map_request<R: RulesEngine>(&self, rules: &R, viewer: Viewer) -> Result<MapRequest, SessionError> {
        self.require_in_progress()?;
        let focus = match viewer {
            Viewer::Public => None,
            Viewer::Player(player) if self.is_joined(player) => self.location(player),
            Viewer::Player(player) => return Err(SessionError::UnknownPlayer(player)),
        };

        Ok(MapRequest {
            round: self.round(),
            viewer,
            tokens: VisibilityPolicy::new(rules.config()).visible_tokens(self, viewer),
            focus,
        })
    }

    // === Checks ===

    fn require_lobby(&self) -> Result<(), SessionError> {
        if self.in_progress() {
            return Err(SessionError::GameInProgress);
        }
        Ok(())
    }

    fn require_in_progress(&self) -> Result<(), SessionError> {
        if !self.in_progress() {
            return Err(SessionError::NoActiveGame);
        }
        Ok(())
    }

    /// Turn ownership and destination range. Returns the mover's station.
    fn check_turn<R: RulesEngine>(
        &self,
        rules: &R,
        player: PlayerId,
        destination: StationId,
    ) -> Result<StationId, SessionError> {
        let current = self.current_player().ok_or(SessionError::NoActiveGame)?;
        if self.role(player).is_none() {
            return Err(SessionError::UnknownPlayer(player));
        }
        if player != current {
            return Err(SessionError::NotYourTurn { player, current });
        }

        let station_count = rules.graph().station_count();
        if !destination.in_range(station_count) {
            return Err(SessionError::DestinationOutOfRange {
                destination,
                station_count,
            });
        }
        self.location(player).ok_or(SessionError::NoActiveGame)
    }

    /// Reject a ticket that does not pay for the hop, with the most specific reason.
    fn check_ticket<R: RulesEngine>(
        &self,
        rules: &R,
        player: PlayerId,
        role: Role,
        origin: StationId,
        destination: StationId,
        ticket: Ticket,
    ) -> Result<(), SessionError> {
        let legal = rules.legal_tickets(self, player, destination);
        if legal.contains(ticket) {
            return Ok(());
        }

        // Would the ticket be accepted if the player still held one?
        let payable = match ticket.mode() {
            Some(mode) => {
                rules.graph().is_connected(origin, destination, mode)
                    && !self.occupancy().blocks(player, role, destination)
            }
            None => role == Role::Fugitive && !legal.is_empty(),
        };

        if payable {
            Err(SessionError::InsufficientTickets { player, ticket })
        } else if legal.is_empty() {
            Err(SessionError::NoLegalTransport { origin, destination })
        } else {
            Err(SessionError::TransportUnavailable {
                ticket,
                origin,
                destination,
            })
        }
    }
}
