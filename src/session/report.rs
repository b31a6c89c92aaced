//! Values handed back to the host: outcomes of requests and read-only views.

use serde::{Deserialize, Serialize};

use crate::core::{MoveRecord, PlayerId, Role, StationId, Ticket};
use crate::rules::GameResult;
use crate::tickets::Wallet;
use crate::turns::Advance;

/// A player's answer to the role prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleSelection {
    Chose(Role),
    /// The prompt expired without an answer.
    NoSelection,
}

/// Outcome of `assign_role`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleAssignment {
    Assigned(Role),
    NoSelection,
}

/// Outcome of `begin`.
///
/// Holds the Fugitive's starting station: hosts must deliver it privately.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginReport {
    pub turn_order: Vec<PlayerId>,
    pub fugitive: PlayerId,
    pub fugitive_station: StationId,
    pub tracker_stations: Vec<(PlayerId, StationId)>,
    pub round: u32,
    /// Fugitive station, set when the opening round is a reveal round.
    pub reveal: Option<StationId>,
}

/// What everyone gets to know about a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicMove {
    Tracker {
        player: PlayerId,
        ticket: Ticket,
        destination: StationId,
    },
    /// The Fugitive's destination stays hidden.
    Fugitive { player: PlayerId, ticket: Ticket },
}

impl std::fmt::Display for PublicMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicMove::Tracker {
                player,
                ticket,
                destination,
            } => write!(f, "{} moved to {} using a {} ticket", player, destination, ticket),
            PublicMove::Fugitive { ticket, .. } => write!(f, "The Fugitive moved using a {} ticket", ticket),
        }
    }
}

/// Outcome of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub player: PlayerId,
    pub role: Role,
    pub ticket: Ticket,
    pub origin: StationId,
    pub destination: StationId,
    pub disclosure: PublicMove,
    /// Set when the move ended the game. The session has been reset.
    pub result: Option<GameResult>,
    /// Turn handoff, absent when the game ended. Spans any skipped turns.
    pub next_turn: Option<Advance>,
    /// Players passed over because they had no legal move, in turn order.
    pub skipped: Vec<PlayerId>,
    /// Fugitive station, set when the move opened a reveal round.
    pub reveal: Option<StationId>,
}

impl MoveReport {
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }
}

/// A player's own view of their standing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub player: PlayerId,
    pub role: Option<Role>,
    pub location: Option<StationId>,
    pub wallet: Option<Wallet>,
    pub round: u32,
    pub is_turn: bool,
}

/// The Fugitive's private record of the game so far.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FugitiveNotepad {
    pub round: u32,
    pub location: Option<StationId>,
    pub moves: Vec<MoveRecord>,
    /// Most recent tickets, oldest first.
    pub recent_tickets: Vec<Ticket>,
    pub wallet: Option<Wallet>,
}
