use thiserror::Error;

use crate::core::{PlayerId, Role, StationId, Ticket};
use crate::tickets::LedgerError;

/// A rejected session request. Rejection never changes the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no game is in progress")]
    NoActiveGame,

    #[error("a game is already in progress")]
    GameInProgress,

    #[error("{0} is not part of this session")]
    UnknownPlayer(PlayerId),

    #[error("{0} has already joined")]
    AlreadyJoined(PlayerId),

    #[error("the session is full ({max} players)")]
    RosterFull { max: usize },

    #[error("{player} has already chosen {role}")]
    RoleAlreadyChosen { player: PlayerId, role: Role },

    #[error("the Fugitive role is already taken")]
    FugitiveTaken,

    #[error("all {max} tracker slots are taken")]
    TrackerSlotsFull { max: usize },

    #[error("need exactly one Fugitive and at least one Tracker (have {fugitives} and {trackers})")]
    NotEnoughPlayers { fugitives: usize, trackers: usize },

    #[error("{0} has not chosen a role")]
    RolesIncomplete(PlayerId),

    #[error("the board has {station_count} stations, not enough for {players} players")]
    NotEnoughStations { station_count: u32, players: usize },

    #[error("it is {current}'s turn, not {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("{destination} is not on the board (stations 1 to {station_count})")]
    DestinationOutOfRange { destination: StationId, station_count: u32 },

    #[error("no available transport from {origin} to {destination}")]
    NoLegalTransport { origin: StationId, destination: StationId },

    #[error("a {ticket} ticket cannot be used from {origin} to {destination}")]
    TransportUnavailable {
        ticket: Ticket,
        origin: StationId,
        destination: StationId,
    },

    #[error("{player} has no {ticket} tickets left")]
    InsufficientTickets { player: PlayerId, ticket: Ticket },

    #[error("{0} is not the Fugitive")]
    NotFugitive(PlayerId),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
