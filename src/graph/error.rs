//! Fatal board-data errors.
//!
//! Any of these means the process cannot host a session. They are raised
//! once at startup and never retried.

use std::path::PathBuf;

use crate::core::{StationId, UnknownMode};

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: {source}")]
    UnknownMode {
        line: usize,
        #[source]
        source: UnknownMode,
    },

    #[error("invalid board JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("edge connects {0} to itself")]
    SelfLoop(StationId),

    #[error("{station} is outside the board of {station_count} stations")]
    StationOutOfRange { station: StationId, station_count: u32 },

    #[error("{0} is listed twice")]
    DuplicateStation(StationId),

    #[error("station ids must be contiguous from 1: expected {expected}, found {found}")]
    NonContiguousStations { expected: StationId, found: StationId },

    #[error("board has {station_count} stations, more than the limit of {max}")]
    TooManyStations { station_count: u32, max: u32 },

    #[error("board has no edges")]
    NoEdges,
}
