//! Station identification.
//!
//! Stations are numbered `1..=station_count`. Id 0 is never valid, which
//! keeps the ids aligned with the printed board numbering.
//!
//! ```
//! use pursuit_engine::core::StationId;
//!
//! let station = StationId::new(42);
//! assert!(station.in_range(200));
//! assert!(!StationId::new(0).in_range(200));
//! assert!(!StationId::new(201).in_range(200));
//! ```

use serde::{Deserialize, Serialize};

/// Station identifier, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StationId(pub u32);

impl StationId {
    /// Create a new station ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw station number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check that this id addresses a station on a board of `station_count` stations.
    #[must_use]
    pub const fn in_range(self, station_count: u32) -> bool {
        self.0 >= 1 && self.0 <= station_count
    }

    /// Iterate over every station on a board of `station_count` stations.
    pub fn all(station_count: u32) -> impl Iterator<Item = StationId> {
        (1..=station_count).map(StationId)
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Station {}", self.0)
    }
}
