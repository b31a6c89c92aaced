//! Player identification and roles.
//!
//! ## PlayerId
//!
//! Opaque identifier handed to the engine by the host (a chat user id,
//! a seat number, ...). The engine never interprets the value.
//!
//! ## Role
//!
//! Exactly one `Fugitive` per session; every other seated player is a
//! `Tracker`.

use serde::{Deserialize, Serialize};

/// Player identifier assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Role a player takes for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The single hidden-movement player.
    Fugitive,
    /// An openly-moving pursuer.
    Tracker,
}

impl Role {
    /// Check if this is the Fugitive role.
    #[must_use]
    pub const fn is_fugitive(self) -> bool {
        matches!(self, Role::Fugitive)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Fugitive => write!(f, "Fugitive"),
            Role::Tracker => write!(f, "Tracker"),
        }
    }
}
