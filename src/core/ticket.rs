//! Transport modes and the tickets that pay for them.
//!
//! Every edge of the board carries one `TransportMode`. A move is paid with
//! a `Ticket`: either a ticket of the edge's mode, or (Fugitive only) a
//! wildcard that hides which mode was actually ridden.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Transport category of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Short hop (taxi).
    Short,
    /// Medium hop (bus).
    Medium,
    /// Long hop (metro).
    Long,
}

impl TransportMode {
    /// All modes, in ticket-display order.
    pub const ALL: [TransportMode; 3] = [TransportMode::Short, TransportMode::Medium, TransportMode::Long];

    /// Dense index for per-mode arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TransportMode::Short => 0,
            TransportMode::Medium => 1,
            TransportMode::Long => 2,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TransportMode::Short => "short",
            TransportMode::Medium => "medium",
            TransportMode::Long => "long",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a mode name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode `{0}`")]
pub struct UnknownMode(pub String);

impl FromStr for TransportMode {
    type Err = UnknownMode;

    /// Accepts the generic names and the classic board names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" | "taxi" => Ok(TransportMode::Short),
            "medium" | "bus" => Ok(TransportMode::Medium),
            "long" | "metro" | "underground" => Ok(TransportMode::Long),
            _ => Err(UnknownMode(s.trim().to_string())),
        }
    }
}

/// Payment for a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ticket {
    /// A ticket of one ordinary mode.
    Transit(TransportMode),
    /// Fugitive-only ticket that conceals the mode used.
    Wildcard,
}

impl Ticket {
    /// Shorthand for `Ticket::Transit(TransportMode::Short)`.
    pub const SHORT: Ticket = Ticket::Transit(TransportMode::Short);
    /// Shorthand for `Ticket::Transit(TransportMode::Medium)`.
    pub const MEDIUM: Ticket = Ticket::Transit(TransportMode::Medium);
    /// Shorthand for `Ticket::Transit(TransportMode::Long)`.
    pub const LONG: Ticket = Ticket::Transit(TransportMode::Long);

    /// The ordinary mode, if this is not a wildcard.
    #[must_use]
    pub const fn mode(self) -> Option<TransportMode> {
        match self {
            Ticket::Transit(mode) => Some(mode),
            Ticket::Wildcard => None,
        }
    }

    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Ticket::Wildcard)
    }
}

impl From<TransportMode> for Ticket {
    fn from(mode: TransportMode) -> Self {
        Ticket::Transit(mode)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ticket::Transit(mode) => write!(f, "{}", mode),
            Ticket::Wildcard => f.write_str("wildcard"),
        }
    }
}

impl FromStr for Ticket {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wildcard" | "black" => Ok(Ticket::Wildcard),
            _ => s.parse().map(Ticket::Transit),
        }
    }
}

/// Per-mode ticket balances.
///
/// ```
/// use pursuit_engine::core::{TicketCounts, TransportMode};
///
/// let counts = TicketCounts::new(10, 8, 4);
/// assert_eq!(counts.get(TransportMode::Medium), 8);
/// assert_eq!(counts.total(), 22);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketCounts {
    pub short: u32,
    pub medium: u32,
    pub long: u32,
}

impl TicketCounts {
    #[must_use]
    pub const fn new(short: u32, medium: u32, long: u32) -> Self {
        Self { short, medium, long }
    }

    /// Same balance for every mode.
    #[must_use]
    pub const fn uniform(count: u32) -> Self {
        Self::new(count, count, count)
    }

    #[must_use]
    pub const fn get(&self, mode: TransportMode) -> u32 {
        match mode {
            TransportMode::Short => self.short,
            TransportMode::Medium => self.medium,
            TransportMode::Long => self.long,
        }
    }

    pub fn get_mut(&mut self, mode: TransportMode) -> &mut u32 {
        match mode {
            TransportMode::Short => &mut self.short,
            TransportMode::Medium => &mut self.medium,
            TransportMode::Long => &mut self.long,
        }
    }

    /// Sum over all modes.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.short + self.medium + self.long
    }

    /// Iterate over `(mode, balance)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TransportMode, u32)> + '_ {
        TransportMode::ALL.into_iter().map(move |mode| (mode, self.get(mode)))
    }
}
