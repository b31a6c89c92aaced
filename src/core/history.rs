//! Fugitive move records.
//!
//! Two logs are kept for the Fugitive:
//! - `MoveRecord`s: every move with origin and destination, private to the
//!   Fugitive (their "notepad").
//! - `TicketLog`: the last few tickets spent, public to everyone. The log is
//!   bounded; the oldest entry is evicted first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::station::StationId;
use super::ticket::Ticket;

/// A single committed Fugitive move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Ticket spent (a wildcard stays a wildcard here too).
    pub ticket: Ticket,
    /// Station the move started from.
    pub origin: StationId,
    /// Station the move ended on.
    pub destination: StationId,
    /// Round in which the move was made.
    pub round: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(ticket: Ticket, origin: StationId, destination: StationId, round: u32) -> Self {
        Self {
            ticket,
            origin,
            destination,
            round,
        }
    }
}

/// Bounded log of recently spent tickets, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLog {
    capacity: usize,
    entries: VecDeque<Ticket>,
}

impl TicketLog {
    /// Create an empty log holding at most `capacity` tickets (at least 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a ticket, evicting the oldest one when full.
    pub fn push(&mut self, ticket: Ticket) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ticket);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Ticket> + '_ {
        self.entries.iter().copied()
    }

    /// Copy out the entries, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Ticket> {
        self.entries.iter().copied().collect()
    }
}
