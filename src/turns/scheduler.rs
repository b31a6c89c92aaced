//! Turn rotation and round counting.
//!
//! The scheduler walks a fixed turn order built when the game begins: the
//! Fugitive first, then the Trackers. Every time the index wraps back to 0
//! the round counter goes up by one.
//!
//! At each round boundary the scheduler checks that the Fugitive is at
//! index 0. A correct session never trips this; if it does, the order is
//! rotated back into shape and the repair is logged at warn level and
//! reported through `Advance::repaired`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::PlayerId;

/// Result of a single `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    /// Player whose turn it now is.
    pub next: PlayerId,
    /// True if this advance wrapped into a new round.
    pub new_round: bool,
    /// Round counter after the advance.
    pub round: u32,
    /// True if the turn order had to be rotated to put the Fugitive first.
    pub repaired: bool,
}

impl Advance {
    /// Fold a later advance into this one, as if the turn had passed
    /// straight through. Boundary and repair flags stick.
    #[must_use]
    pub fn then(self, later: Advance) -> Advance {
        Advance {
            next: later.next,
            new_round: self.new_round || later.new_round,
            round: later.round,
            repaired: self.repaired || later.repaired,
        }
    }
}

/// Ordered rotation of active players with a round counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnScheduler {
    order: Vec<PlayerId>,
    fugitive: Option<PlayerId>,
    index: usize,
    round: u32,
}

impl Default for TurnScheduler {
    fn default() -> Self {
        Self::idle()
    }
}

impl TurnScheduler {
    /// Scheduler with no active game.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            order: Vec::new(),
            fugitive: None,
            index: 0,
            round: 1,
        }
    }

    /// Start a game: the Fugitive moves first, then the Trackers in the given order.
    #[must_use]
    pub fn new(fugitive: PlayerId, trackers: impl IntoIterator<Item = PlayerId>) -> Self {
        let order: Vec<PlayerId> = std::iter::once(fugitive)
            .chain(trackers.into_iter().filter(|&p| p != fugitive))
            .collect();
        Self {
            order,
            fugitive: Some(fugitive),
            index: 0,
            round: 1,
        }
    }

    /// Build a scheduler from an explicit order, taken as-is.
    ///
    /// Returns `None` if `fugitive` is not in `order`. A misplaced Fugitive
    /// is not fixed here; it gets repaired at the next round boundary.
    #[must_use]
    pub fn with_order(order: Vec<PlayerId>, fugitive: PlayerId) -> Option<Self> {
        if !order.contains(&fugitive) {
            return None;
        }
        Some(Self {
            order,
            fugitive: Some(fugitive),
            index: 0,
            round: 1,
        })
    }

    /// Player whose turn it is, or `None` when no game is active.
    #[must_use]
    pub fn current(&self) -> Option<PlayerId> {
        self.order.get(self.index).copied()
    }

    /// Move to the next player. Returns `None` when no game is active.
    pub fn advance(&mut self) -> Option<Advance> {
        if self.order.is_empty() {
            return None;
        }

        self.index = (self.index + 1) % self.order.len();
        let new_round = self.index == 0;
        let mut repaired = false;

        if new_round {
            self.round += 1;
            repaired = self.ensure_fugitive_first();
        }

        let next = self.order[self.index];
        debug!(%next, round = self.round, new_round, "turn advanced");
        Some(Advance {
            next,
            new_round,
            round: self.round,
            repaired,
        })
    }

    fn ensure_fugitive_first(&mut self) -> bool {
        let Some(fugitive) = self.fugitive else {
            return false;
        };
        if self.order[0] == fugitive {
            return false;
        }
        let Some(position) = self.order.iter().position(|&p| p == fugitive) else {
            return false;
        };

        warn!(
            %fugitive,
            found = %self.order[0],
            round = self.round,
            "turn order corrupted at round start; rotating fugitive back to the front"
        );
        self.order.rotate_left(position);
        true
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Index into the turn order of the current player.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Full turn order.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    /// Position of a player in the turn order.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<usize> {
        self.order.iter().position(|&p| p == player)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
