//! Who may see which token on the map.
//!
//! Tracker tokens are public. The Fugitive token is visible to the Fugitive
//! at all times and to everyone else only during a reveal round (for the
//! whole round, not just the Fugitive's own turn).
//!
//! The session, not the renderer, applies this policy: a `MapRequest` only
//! ever carries tokens the viewer is allowed to see.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Role, RulesConfig, StationId};
use crate::session::SessionState;

/// Who is looking at the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viewer {
    /// Shared channel: everyone sees the same thing.
    Public,
    /// One player's private view.
    Player(PlayerId),
}

/// Visibility of a token's location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationVisibility {
    /// Everyone sees the station.
    Public,
    /// Only the token's owner sees the station.
    OwnerOnly,
}

/// A token the viewer is allowed to see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleToken {
    pub player: PlayerId,
    pub role: Role,
    pub station: StationId,
}

/// Reveal-round visibility policy.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityPolicy<'a> {
    config: &'a RulesConfig,
}

impl<'a> VisibilityPolicy<'a> {
    #[must_use]
    pub fn new(config: &'a RulesConfig) -> Self {
        Self { config }
    }

    /// Visibility of a role's location during `round`.
    #[must_use]
    pub fn visibility(&self, role: Role, round: u32) -> LocationVisibility {
        match role {
            Role::Tracker => LocationVisibility::Public,
            Role::Fugitive if self.config.is_reveal_round(round) => LocationVisibility::Public,
            Role::Fugitive => LocationVisibility::OwnerOnly,
        }
    }

    /// Check if `viewer` may see `owner`'s location.
    #[must_use]
    pub fn can_see(&self, viewer: Viewer, owner: PlayerId, role: Role, round: u32) -> bool {
        match self.visibility(role, round) {
            LocationVisibility::Public => true,
            LocationVisibility::OwnerOnly => viewer == Viewer::Player(owner),
        }
    }

    /// Placed tokens `viewer` may see, in join order.
    #[must_use]
    pub fn visible_tokens(&self, state: &SessionState, viewer: Viewer) -> Vec<VisibleToken> {
        let round = state.round();
        state
            .roster()
            .iter()
            .filter_map(|&player| {
                let role = state.role(player)?;
                let station = state.location(player)?;
                self.can_see(viewer, player, role, round).then_some(VisibleToken { player, role, station })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_always_public() {
        let config = RulesConfig::default();
        let policy = VisibilityPolicy::new(&config);
        for round in 1..=config.max_rounds {
            assert_eq!(policy.visibility(Role::Tracker, round), LocationVisibility::Public);
        }
    }

    #[test]
    fn test_fugitive_public_only_on_reveal_rounds() {
        let config = RulesConfig::default();
        let policy = VisibilityPolicy::new(&config);
        assert_eq!(policy.visibility(Role::Fugitive, 3), LocationVisibility::Public);
        assert_eq!(policy.visibility(Role::Fugitive, 24), LocationVisibility::Public);
        assert_eq!(policy.visibility(Role::Fugitive, 4), LocationVisibility::OwnerOnly);
    }

    #[test]
    fn test_fugitive_sees_self() {
        let config = RulesConfig::default();
        let policy = VisibilityPolicy::new(&config);
        let fugitive = PlayerId(1);

        assert!(policy.can_see(Viewer::Player(fugitive), fugitive, Role::Fugitive, 4));
        assert!(!policy.can_see(Viewer::Player(PlayerId(2)), fugitive, Role::Fugitive, 4));
        assert!(!policy.can_see(Viewer::Public, fugitive, Role::Fugitive, 4));
        assert!(policy.can_see(Viewer::Public, fugitive, Role::Fugitive, 8));
    }
}
