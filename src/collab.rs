//! Collaborators the host plugs in: a map renderer and a notifier.
//!
//! The engine never talks to users or draws pictures itself. It hands a
//! `MapRequest` to a `Renderer` and `Notice`s to a `Notifier`.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, StationId};
use crate::rules::GameResult;
use crate::session::PublicMove;
use crate::visibility::{Viewer, VisibleToken};

/// Everything a renderer needs to draw one view of the board.
///
/// Tokens are already filtered for `viewer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRequest {
    pub round: u32,
    pub viewer: Viewer,
    pub tokens: Vec<VisibleToken>,
    /// Station to center on: the viewer's own token, if placed.
    pub focus: Option<StationId>,
}

/// Draws a map image.
pub trait Renderer {
    type Error: std::error::Error;

    /// Render `request` into encoded image bytes.
    fn render(&self, request: &MapRequest) -> Result<Vec<u8>, Self::Error>;
}

/// Where a notice goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delivery {
    Public,
    Private(PlayerId),
}

/// Message for the players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Moved(PublicMove),
    /// Sent privately to the Fugitive when the game begins.
    StartingStation { station: StationId },
    RoundStarted { round: u32 },
    FugitiveRevealed { round: u32, station: StationId },
    TurnOrderRepaired { round: u32 },
    /// A player had no legal move and lost their turn.
    TurnSkipped { player: PlayerId },
    YourTurn { round: u32 },
    GameOver(GameResult),
}

/// Delivers notices to players.
pub trait Notifier {
    fn notify(&mut self, delivery: Delivery, notice: Notice);
}

impl Notifier for Vec<(Delivery, Notice)> {
    fn notify(&mut self, delivery: Delivery, notice: Notice) {
        self.push((delivery, notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;

    /// Writes one `role@station` line per token.
    struct TextRenderer;

    impl Renderer for TextRenderer {
        type Error = std::fmt::Error;

        fn render(&self, request: &MapRequest) -> Result<Vec<u8>, Self::Error> {
            use std::fmt::Write;

            let mut out = format!("round {}\n", request.round);
            for token in &request.tokens {
                writeln!(out, "{}@{}", token.role, token.station.raw())?;
            }
            Ok(out.into_bytes())
        }
    }

    #[test]
    fn test_renderer_draws_only_given_tokens() {
        let request = MapRequest {
            round: 4,
            viewer: Viewer::Public,
            tokens: vec![VisibleToken {
                player: PlayerId(2),
                role: Role::Tracker,
                station: StationId(17),
            }],
            focus: None,
        };
        let bytes = TextRenderer.render(&request).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "round 4\nTracker@17\n");
    }
}
