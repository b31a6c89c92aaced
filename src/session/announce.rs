//! Turn reports into notices for the players.

use super::report::{BeginReport, MoveReport};
use crate::collab::{Delivery, Notice, Notifier};

/// Announce the start of a game.
///
/// The Fugitive's starting station goes out privately, and publicly too
/// when the opening round is a reveal round.
pub fn announce_begin<N: Notifier + ?Sized>(report: &BeginReport, notifier: &mut N) {
    notifier.notify(Delivery::Public, Notice::RoundStarted { round: report.round });
    if let Some(station) = report.reveal {
        notifier.notify(
            Delivery::Public,
            Notice::FugitiveRevealed {
                round: report.round,
                station,
            },
        );
    }
    notifier.notify(
        Delivery::Private(report.fugitive),
        Notice::StartingStation {
            station: report.fugitive_station,
        },
    );
    notifier.notify(Delivery::Private(report.fugitive), Notice::YourTurn { round: report.round });
}

/// Announce an accepted move.
///
/// Order: the public move line, then either the result or the skipped
/// turns, round and reveal lines followed by a private prompt for the next
/// player.
pub fn announce<N: Notifier + ?Sized>(report: &MoveReport, notifier: &mut N) {
    notifier.notify(Delivery::Public, Notice::Moved(report.disclosure));

    if let Some(result) = &report.result {
        notifier.notify(Delivery::Public, Notice::GameOver(result.clone()));
        return;
    }
    let Some(next) = report.next_turn else {
        return;
    };

    for &player in &report.skipped {
        notifier.notify(Delivery::Public, Notice::TurnSkipped { player });
    }
    if next.repaired {
        notifier.notify(Delivery::Public, Notice::TurnOrderRepaired { round: next.round });
    }
    if next.new_round {
        notifier.notify(Delivery::Public, Notice::RoundStarted { round: next.round });
    }
    if let Some(station) = report.reveal {
        notifier.notify(
            Delivery::Public,
            Notice::FugitiveRevealed {
                round: next.round,
                station,
            },
        );
    }
    notifier.notify(Delivery::Private(next.next), Notice::YourTurn { round: next.round });
}
