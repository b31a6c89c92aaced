//! Game sessions: lobby, setup, move pipeline and host-facing views.
//!
//! `SessionState` owns the data and implements every operation;
//! `SessionController` wraps it in a lock for concurrent hosts.

pub mod announce;
pub mod controller;
pub mod error;
mod flow;
pub mod report;
pub mod state;

pub use announce::{announce, announce_begin};
pub use controller::SessionController;
pub use error::SessionError;
pub use report::{
    BeginReport, FugitiveNotepad, MoveReport, PlayerStatus, PublicMove, RoleAssignment, RoleSelection,
};
pub use state::{Phase, SessionState};
