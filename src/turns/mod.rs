//! Turn scheduling: who moves next and which round it is.

pub mod scheduler;

pub use scheduler::{Advance, TurnScheduler};
