//! Match orchestration.
//!
//! `MatchController` seats the participants, deals rounds, dispatches turns
//! to humans or strategies, applies scoring and decides the match.

pub mod controller;
pub mod snapshot;

pub use controller::{MatchController, Status};
pub use snapshot::MatchSnapshot;
