//! Core engine types: seats, RNG, configuration, moves, state and errors.
//!
//! These are shared by every other module. Zones and rules build on them;
//! nothing here depends on how a match is driven.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::GameRng;
pub use config::{MatchConfig, Participant, Role, ScoringMode, TargetScore};
pub use action::{Action, ActionRecord, End, Move};
pub use state::{MatchState, RoundState, TurnPhase, HAND_SIZE};
pub use error::{EngineError, Result};
