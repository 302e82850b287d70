//! # rust-dominoes
//!
//! A two-player domino engine: double-six set, draw-until-playable rule,
//! block detection and multi-round matches played to a target score.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: The library owns all state and rules. A
//!    presentation layer issues commands and renders `GameEvent`s.
//!
//! 2. **Illegal moves never mutate**: Every command validates first and
//!    returns an `EngineError` without touching state on failure.
//!
//! 3. **Deterministic**: All randomness flows through a seeded `GameRng`,
//!    so a seed replays a match exactly.
//!
//! ## Architecture
//!
//! - **One suspension point**: Computer turns resolve synchronously;
//!   the controller stops only when a human must act.
//!
//! - **Persistent Data Structures**: The chain and action history use
//!   `im-rs` vectors so round state clones cheaply.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, moves, state, errors
//! - `zones`: Tiles, hands, boneyard and chain
//! - `rules`: Turn resolution and round results
//! - `events`: Event stream for presentation layers
//! - `strategy`: Computer move selection
//! - `game`: Match controller and snapshots

pub mod core;
pub mod zones;
pub mod rules;
pub mod events;
pub mod strategy;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, GameRng,
    MatchConfig, Participant, Role, ScoringMode, TargetScore,
    Action, ActionRecord, End, Move,
    MatchState, RoundState, TurnPhase,
    EngineError, Result,
};

pub use crate::zones::{Boneyard, Chain, Hand, PlacedTile, Tile, TileSet};

pub use crate::rules::{
    DrawOutcome, EndReason, RoundOutcome, RoundResult, RoundSummary, ScoreDelta,
    TurnEngine, TurnOutcome,
};

pub use crate::events::{EventSink, GameEvent, NullSink};

pub use crate::strategy::{FirstLegal, HeaviestFirst, MoveStrategy, RandomLegal};

pub use crate::game::{MatchController, MatchSnapshot, Status};
