//! Moves, actions and action history.
//!
//! A `Move` is what a player (or strategy) chooses: a tile plus an optional
//! end. An `Action` is what actually happened on a turn step, recorded in the
//! round's history:
//! - `Play` = a tile placed on an end
//! - `Draw` = one tile taken from the boneyard
//! - `Pass` = no legal tile and nothing left to draw

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::zones::{PlacedTile, Tile};

/// One of the chain's two open ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    /// The left end (first tile of the chain).
    Head,
    /// The right end (last tile of the chain).
    Tail,
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            End::Head => f.write_str("head"),
            End::Tail => f.write_str("tail"),
        }
    }
}

impl std::str::FromStr for End {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "head" | "h" | "left" => Ok(End::Head),
            "tail" | "t" | "right" => Ok(End::Tail),
            other => Err(format!("unknown end '{other}'")),
        }
    }
}

/// A candidate or submitted move.
///
/// `end` is `None` for the first tile of a round, and may be `None` for a
/// submitted move whose tile matches exactly one end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub tile: Tile,
    pub end: Option<End>,
}

impl Move {
    /// A move with an explicit end.
    #[must_use]
    pub const fn on(tile: Tile, end: End) -> Self {
        Self { tile, end: Some(end) }
    }

    /// A move leaving the end to the engine.
    #[must_use]
    pub const fn any_end(tile: Tile) -> Self {
        Self { tile, end: None }
    }
}

/// A completed turn step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Tile placed; `placed` is its final orientation on the chain.
    Play { placed: PlacedTile, end: End },
    /// One tile drawn from the boneyard.
    Draw { tile: Tile },
    /// Turn passed.
    Pass,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn (draws precede the play).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
