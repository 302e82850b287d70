//! Engine → presentation events.
//!
//! Events describe what happened, in order, so a presentation layer can
//! render a match without reading engine internals. They are plain data and
//! serialize with serde for front-ends in other processes.

use serde::{Deserialize, Serialize};

use crate::core::{End, Participant, PlayerId, PlayerMap};
use crate::rules::{EndReason, RoundOutcome, ScoreDelta};
use crate::zones::{PlacedTile, Tile};

/// Something that happened in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round was dealt.
    RoundStarted {
        round: u32,
        players: PlayerMap<Participant>,
        first_to_act: PlayerId,
    },

    /// A tile moved from the boneyard to a hand.
    TileDrawn {
        player: PlayerId,
        tile: Tile,
        boneyard_remaining: usize,
    },

    /// A tile was laid on the chain. `tile` carries its final orientation.
    TilePlayed {
        player: PlayerId,
        tile: PlacedTile,
        end: End,
        new_head: u8,
        new_tail: u8,
    },

    /// A player could neither play nor draw.
    TurnPassed { player: PlayerId },

    /// The round ended and was scored.
    RoundEnded {
        outcome: RoundOutcome,
        reason: EndReason,
        score_delta: Option<ScoreDelta>,
    },

    /// A player reached the target score.
    MatchEnded {
        winner: PlayerId,
        final_scores: PlayerMap<u32>,
    },
}

impl GameEvent {
    /// The player an event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TileDrawn { player, .. }
            | GameEvent::TilePlayed { player, .. }
            | GameEvent::TurnPassed { player } => Some(*player),
            GameEvent::RoundStarted { first_to_act, .. } => Some(*first_to_act),
            GameEvent::RoundEnded { outcome, .. } => outcome.winner(),
            GameEvent::MatchEnded { winner, .. } => Some(*winner),
        }
    }

    /// Does this event end a round or the match?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::RoundEnded { .. } | GameEvent::MatchEnded { .. })
    }
}
