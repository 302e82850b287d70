//! Plain-data match view for presentation layers.
//!
//! A snapshot never exposes hidden information beyond hand sizes. It can be
//! encoded with bincode for transfer between processes.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::core::{MatchConfig, MatchState, Participant, PlayerId, PlayerMap, ScoringMode};
use crate::zones::PlacedTile;

/// Read-only copy of the visible match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub round_number: u32,
    pub seats: PlayerMap<Participant>,
    pub scores: PlayerMap<u32>,
    pub target: u32,
    pub scoring: ScoringMode,
    /// Chain from head to tail.
    pub chain: Vec<PlacedTile>,
    /// Chain rendered as `[a|b][b|c]...`.
    pub chain_display: String,
    pub head: Option<u8>,
    pub tail: Option<u8>,
    pub hand_sizes: PlayerMap<usize>,
    pub boneyard_remaining: usize,
    pub active: PlayerId,
    pub round_over: bool,
    pub winner: Option<PlayerId>,
}

impl MatchSnapshot {
    pub(crate) fn capture(config: &MatchConfig, state: &MatchState) -> Self {
        let round = state.round();
        let chain = round.chain();
        Self {
            round_number: state.round_number(),
            seats: state.seats().clone(),
            scores: state.scores().clone(),
            target: config.target.get(),
            scoring: config.scoring,
            chain: chain.iter().copied().collect(),
            chain_display: chain.to_string(),
            head: chain.head(),
            tail: chain.tail(),
            hand_sizes: PlayerMap::new(|p| round.hand(p).len()),
            boneyard_remaining: round.boneyard().len(),
            active: round.active_player(),
            round_over: round.is_over(),
            winner: state.winner(),
        }
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    /// Decode bytes produced by [`MatchSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| EngineError::Snapshot(e.to_string()))
    }
}
