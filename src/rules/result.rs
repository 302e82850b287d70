//! Round results and scoring.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap, ScoringMode};

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// A player emptied their hand.
    Domino,
    /// Two consecutive passes with an empty boneyard.
    Block,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::Domino => f.write_str("domino"),
            EndReason::Block => f.write_str("block"),
        }
    }
}

/// Who took the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Single winner.
    Winner(PlayerId),
    /// Blocked round with equal pips: no winner.
    Draw,
}

impl RoundOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, RoundOutcome::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            RoundOutcome::Winner(p) => Some(*p),
            RoundOutcome::Draw => None,
        }
    }
}

/// Points awarded to one player for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub player: PlayerId,
    pub points: u32,
}

/// Result of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    pub reason: EndReason,
    /// Pips left in each hand when the round ended.
    pub pips: PlayerMap<u32>,
}

impl RoundResult {
    /// Domino: `winner` emptied their hand.
    #[must_use]
    pub fn domino(winner: PlayerId, pips: PlayerMap<u32>) -> Self {
        Self {
            outcome: RoundOutcome::Winner(winner),
            reason: EndReason::Domino,
            pips,
        }
    }

    /// Block: strictly fewer pips wins, equal pips is a draw.
    #[must_use]
    pub fn block(pips: PlayerMap<u32>) -> Self {
        let [p0, p1] = *pips.as_array();
        let outcome = match p0.cmp(&p1) {
            std::cmp::Ordering::Less => RoundOutcome::Winner(PlayerId::new(0)),
            std::cmp::Ordering::Greater => RoundOutcome::Winner(PlayerId::new(1)),
            std::cmp::Ordering::Equal => RoundOutcome::Draw,
        };
        Self {
            outcome,
            reason: EndReason::Block,
            pips,
        }
    }

    /// Points this round is worth under `mode`. `None` for a draw.
    ///
    /// ```
    /// use rust_dominoes::core::{PlayerId, PlayerMap, ScoringMode};
    /// use rust_dominoes::rules::RoundResult;
    ///
    /// let result = RoundResult::block(PlayerMap::from_array([5, 9]));
    /// let pip = result.score_delta(ScoringMode::PipPoints).unwrap();
    /// assert_eq!((pip.player, pip.points), (PlayerId::new(0), 9));
    ///
    /// let win = result.score_delta(ScoringMode::WinCount).unwrap();
    /// assert_eq!(win.points, 1);
    /// ```
    #[must_use]
    pub fn score_delta(&self, mode: ScoringMode) -> Option<ScoreDelta> {
        let winner = self.outcome.winner()?;
        let points = match mode {
            ScoringMode::WinCount => 1,
            ScoringMode::PipPoints => self.pips[winner.opponent()],
        };
        Some(ScoreDelta { player: winner, points })
    }
}

/// What survives of a round once it has been scored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_number: u32,
    pub result: RoundResult,
    pub score_delta: Option<ScoreDelta>,
    /// Final chain in display form.
    pub chain: String,
}
