//! Match configuration types.
//!
//! A match is configured once at start by providing:
//! - `TargetScore`: cumulative score that ends the match
//! - `ScoringMode`: how a round win converts into points
//! - `Participant`s: name plus human/computer role for each player
//!
//! Seat order is not part of the configuration; the controller randomizes
//! it when the match starts.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{EngineError, Result};

/// How a round result converts into match points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringMode {
    /// Flat +1 to the round winner.
    #[default]
    WinCount,
    /// Round winner scores the loser's remaining pips.
    PipPoints,
}

impl std::fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringMode::WinCount => f.write_str("win-count"),
            ScoringMode::PipPoints => f.write_str("pip-points"),
        }
    }
}

/// Match target score. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetScore(u32);

impl TargetScore {
    /// Target used when the configured value is unusable.
    pub const DEFAULT: TargetScore = TargetScore(100);

    /// Validate a target score.
    ///
    /// ```
    /// use rust_dominoes::core::TargetScore;
    ///
    /// assert_eq!(TargetScore::new(3).unwrap().get(), 3);
    /// assert!(TargetScore::new(0).is_err());
    /// assert!(TargetScore::new(-5).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self> {
        if value <= 0 {
            return Err(EngineError::InvalidTargetScore(value.to_string()));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| EngineError::InvalidTargetScore(value.to_string()))
    }

    /// Parse raw user input, falling back to [`TargetScore::DEFAULT`].
    pub fn parse_or_default(input: &str) -> Self {
        match Self::parse(input) {
            Ok(target) => target,
            Err(err) => {
                warn!(%err, default = Self::DEFAULT.get(), "falling back to default target score");
                Self::DEFAULT
            }
        }
    }

    /// Parse raw user input.
    pub fn parse(input: &str) -> Result<Self> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| EngineError::InvalidTargetScore(input.to_string()))?;
        Self::new(value)
    }

    /// The raw target value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for TargetScore {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Who makes decisions for a participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Moves are submitted through the command interface.
    Human,
    /// Moves are chosen by a `MoveStrategy`.
    Computer,
}

/// A named match participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub role: Role,
}

impl Participant {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Human,
        }
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Computer,
        }
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.role == Role::Human
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Score that ends the match.
    pub target: TargetScore,

    /// Round scoring rule.
    pub scoring: ScoringMode,

    /// The two participants, before seat randomization.
    pub participants: [Participant; 2],

    /// Seed for seating, shuffling and computer choices.
    pub seed: u64,

    /// Sort each hand ascending after the deal (display convenience).
    pub sort_hands: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::vs_computer()
    }
}

impl MatchConfig {
    /// One human against the computer.
    #[must_use]
    pub fn vs_computer() -> Self {
        Self {
            target: TargetScore::DEFAULT,
            scoring: ScoringMode::WinCount,
            participants: [Participant::human("Player 1"), Participant::computer("Computer")],
            seed: 42,
            sort_hands: true,
        }
    }

    /// Two humans sharing the table.
    #[must_use]
    pub fn two_player() -> Self {
        Self {
            participants: [Participant::human("Player 1"), Participant::human("Player 2")],
            ..Self::vs_computer()
        }
    }

    /// Computer against computer (simulation, benchmarks).
    #[must_use]
    pub fn computer_only() -> Self {
        Self {
            participants: [Participant::computer("Player 1"), Participant::computer("Player 2")],
            ..Self::vs_computer()
        }
    }

    pub fn with_target(mut self, target: TargetScore) -> Self {
        self.target = target;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_participants(mut self, first: Participant, second: Participant) -> Self {
        self.participants = [first, second];
        self
    }

    pub fn with_sorted_hands(mut self, sort: bool) -> Self {
        self.sort_hands = sort;
        self
    }
}
