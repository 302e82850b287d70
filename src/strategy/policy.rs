//! Move selection strategies for computer players.
//!
//! Strategies are trait-based so stronger heuristics can be swapped in
//! without touching the turn engine:
//! - `FirstLegal`: first candidate in hand order (the default)
//! - `HeaviestFirst`: sheds the highest-pip tile
//! - `RandomLegal`: uniform choice among candidates

use crate::core::{GameRng, Move, PlayerId, RoundState};

/// Picks one move from a non-empty candidate list.
///
/// Candidates come from `TurnEngine::candidate_moves`: tiles in hand order,
/// and for a tile matching both ends the tail placement before the head.
/// Returning a move outside `candidates` makes the turn fail with an
/// illegal-move error.
pub trait MoveStrategy: Send {
    /// Choose a move for `player`.
    fn choose(&mut self, round: &RoundState, player: PlayerId, candidates: &[Move]) -> Move;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Plays the first legal tile, with no look-ahead.
#[derive(Clone, Debug, Default)]
pub struct FirstLegal;

impl MoveStrategy for FirstLegal {
    fn choose(&mut self, _round: &RoundState, _player: PlayerId, candidates: &[Move]) -> Move {
        candidates[0]
    }

    fn name(&self) -> &'static str {
        "first-legal"
    }
}

/// Plays the legal tile with the most pips, first in hand order on ties.
///
/// Reduces the pips left in hand if the round blocks.
#[derive(Clone, Debug, Default)]
pub struct HeaviestFirst;

impl MoveStrategy for HeaviestFirst {
    fn choose(&mut self, _round: &RoundState, _player: PlayerId, candidates: &[Move]) -> Move {
        candidates
            .iter()
            .enumerate()
            .max_by_key(|(i, m)| (m.tile.pips(), std::cmp::Reverse(*i)))
            .map(|(_, m)| *m)
            .expect("candidates are non-empty")
    }

    fn name(&self) -> &'static str {
        "heaviest-first"
    }
}

/// Uniformly random candidate, reproducible from a seed.
#[derive(Clone, Debug)]
pub struct RandomLegal {
    rng: GameRng,
}

impl RandomLegal {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveStrategy for RandomLegal {
    fn choose(&mut self, _round: &RoundState, _player: PlayerId, candidates: &[Move]) -> Move {
        *self.rng.choose(candidates).expect("candidates are non-empty")
    }

    fn name(&self) -> &'static str {
        "random-legal"
    }
}
