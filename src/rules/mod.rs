//! Turn resolution for a round.
//!
//! `TurnEngine` owns the rules:
//! - What tiles are legal against the current open ends
//! - How a placement is oriented
//! - The draw-until-playable cascade
//! - Pass tracking and round-end detection (domino or block)
//!
//! Scoring a finished round is described by `RoundResult`; applying the
//! score to the match is the controller's job.

pub mod engine;
pub mod result;

pub use engine::{DrawOutcome, TurnEngine, TurnOutcome};
pub use result::{EndReason, RoundOutcome, RoundResult, RoundSummary, ScoreDelta};
