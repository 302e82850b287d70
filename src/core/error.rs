//! Engine error type.
//!
//! Every error is recoverable: the caller re-prompts, resubmits, or applies
//! a default. Operations that fail leave all state untouched.

use thiserror::Error;

use super::action::End;
use super::player::PlayerId;
use crate::zones::Tile;

/// Errors returned by the engine's commands.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The tile has no face equal to the chosen end's open value
    /// (or to either open value when no end was given).
    #[error("illegal move: {tile} does not match the {}", describe_end(.end))]
    IllegalMove { tile: Tile, end: Option<End> },

    /// The tile matches both open ends, so the caller must pick one.
    #[error("{tile} matches both ends; choose head or tail")]
    EndRequired { tile: Tile },

    /// The tile is not in the acting player's hand.
    #[error("{tile} is not in hand")]
    TileNotInHand { tile: Tile },

    /// A draw produced a playable tile; only that tile may be played.
    #[error("{expected} was just drawn and must be played, got {got}")]
    ForcedTile { expected: Tile, got: Tile },

    /// Draw requested with nothing left to draw.
    #[error("boneyard is empty")]
    EmptyBoneyard,

    /// Draw requested while the player still has a legal tile.
    #[error("cannot draw while a legal move exists")]
    DrawNotAllowed,

    /// Configured target score is non-positive or not a number.
    #[error("invalid target score: {0}")]
    InvalidTargetScore(String),

    /// A command issued in the wrong state (e.g. a move after the round ended).
    #[error("command not valid now: {0}")]
    StateMisuse(&'static str),

    /// A command issued for the seat that is not on turn.
    #[error("{got} acted but it is {expected}'s turn")]
    NotYourTurn { expected: PlayerId, got: PlayerId },

    /// Pip value outside 0..=6.
    #[error("pip value {0} out of range 0..=6")]
    InvalidPip(u8),

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot codec error: {0}")]
    Snapshot(String),
}

fn describe_end(end: &Option<End>) -> String {
    match end {
        Some(end) => format!("{end} end"),
        None => "open ends".to_string(),
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let tile = Tile::new(2, 5);
        assert_eq!(
            EngineError::IllegalMove { tile, end: Some(End::Head) }.to_string(),
            "illegal move: [2|5] does not match the head end"
        );
        assert_eq!(
            EngineError::IllegalMove { tile, end: None }.to_string(),
            "illegal move: [2|5] does not match the open ends"
        );
        assert_eq!(EngineError::EmptyBoneyard.to_string(), "boneyard is empty");
    }
}
