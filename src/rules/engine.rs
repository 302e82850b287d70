//! The turn state machine.
//!
//! ```text
//! AwaitingMove ──play──────────────────────────► AwaitingMove (other seat) | RoundOver
//!      │
//!      ├──draw (no legal tile, boneyard left)──► AwaitingMove { forced } ──play──► ...
//!      │                                    └──► pass (boneyard ran out)
//!      └──pass (no legal tile, boneyard empty)─► AwaitingMove (other seat) | RoundOver
//! ```
//!
//! Each command either applies completely or returns an error and leaves
//! the round untouched.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::error::{EngineError, Result};
use crate::core::{Action, End, Move, PlayerId, PlayerMap, RoundState, TurnPhase};
use crate::events::{EventSink, GameEvent};
use crate::strategy::MoveStrategy;
use crate::zones::{Chain, Tile};

use super::result::RoundResult;

/// Where the round stands after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn passed to `next`.
    Continue { next: PlayerId },
    /// The round is over.
    RoundOver(RoundResult),
}

/// Result of a draw request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The last tile drawn is playable and is now the only legal move.
    Playable { tile: Tile },
    /// Nothing playable turned up; the turn was passed.
    Passed(TurnOutcome),
}

/// Rules for resolving turns.
#[derive(Clone, Copy, Debug, Default)]
pub struct TurnEngine;

impl TurnEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Ends of `chain` where `tile` may be laid, tail first.
    ///
    /// Empty for an unmatched tile. On an empty chain a single `Tail` entry
    /// stands for the opening placement.
    #[must_use]
    pub fn legal_ends(chain: &Chain, tile: Tile) -> SmallVec<[End; 2]> {
        let mut ends = SmallVec::new();
        if chain.is_empty() {
            ends.push(End::Tail);
            return ends;
        }
        for end in [End::Tail, End::Head] {
            if chain.accepts(tile, end) {
                ends.push(end);
            }
        }
        ends
    }

    /// Tiles `player` may legally play, in hand order.
    ///
    /// Every tile is legal on an empty chain. After a draw produced a
    /// playable tile, only that tile is legal.
    #[must_use]
    pub fn legal_tiles(&self, round: &RoundState, player: PlayerId) -> Vec<Tile> {
        if let Some(forced) = round.forced_tile() {
            return vec![forced];
        }
        let chain = &round.chain;
        let tiles: Vec<Tile> = round.hands[player]
            .tiles()
            .iter()
            .copied()
            .filter(|&t| chain.accepts_anywhere(t))
            .collect();
        trace!(%player, legal = tiles.len(), head = ?chain.head(), tail = ?chain.tail(), "legal tiles");
        tiles
    }

    /// Every legal (tile, end) pair for `player`.
    ///
    /// The opening move has `end: None`. A tile matching both ends yields
    /// its tail placement before its head placement.
    #[must_use]
    pub fn candidate_moves(&self, round: &RoundState, player: PlayerId) -> Vec<Move> {
        let chain = &round.chain;
        let mut moves = Vec::new();
        for tile in self.legal_tiles(round, player) {
            if chain.is_empty() {
                moves.push(Move::any_end(tile));
                continue;
            }
            for end in Self::legal_ends(chain, tile) {
                moves.push(Move::on(tile, end));
            }
        }
        moves
    }

    /// Play `mv` for `player`.
    ///
    /// The end may be omitted when the tile matches exactly one open value
    /// (or the chain is empty). A tile matching both ends, including the
    /// case `head == tail`, needs an explicit end.
    pub fn play(
        &self,
        round: &mut RoundState,
        player: PlayerId,
        mv: Move,
        events: &mut impl EventSink,
    ) -> Result<TurnOutcome> {
        let forced = Self::check_awaiting(round, player)?;
        let tile = mv.tile;

        if let Some(expected) = forced {
            if expected != tile {
                return Err(EngineError::ForcedTile { expected, got: tile });
            }
        }
        if !round.hands[player].contains(tile) {
            return Err(EngineError::TileNotInHand { tile });
        }
        let end = Self::resolve_end(&round.chain, mv)?;

        round.hands[player].remove_tile(tile)?;
        let placed = round.chain.place(tile, end)?;
        round.last_was_pass = false;
        round.record(player, Action::Play { placed, end });

        let new_head = round.chain.head().unwrap_or(placed.left);
        let new_tail = round.chain.tail().unwrap_or(placed.right);
        debug!(%player, %placed, %end, new_head, new_tail, "tile played");
        events.emit(GameEvent::TilePlayed {
            player,
            tile: placed,
            end,
            new_head,
            new_tail,
        });

        if round.hands[player].is_empty() {
            let result = RoundResult::domino(player, Self::pips(round));
            debug!(%player, "domino");
            round.phase = TurnPhase::RoundOver(result.clone());
            return Ok(TurnOutcome::RoundOver(result));
        }

        round.advance_turn();
        Ok(TurnOutcome::Continue { next: round.active })
    }

    /// Draw for `player`, who has no legal tile.
    ///
    /// Draws one tile at a time until one is playable or the boneyard runs
    /// out. Drawn tiles stay in hand either way. With nothing to draw the
    /// turn passes immediately.
    pub fn draw(
        &self,
        round: &mut RoundState,
        player: PlayerId,
        events: &mut impl EventSink,
    ) -> Result<DrawOutcome> {
        if Self::check_awaiting(round, player)?.is_some() {
            return Err(EngineError::StateMisuse("a drawn tile must be played"));
        }
        if !self.legal_tiles(round, player).is_empty() {
            return Err(EngineError::DrawNotAllowed);
        }

        loop {
            let tile = match round.boneyard.draw() {
                Ok(tile) => tile,
                Err(EngineError::EmptyBoneyard) => {
                    debug!(%player, "nothing to draw");
                    return Ok(DrawOutcome::Passed(self.pass(round, player, events)));
                }
                Err(err) => return Err(err),
            };

            round.hands[player].add(tile);
            round.record(player, Action::Draw { tile });
            let boneyard_remaining = round.boneyard.len();
            debug!(%player, %tile, boneyard_remaining, "tile drawn");
            events.emit(GameEvent::TileDrawn {
                player,
                tile,
                boneyard_remaining,
            });

            if round.chain.accepts_anywhere(tile) {
                round.phase = TurnPhase::AwaitingMove { forced: Some(tile) };
                return Ok(DrawOutcome::Playable { tile });
            }
        }
    }

    /// Resolve a whole computer turn: play, or draw then play, or pass.
    pub fn take_turn(
        &self,
        round: &mut RoundState,
        strategy: &mut dyn MoveStrategy,
        events: &mut impl EventSink,
    ) -> Result<TurnOutcome> {
        let player = round.active;
        Self::check_awaiting(round, player)?;

        let mut candidates = self.candidate_moves(round, player);
        if candidates.is_empty() {
            match self.draw(round, player, events)? {
                DrawOutcome::Playable { .. } => candidates = self.candidate_moves(round, player),
                DrawOutcome::Passed(outcome) => return Ok(outcome),
            }
        }

        let mv = strategy.choose(round, player, &candidates);
        trace!(%player, strategy = strategy.name(), ?mv, "strategy choice");
        self.play(round, player, mv, events)
    }

    /// Record a pass; a second consecutive pass blocks the round.
    fn pass(&self, round: &mut RoundState, player: PlayerId, events: &mut impl EventSink) -> TurnOutcome {
        round.record(player, Action::Pass);
        events.emit(GameEvent::TurnPassed { player });

        if round.last_was_pass {
            let result = RoundResult::block(Self::pips(round));
            debug!(%player, outcome = ?result.outcome, "round blocked");
            round.phase = TurnPhase::RoundOver(result.clone());
            return TurnOutcome::RoundOver(result);
        }

        debug!(%player, "turn passed");
        round.last_was_pass = true;
        round.advance_turn();
        TurnOutcome::Continue { next: round.active }
    }

    /// Ensure the round awaits a move from `player`; returns any forced tile.
    fn check_awaiting(round: &RoundState, player: PlayerId) -> Result<Option<Tile>> {
        let TurnPhase::AwaitingMove { forced } = round.phase else {
            return Err(EngineError::StateMisuse("round is over"));
        };
        if round.active != player {
            return Err(EngineError::NotYourTurn {
                expected: round.active,
                got: player,
            });
        }
        Ok(forced)
    }

    fn resolve_end(chain: &Chain, mv: Move) -> Result<End> {
        if chain.is_empty() {
            return Ok(mv.end.unwrap_or(End::Tail));
        }
        let ends = Self::legal_ends(chain, mv.tile);
        match (mv.end, ends.as_slice()) {
            (Some(end), _) if ends.contains(&end) => Ok(end),
            (Some(end), _) => Err(EngineError::IllegalMove { tile: mv.tile, end: Some(end) }),
            (None, []) => Err(EngineError::IllegalMove { tile: mv.tile, end: None }),
            (None, [only]) => Ok(*only),
            (None, _) => Err(EngineError::EndRequired { tile: mv.tile }),
        }
    }

    fn pips(round: &RoundState) -> PlayerMap<u32> {
        round.hands.map(|hand| hand.total_pips())
    }
}
