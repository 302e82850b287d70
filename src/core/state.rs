//! Round and match state.
//!
//! ## RoundState
//!
//! Everything one round owns:
//! - Chain, both hands, boneyard
//! - Turn pointer and the round's single "last action was a pass" flag
//! - Turn phase (awaiting a move, possibly forced, or over)
//! - Action history
//!
//! ## MatchState
//!
//! Seats, cumulative scores, the current round and the summaries of
//! finished rounds.
//!
//! Fields are crate-visible only: the turn engine and match controller are
//! the sole mutators.

use im::Vector;

use super::action::ActionRecord;
use super::config::Participant;
use super::player::{PlayerId, PlayerMap};
use crate::rules::{RoundResult, RoundSummary};
use crate::zones::{Boneyard, Chain, Hand, Tile};

/// Tiles dealt to each player at the start of a round.
pub const HAND_SIZE: usize = 10;

/// Where the round's state machine currently is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the active player's move.
    ///
    /// `forced` is set after a draw turned up a playable tile: that tile is
    /// the only legal move for the rest of the turn.
    AwaitingMove { forced: Option<Tile> },
    /// Terminal: the round ended by domino or block.
    RoundOver(RoundResult),
}

/// State of a single round.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub(crate) chain: Chain,
    pub(crate) hands: PlayerMap<Hand>,
    pub(crate) boneyard: Boneyard,
    pub(crate) active: PlayerId,
    pub(crate) last_was_pass: bool,
    pub(crate) phase: TurnPhase,
    /// Turn number (starts at 1).
    pub(crate) turn_number: u32,
    /// Action sequence within turn.
    pub(crate) action_sequence: u32,
    pub(crate) history: Vector<ActionRecord>,
}

impl RoundState {
    /// Deal a round from a shuffled set: the first [`HAND_SIZE`] tiles go
    /// to seat 0, the next [`HAND_SIZE`] to seat 1, the rest form the
    /// boneyard.
    ///
    /// Panics if fewer than `2 * HAND_SIZE` tiles are supplied.
    #[must_use]
    pub fn deal(tiles: Vec<Tile>, first_to_act: PlayerId, sort_hands: bool) -> Self {
        assert!(tiles.len() >= 2 * HAND_SIZE, "Not enough tiles to deal");

        let mut rest = tiles.into_iter();
        let hands = PlayerMap::from_array([
            rest.by_ref().take(HAND_SIZE).collect::<Vec<_>>(),
            rest.by_ref().take(HAND_SIZE).collect::<Vec<_>>(),
        ]);
        let mut round = Self::from_parts(hands, rest.collect(), first_to_act);

        if sort_hands {
            for (_, hand) in round.hands.iter_mut() {
                hand.sort_for_display();
            }
        }
        round
    }

    /// Build a round from explicit hands and boneyard.
    ///
    /// The chain starts empty, no pass is recorded, and `first_to_act` is
    /// awaiting a move. The first boneyard entry is drawn first.
    #[must_use]
    pub fn from_parts(hands: PlayerMap<Vec<Tile>>, boneyard: Vec<Tile>, first_to_act: PlayerId) -> Self {
        Self {
            chain: Chain::new(),
            hands: hands.map(|tiles| {
                let mut hand = Hand::new();
                hand.add_tiles(tiles.iter().copied());
                hand
            }),
            boneyard: Boneyard::new(boneyard),
            active: first_to_act,
            last_was_pass: false,
            phase: TurnPhase::AwaitingMove { forced: None },
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    #[must_use]
    pub fn boneyard(&self) -> &Boneyard {
        &self.boneyard
    }

    /// Seat on turn.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Was the most recent turn a pass?
    #[must_use]
    pub fn last_action_was_pass(&self) -> bool {
        self.last_was_pass
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Tile that must be played this turn, if a draw produced one.
    #[must_use]
    pub fn forced_tile(&self) -> Option<Tile> {
        match self.phase {
            TurnPhase::AwaitingMove { forced } => forced,
            TurnPhase::RoundOver(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::RoundOver(_))
    }

    /// The round's result once it is over.
    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        match &self.phase {
            TurnPhase::RoundOver(result) => Some(result),
            TurnPhase::AwaitingMove { .. } => None,
        }
    }

    /// Pips across hands, boneyard and chain. Constant for the whole round.
    #[must_use]
    pub fn total_pips(&self) -> u32 {
        self.hands.iter().map(|(_, h)| h.total_pips()).sum::<u32>()
            + self.boneyard.total_pips()
            + self.chain.total_pips()
    }

    /// Tiles across hands, boneyard and chain.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.hands.iter().map(|(_, h)| h.len()).sum::<usize>() + self.boneyard.len() + self.chain.len()
    }

    /// Record an action in history.
    pub(crate) fn record(&mut self, player: PlayerId, action: super::action::Action) {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, seq));
    }

    /// Hand the turn to the other seat.
    pub(crate) fn advance_turn(&mut self) {
        self.active = self.active.opponent();
        self.turn_number += 1;
        self.action_sequence = 0;
        self.phase = TurnPhase::AwaitingMove { forced: None };
    }
}

/// State of a whole match.
#[derive(Clone, Debug)]
pub struct MatchState {
    /// Participant in each seat. Seat 0 acts first every round.
    pub(crate) seats: PlayerMap<Participant>,
    /// Index into the configured participants for each seat.
    pub(crate) seat_order: PlayerMap<usize>,
    pub(crate) scores: PlayerMap<u32>,
    pub(crate) round: RoundState,
    /// Current round number (starts at 1).
    pub(crate) round_number: u32,
    pub(crate) summaries: Vec<RoundSummary>,
    pub(crate) winner: Option<PlayerId>,
}

impl MatchState {
    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &Participant {
        &self.seats[player]
    }

    #[must_use]
    pub fn seats(&self) -> &PlayerMap<Participant> {
        &self.seats
    }

    /// Which configured participant (0 or 1) sits in `player`'s seat.
    #[must_use]
    pub fn participant_index(&self, player: PlayerId) -> usize {
        self.seat_order[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Summaries of every finished round, oldest first.
    #[must_use]
    pub fn summaries(&self) -> &[RoundSummary] {
        &self.summaries
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
