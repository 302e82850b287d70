//! Match lifecycle: seating, dealing, turn dispatch, scoring and
//! continuation.
//!
//! The controller is the only owner of match state. Presentation code talks
//! to it through commands (`submit_human_move`, `request_draw`,
//! `continue_match`, `reset_match`) and reads back `Status`, `MatchState`
//! and drained `GameEvent`s.
//!
//! Human turns are the single suspension point: `advance` runs computer
//! turns until a human has to act, then returns
//! `Status::AwaitingHuman` and waits for the next command.

use tracing::{debug, info};

use crate::core::error::{EngineError, Result};
use crate::core::{
    End, GameRng, MatchConfig, MatchState, Move, Participant, PlayerId, PlayerMap, RoundState,
};
use crate::events::{EventSink, GameEvent};
use crate::rules::{DrawOutcome, RoundOutcome, RoundResult, RoundSummary, TurnEngine, TurnOutcome};
use crate::strategy::{FirstLegal, MoveStrategy};
use crate::zones::{Tile, TileSet};

use super::snapshot::MatchSnapshot;

/// What the match is waiting for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// A human seat is on turn. `legal` is empty when the player must draw.
    AwaitingHuman {
        player: PlayerId,
        legal: Vec<Tile>,
        forced: Option<Tile>,
    },
    /// A computer seat is on turn; call `step` or `advance`.
    AwaitingComputer { player: PlayerId },
    /// The round is scored; call `continue_match` or `reset_match`.
    RoundOver(RoundSummary),
    /// Someone reached the target; only `reset_match` is valid.
    MatchOver {
        winner: PlayerId,
        final_scores: PlayerMap<u32>,
    },
}

/// Owns a match from start to reset.
pub struct MatchController {
    config: MatchConfig,
    state: MatchState,
    engine: TurnEngine,
    /// One strategy per configured participant (not per seat).
    strategies: [Box<dyn MoveStrategy>; 2],
    seat_rng: GameRng,
    deal_rng: GameRng,
    events: Vec<GameEvent>,
}

impl MatchController {
    /// Start a match: seat the participants at random and deal round 1.
    ///
    /// Both computer participants use [`FirstLegal`] until replaced with
    /// [`MatchController::with_strategy`].
    #[must_use]
    pub fn start_match(config: MatchConfig) -> Self {
        let root = GameRng::new(config.seed);
        let mut seat_rng = root.for_context("seats");
        let mut deal_rng = root.for_context("deal");
        let mut events = Vec::new();
        let state = Self::new_match_state(&config, &mut seat_rng, &mut deal_rng, &mut events);

        Self {
            config,
            state,
            engine: TurnEngine::new(),
            strategies: [Box::new(FirstLegal), Box::new(FirstLegal)],
            seat_rng,
            deal_rng,
            events,
        }
    }

    /// Replace the strategy of configured participant `participant` (0 or 1).
    #[must_use]
    pub fn with_strategy(mut self, participant: usize, strategy: Box<dyn MoveStrategy>) -> Self {
        assert!(participant < 2, "Participant index out of range");
        self.strategies[participant] = strategy;
        self
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.state.round
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.state.scores
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current status, without changing anything.
    #[must_use]
    pub fn status(&self) -> Status {
        if let Some(winner) = self.state.winner {
            return Status::MatchOver {
                winner,
                final_scores: self.state.scores.clone(),
            };
        }
        let round = &self.state.round;
        if round.is_over() {
            if let Some(summary) = self.state.summaries.last() {
                return Status::RoundOver(summary.clone());
            }
        }

        let player = round.active_player();
        if self.state.seats[player].is_human() {
            Status::AwaitingHuman {
                player,
                legal: self.engine.legal_tiles(round, player),
                forced: round.forced_tile(),
            }
        } else {
            Status::AwaitingComputer { player }
        }
    }

    /// Plain-data view for presentation layers.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.config, &self.state)
    }

    // === Turn commands ===

    /// Resolve exactly one computer turn.
    ///
    /// Fails with `StateMisuse` when no computer seat is on turn.
    pub fn step(&mut self) -> Result<Status> {
        let Status::AwaitingComputer { player } = self.status() else {
            return Err(EngineError::StateMisuse("no computer turn pending"));
        };

        let participant = self.state.participant_index(player);
        let strategy = self.strategies[participant].as_mut();
        let outcome = self
            .engine
            .take_turn(&mut self.state.round, strategy, &mut self.events)?;
        self.after_turn(outcome);
        Ok(self.status())
    }

    /// Run computer turns until a human must act or the round ends.
    pub fn advance(&mut self) -> Result<Status> {
        loop {
            match self.status() {
                Status::AwaitingComputer { .. } => {
                    self.step()?;
                }
                other => return Ok(other),
            }
        }
    }

    /// Play a tile for the human on turn.
    ///
    /// `end` is required only when the tile matches both open ends.
    pub fn submit_human_move(&mut self, tile: Tile, end: Option<End>) -> Result<Status> {
        let player = self.human_on_turn()?;
        let outcome = self.engine.play(
            &mut self.state.round,
            player,
            Move { tile, end },
            &mut self.events,
        )?;
        self.after_turn(outcome);
        Ok(self.status())
    }

    /// Draw for the human on turn, who has no legal tile.
    ///
    /// With an empty boneyard this records a pass instead.
    pub fn request_draw(&mut self) -> Result<Status> {
        let player = self.human_on_turn()?;
        let outcome = self
            .engine
            .draw(&mut self.state.round, player, &mut self.events)?;
        if let DrawOutcome::Passed(outcome) = outcome {
            self.after_turn(outcome);
        }
        Ok(self.status())
    }

    // === Match commands ===

    /// Deal the next round with the same seats and carried-over scores.
    pub fn continue_match(&mut self) -> Result<Status> {
        if self.state.is_over() {
            return Err(EngineError::StateMisuse("match is over; reset to play again"));
        }
        if !self.state.round.is_over() {
            return Err(EngineError::StateMisuse("round still in progress"));
        }

        self.state.round_number += 1;
        self.state.round = Self::deal_round(
            &self.config,
            &self.state.seats,
            self.state.round_number,
            &mut self.deal_rng,
            &mut self.events,
        );
        Ok(self.status())
    }

    /// Start over: zero scores, reseat at random, deal round 1.
    pub fn reset_match(&mut self) -> Status {
        info!("match reset");
        self.state = Self::new_match_state(
            &self.config,
            &mut self.seat_rng,
            &mut self.deal_rng,
            &mut self.events,
        );
        self.status()
    }

    /// Zero both scores without reseating or redealing.
    ///
    /// Clears a decided match as well; the finished round can then be
    /// followed with `continue_match`.
    pub fn reset_scores(&mut self) {
        self.state.scores = PlayerMap::with_value(0);
        self.state.winner = None;
    }

    // === Internals ===

    fn human_on_turn(&self) -> Result<PlayerId> {
        match self.status() {
            Status::AwaitingHuman { player, .. } => Ok(player),
            Status::AwaitingComputer { .. } => {
                Err(EngineError::StateMisuse("a computer seat is on turn"))
            }
            Status::RoundOver(_) => Err(EngineError::StateMisuse("round is over")),
            Status::MatchOver { .. } => Err(EngineError::StateMisuse("match is over")),
        }
    }

    fn after_turn(&mut self, outcome: TurnOutcome) {
        if let TurnOutcome::RoundOver(result) = outcome {
            self.finish_round(result);
        }
    }

    /// Score a finished round and check for a match winner.
    fn finish_round(&mut self, result: RoundResult) {
        let delta = result.score_delta(self.config.scoring);
        if let Some(delta) = delta {
            self.state.scores[delta.player] += delta.points;
        }

        info!(
            round = self.state.round_number,
            reason = %result.reason,
            outcome = ?result.outcome,
            scores = ?self.state.scores.as_array(),
            "round ended"
        );
        self.events.emit(GameEvent::RoundEnded {
            outcome: result.outcome,
            reason: result.reason,
            score_delta: delta,
        });

        self.state.summaries.push(RoundSummary {
            round_number: self.state.round_number,
            chain: self.state.round.chain().to_string(),
            result: result.clone(),
            score_delta: delta,
        });

        if let Some(winner) = self.check_match_win(result.outcome) {
            self.state.winner = Some(winner);
            info!(winner = %self.state.seats[winner].name, scores = ?self.state.scores.as_array(), "match over");
            self.events.emit(GameEvent::MatchEnded {
                winner,
                final_scores: self.state.scores.clone(),
            });
        }
    }

    /// Winner once either score reaches the target.
    ///
    /// Higher score wins; an exact tie goes to the winner of the round just
    /// scored, and a tie after a drawn round keeps the match going.
    fn check_match_win(&self, last_round: RoundOutcome) -> Option<PlayerId> {
        let target = self.config.target.get();
        let scores = &self.state.scores;
        if !scores.iter().any(|(_, &s)| s >= target) {
            return None;
        }

        let [s0, s1] = *scores.as_array();
        match s0.cmp(&s1) {
            std::cmp::Ordering::Greater => Some(PlayerId::new(0)),
            std::cmp::Ordering::Less => Some(PlayerId::new(1)),
            std::cmp::Ordering::Equal => last_round.winner(),
        }
    }

    fn new_match_state(
        config: &MatchConfig,
        seat_rng: &mut GameRng,
        deal_rng: &mut GameRng,
        events: &mut Vec<GameEvent>,
    ) -> MatchState {
        let mut order = [0usize, 1];
        seat_rng.shuffle(&mut order);
        let seat_order = PlayerMap::from_array(order);
        let seats: PlayerMap<Participant> = seat_order.map(|&i| config.participants[i].clone());
        info!(
            first = %seats[PlayerId::new(0)].name,
            second = %seats[PlayerId::new(1)].name,
            target = config.target.get(),
            scoring = %config.scoring,
            "match started"
        );

        let round = Self::deal_round(config, &seats, 1, deal_rng, events);
        MatchState {
            seats,
            seat_order,
            scores: PlayerMap::with_value(0),
            round,
            round_number: 1,
            summaries: Vec::new(),
            winner: None,
        }
    }

    fn deal_round(
        config: &MatchConfig,
        seats: &PlayerMap<Participant>,
        round_number: u32,
        rng: &mut GameRng,
        events: &mut Vec<GameEvent>,
    ) -> RoundState {
        let first_to_act = PlayerId::new(0);
        let round = RoundState::deal(TileSet::shuffled(rng), first_to_act, config.sort_hands);
        debug!(round = round_number, boneyard = round.boneyard().len(), "round dealt");
        events.emit(GameEvent::RoundStarted {
            round: round_number,
            players: seats.clone(),
            first_to_act,
        });
        round
    }
}
