//! Match-level tests through `MatchController`.

use rust_dominoes::core::{EngineError, MatchConfig, PlayerId, ScoringMode, TargetScore};
use rust_dominoes::events::GameEvent;
use rust_dominoes::game::{MatchController, MatchSnapshot, Status};
use rust_dominoes::rules::{RoundOutcome, TurnEngine};
use rust_dominoes::strategy::{HeaviestFirst, RandomLegal};

/// Play computer rounds until the match ends; returns the number of rounds.
fn play_out(controller: &mut MatchController) -> u32 {
    loop {
        match controller.advance().unwrap() {
            Status::RoundOver(_) => {
                controller.continue_match().unwrap();
            }
            Status::MatchOver { .. } => return controller.state().round_number(),
            other => panic!("unexpected status {other:?}"),
        }
    }
}

/// Act for whichever human is on turn: first legal tile, else draw.
fn human_turn(controller: &mut MatchController) -> Status {
    let Status::AwaitingHuman { legal, .. } = controller.status() else {
        panic!("no human on turn");
    };
    match legal.first() {
        Some(&tile) => {
            let end = TurnEngine::legal_ends(controller.round().chain(), tile).first().copied();
            controller.submit_human_move(tile, end).unwrap()
        }
        None => controller.request_draw().unwrap(),
    }
}

#[test]
fn test_win_count_match_ends_on_third_win() {
    for seed in 0..10 {
        let config = MatchConfig::computer_only()
            .with_seed(seed)
            .with_target(TargetScore::new(3).unwrap());
        let mut controller = MatchController::start_match(config);
        play_out(&mut controller);

        let state = controller.state();
        let winner = state.winner().expect("match should have a winner");
        assert_eq!(state.scores()[winner], 3);
        assert!(state.scores()[winner.opponent()] < 3);

        // The match stopped on the round that produced the third win.
        let last = state.summaries().last().unwrap();
        assert_eq!(last.result.outcome, RoundOutcome::Winner(winner));
        let wins = state
            .summaries()
            .iter()
            .filter(|s| s.result.outcome == RoundOutcome::Winner(winner))
            .count();
        assert_eq!(wins, 3);
    }
}

#[test]
fn test_match_ended_follows_last_round() {
    let config = MatchConfig::computer_only()
        .with_seed(7)
        .with_target(TargetScore::new(2).unwrap());
    let mut controller = MatchController::start_match(config);
    play_out(&mut controller);

    let events = controller.drain_events();
    let ended: Vec<&GameEvent> = events.iter().filter(|e| e.is_terminal()).collect();
    assert!(matches!(ended.last(), Some(GameEvent::MatchEnded { .. })));
    assert!(matches!(ended[ended.len() - 2], GameEvent::RoundEnded { .. }));
    assert_eq!(
        events.iter().filter(|e| matches!(e, GameEvent::MatchEnded { .. })).count(),
        1
    );
}

#[test]
fn test_pip_points_scores_sum_of_deltas() {
    let config = MatchConfig::computer_only()
        .with_seed(31)
        .with_scoring(ScoringMode::PipPoints)
        .with_target(TargetScore::new(60).unwrap());
    let mut controller = MatchController::start_match(config)
        .with_strategy(0, Box::new(HeaviestFirst))
        .with_strategy(1, Box::new(RandomLegal::new(5)));
    play_out(&mut controller);

    let state = controller.state();
    let mut totals = [0u32; 2];
    for summary in state.summaries() {
        if let Some(delta) = summary.score_delta {
            let loser = delta.player.opponent();
            assert_eq!(delta.points, summary.result.pips[loser]);
            totals[delta.player.index()] += delta.points;
        }
    }
    assert_eq!(state.scores().as_array(), &totals);
    let winner = state.winner().unwrap();
    assert!(state.scores()[winner] >= 60);
    assert!(state.scores()[winner] >= state.scores()[winner.opponent()]);
}

#[test]
fn test_match_over_rejects_continue() {
    let config = MatchConfig::computer_only()
        .with_seed(2)
        .with_target(TargetScore::new(1).unwrap());
    let mut controller = MatchController::start_match(config);
    play_out(&mut controller);

    assert!(matches!(controller.status(), Status::MatchOver { .. }));
    assert_eq!(
        controller.continue_match(),
        Err(EngineError::StateMisuse("match is over; reset to play again"))
    );

    let status = controller.reset_match();
    assert!(matches!(status, Status::AwaitingComputer { .. }));
    assert_eq!(controller.scores().as_array(), &[0, 0]);
    assert_eq!(controller.state().winner(), None);
}

#[test]
fn test_reset_scores_after_match_over_reopens_match() {
    let config = MatchConfig::computer_only()
        .with_seed(2)
        .with_target(TargetScore::new(1).unwrap());
    let mut controller = MatchController::start_match(config);
    play_out(&mut controller);
    assert!(controller.state().is_over());

    controller.reset_scores();
    assert_eq!(controller.state().winner(), None);
    assert_eq!(controller.scores().as_array(), &[0, 0]);
    assert!(matches!(controller.status(), Status::RoundOver(_)));

    controller.continue_match().unwrap();
    assert_eq!(controller.state().round_number(), 2);
    assert!(!controller.round().is_over());
}

#[test]
fn test_reset_match_reshuffles_seats() {
    let mut changed = 0;
    for seed in 0..32 {
        let mut controller = MatchController::start_match(MatchConfig::vs_computer().with_seed(seed));
        let before = controller.state().seats().clone();

        controller.reset_match();
        assert_eq!(controller.scores().as_array(), &[0, 0]);
        assert_eq!(controller.state().round_number(), 1);
        if controller.state().seats() != &before {
            changed += 1;
        }
    }
    assert!(changed > 0);
    assert!(changed < 32);
}

#[test]
fn test_human_plays_full_round() {
    let config = MatchConfig::vs_computer().with_seed(12);
    let mut controller = MatchController::start_match(config);

    let mut status = controller.advance().unwrap();
    let mut human_turns = 0;
    while let Status::AwaitingHuman { .. } = status {
        human_turns += 1;
        human_turn(&mut controller);
        status = controller.advance().unwrap();
    }

    assert!(human_turns > 0);
    assert!(matches!(status, Status::RoundOver(_)));
    assert_eq!(controller.state().summaries().len(), 1);
}

#[test]
fn test_human_draw_with_legal_tile_rejected() {
    for seed in 0..20 {
        let mut controller = MatchController::start_match(MatchConfig::two_player().with_seed(seed));
        let Status::AwaitingHuman { legal, .. } = controller.status() else {
            panic!("two humans: a human is always on turn");
        };
        // Opening turn: every tile is legal.
        assert_eq!(legal.len(), 10);
        assert_eq!(controller.request_draw(), Err(EngineError::DrawNotAllowed));
    }
}

#[test]
fn test_human_move_not_in_hand_rejected() {
    let mut controller = MatchController::start_match(MatchConfig::two_player().with_seed(4));
    let opponent_tile = controller.round().hand(PlayerId::new(1)).tiles()[0];
    let before = controller.snapshot();

    let err = controller.submit_human_move(opponent_tile, None).unwrap_err();
    assert_eq!(err, EngineError::TileNotInHand { tile: opponent_tile });
    assert_eq!(controller.snapshot(), before);
}

#[test]
fn test_seating_is_randomized_by_seed() {
    let seatings: Vec<String> = (0..16)
        .map(|seed| {
            let controller = MatchController::start_match(MatchConfig::vs_computer().with_seed(seed));
            controller.state().seat(PlayerId::new(0)).name.clone()
        })
        .collect();

    assert!(seatings.iter().any(|n| n == "Player 1"));
    assert!(seatings.iter().any(|n| n == "Computer"));
}

#[test]
fn test_invalid_target_falls_back() {
    assert_eq!(TargetScore::parse_or_default("abc"), TargetScore::DEFAULT);
    assert_eq!(TargetScore::parse_or_default("-5"), TargetScore::DEFAULT);
    assert_eq!(TargetScore::parse_or_default("0"), TargetScore::DEFAULT);
    assert_eq!(TargetScore::parse_or_default(" 25 ").get(), 25);
}

#[test]
fn test_snapshot_survives_bincode() {
    let mut controller = MatchController::start_match(MatchConfig::computer_only().with_seed(77));
    controller.advance().unwrap();

    let snapshot = controller.snapshot();
    let decoded = MatchSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, snapshot);
    assert!(decoded.round_over);
    assert_eq!(decoded.chain.len(), controller.round().chain().len());
}

#[test]
fn test_events_serialize_to_json() {
    let mut controller = MatchController::start_match(MatchConfig::computer_only().with_seed(9));
    controller.advance().unwrap();
    let events = controller.drain_events();

    let json = serde_json::to_string(&events).unwrap();
    let decoded: Vec<GameEvent> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, events);
}
