//! End-to-end scoring tests for whole games.

use strictly_bowling::{
    BowlingInvariants, ClosedReason, DeliveryError, DeliverySlot, Game, GameScorer, InvariantSet,
    RecordOutcome, ScoreboardView,
};

fn totals(game: &Game) -> Vec<Option<u16>> {
    game.frames().iter().map(|f| f.cumulative_total()).collect()
}

#[test]
fn test_perfect_game() {
    let game = Game::replay(["10"; 12]).expect("Valid game");
    assert!(game.is_over());
    assert_eq!(game.final_score(), Some(300));
    let expected: Vec<Option<u16>> = (1..=10).map(|i| Some(i * 30)).collect();
    assert_eq!(totals(&game), expected);
}

#[test]
fn test_mixed_game() {
    let tokens = [
        "10", "10", "10", "7", "2", "S8", "2", "F", "9", "10", "7", "3", "9", "0", "10", "10",
        "8",
    ];
    let game = Game::replay(tokens).expect("Valid game");
    let expected = [30, 57, 76, 85, 95, 104, 124, 143, 152, 180];
    assert_eq!(totals(&game), expected.map(Some).to_vec());
    assert_eq!(game.final_score(), Some(180));
}

#[test]
fn test_gutter_game() {
    let game = Game::replay(["0"; 20]).expect("Valid game");
    assert_eq!(game.final_score(), Some(0));
    assert!(totals(&game).iter().all(|t| *t == Some(0)));
}

#[test]
fn test_all_spares_with_five() {
    let game = Game::replay(["5"; 21]).expect("Valid game");
    assert_eq!(game.final_score(), Some(150));
}

#[test]
fn test_open_frame_resolves_immediately() {
    let game = Game::replay(["7", "2"]).expect("Valid frame");
    assert_eq!(totals(&game), [Some(9)]);
    assert_eq!(game.running_score(), 9);
    assert_eq!(game.cursor(), 1);
}

#[test]
fn test_spare_waits_for_next_ball() {
    let mut game = Game::replay(["5", "5"]).expect("Valid frame");
    assert_eq!(totals(&game), [None]);
    assert_eq!(game.running_score(), 0);

    // The bonus ball is the first of frame 2, which is still open.
    game.record("3").expect("Valid delivery");
    assert_eq!(game.frames()[0].cumulative_total(), None);
    game.record("4").expect("Valid delivery");
    assert_eq!(totals(&game), [Some(13), Some(20)]);
}

#[test]
fn test_strikes_wait_for_two_balls() {
    let game = Game::replay(["10", "10"]).expect("Valid frames");
    assert_eq!(totals(&game), [None, None]);

    let game = Game::replay(["10", "10", "10"]).expect("Valid frames");
    assert_eq!(totals(&game), [Some(30), None, None]);
    assert_eq!(game.cursor(), 1);
}

#[test]
fn test_last_frame_spare_takes_bonus() {
    let mut tokens = vec!["0"; 18];
    tokens.extend(["5", "3", "7"]);
    let err = Game::replay(&tokens).unwrap_err();
    assert_eq!(err.index, 20);
    assert_eq!(
        err.source,
        DeliveryError::IllegalPosition(ClosedReason::GameOver)
    );

    let mut tokens = vec!["0"; 18];
    tokens.extend(["5", "5", "7"]);
    let game = Game::replay(&tokens).expect("Valid game");
    assert_eq!(game.final_score(), Some(17));
}

#[test]
fn test_last_frame_open_ends_game() {
    let mut tokens = vec!["0"; 18];
    tokens.extend(["5", "3"]);
    let mut game = Game::replay(&tokens).expect("Valid game");
    assert_eq!(game.final_score(), Some(8));
    assert_eq!(
        game.record("7"),
        Err(DeliveryError::IllegalPosition(ClosedReason::GameOver))
    );
}

#[test]
fn test_rejected_token_changes_nothing() {
    let mut game = Game::replay(["10", "4"]).expect("Valid deliveries");
    let before = game.clone();
    for bad in ["7", "S7", "11", "X", "", "S", "S10"] {
        assert!(game.record(bad).is_err(), "{:?} accepted", bad);
        assert_eq!(game, before);
    }
    assert_eq!(game.max_pins(), Some(6));
}

#[test]
fn test_record_outcomes() {
    let mut game = Game::new();
    assert_eq!(game.delivery_slot(), Some(DeliverySlot::First));
    assert!(matches!(
        game.record("4"),
        Ok(RecordOutcome::Continue { .. })
    ));
    assert_eq!(game.delivery_slot(), Some(DeliverySlot::Second));
    assert_eq!(
        game.record("6"),
        Ok(RecordOutcome::FrameComplete { frame: 1, cursor: 0 })
    );
    assert_eq!(
        game.record("10"),
        Ok(RecordOutcome::FrameComplete { frame: 2, cursor: 1 })
    );
    assert_eq!(game.frame_number(), Some(3));
}

#[test]
fn test_replay_reports_first_bad_token() {
    let err = Game::replay(["3", "4", "9", "2", "hello"]).unwrap_err();
    assert_eq!(err.index, 4);
    assert_eq!(err.token, "hello");
    assert!(matches!(err.source, DeliveryError::Malformed(_)));
}

#[test]
fn test_invariants_hold_every_delivery() {
    let tokens = ["F", "10", "S7", "2", "10", "0", "0", "9", "1", "10", "3", "S5", "5", "5"];
    let mut game = Game::new();
    for token in tokens {
        game.record(token).expect("Valid delivery");
        assert!(BowlingInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_scorer_starts_at_first_frame() {
    assert_eq!(GameScorer::new().cursor(), 0);
}

#[test]
fn test_scoreboard_of_finished_game() {
    let game = Game::replay(["10"; 12]).expect("Valid game");
    let board = ScoreboardView::from_game(&game).to_string();
    assert_eq!(board.lines().count(), 4);
    assert!(board.lines().last().is_some_and(|l| l.ends_with("|300        |")));
}
