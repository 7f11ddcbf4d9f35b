//! Match driver tests.
//!
//! These tests run whole matches through `Session`:
//! - Matches configured in JSON
//! - Transcripts that replay to the recorded result
//! - The move cap on games that can loop

use std::io::Write;

use rust_minimax::core::{GameError, PlayerId};
use rust_minimax::games::{State, Variant};
use rust_minimax::play::{MatchConfig, Session, Transcript};
use rust_minimax::strategy::{Interactive, RecursiveMinimax, StrategyKind};

#[test]
fn test_config_file_match() {
    let path = std::env::temp_dir().join(format!("rust-minimax-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{
            "variant": {{ "game": "subtract_square", "start": 14 }},
            "first_player": "p2",
            "p1": "random",
            "p2": "recursive-minimax",
            "seed": 3
        }}"#
    )
    .unwrap();
    drop(file);

    let config = MatchConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    // 14 is a win for the player to move, who is p2
    let outcome = Session::run(&config).unwrap();
    assert_eq!(outcome.winner, Some(PlayerId::P2));
    assert_eq!(outcome.transcript.steps[0].player, PlayerId::P2);
}

#[test]
fn test_transcript_replays_and_serializes() {
    let config = MatchConfig::new()
        .with_variant(Variant::subtract_square(30))
        .with_strategy(PlayerId::P1, StrategyKind::Random)
        .with_strategy(PlayerId::P2, StrategyKind::RoughOutcome)
        .with_seed(8);

    let outcome = Session::run(&config).unwrap();
    let transcript = &outcome.transcript;

    let replayed = transcript.replay().unwrap();
    assert_eq!(replayed.state(), &transcript.end);
    assert_eq!(replayed.winner(), outcome.winner);

    let json = transcript.to_json().unwrap();
    assert_eq!(&Transcript::<State>::from_json(&json).unwrap(), transcript);
}

#[test]
fn test_players_alternate() {
    let config = MatchConfig::new()
        .with_variant(Variant::subtract_square(40))
        .with_strategy(PlayerId::P1, StrategyKind::Random)
        .with_strategy(PlayerId::P2, StrategyKind::Random);

    let outcome = Session::run(&config).unwrap();
    for pair in outcome.transcript.steps.windows(2) {
        assert_eq!(pair[1].player, pair[0].player.other());
        assert_eq!(pair[1].move_number, pair[0].move_number + 1);
    }
}

#[test]
fn test_looping_game_is_capped() {
    let config = MatchConfig::new()
        .with_variant(Variant::chopsticks())
        .with_strategy(PlayerId::P1, StrategyKind::RoughOutcome)
        .with_strategy(PlayerId::P2, StrategyKind::Random)
        .with_max_moves(25);

    let outcome = Session::run(&config).unwrap();
    assert!(outcome.move_count() <= 25);
    if outcome.winner.is_none() {
        assert_eq!(outcome.move_count(), 25);
    }
}

#[test]
fn test_minimax_on_cyclic_game_is_refused() {
    let config = MatchConfig::new()
        .with_variant(Variant::chopsticks())
        .with_strategy(PlayerId::P1, StrategyKind::IterativeMinimax)
        .with_strategy(PlayerId::P2, StrategyKind::Random);

    let err = Session::run(&config).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("p1"));
}

/// A scripted human loses to minimax from a lost position.
#[test]
fn test_scripted_human_against_minimax() {
    let game = Variant::subtract_square(7).build(PlayerId::P1).unwrap();
    // 7 -> 6 (human), 6 -> 5 (minimax), 5 -> 4 (human), 4 -> 0 (minimax)
    let mut human = Interactive::new("1\n1\n".as_bytes(), Vec::new());

    let outcome = Session::new(0).play(game, &mut human, &mut RecursiveMinimax).unwrap();
    assert_eq!(outcome.winner, Some(PlayerId::P2));
    assert_eq!(outcome.move_count(), 4);
}

/// The human stopping mid-game ends the match with an error.
#[test]
fn test_closed_input_aborts_match() {
    let game = Variant::subtract_square(7).build(PlayerId::P1).unwrap();
    let mut human = Interactive::new("".as_bytes(), Vec::new());

    let result = Session::default().play(game, &mut human, &mut RecursiveMinimax);
    assert!(matches!(result, Err(GameError::InputClosed)));
}
