//! Game rules tests.
//!
//! These tests exercise both games through the public `Game` wrapper:
//! - Legal move generation and application
//! - Terminal positions and winners
//! - Move parsing and error reporting

use rust_minimax::core::{GameError, Hand, Move, PlayerId};
use rust_minimax::games::{ChopState, State, SubtractState, Variant};
use rust_minimax::rules::{Game, Position};

fn subtract(to_move: PlayerId, value: u32) -> Game {
    Game::new(State::from(SubtractState::new(to_move, value)))
}

fn chop(to_move: PlayerId, p1: [u8; 2], p2: [u8; 2]) -> Game {
    Game::new(State::from(ChopState::new(to_move, p1, p2).unwrap()))
}

/// Value 8 allows subtracting 1 or 4 only.
#[test]
fn test_subtract_eight() {
    let mut game = subtract(PlayerId::P1, 8);

    let moves: Vec<String> = game.legal_moves().iter().map(ToString::to_string).collect();
    assert_eq!(moves, vec!["1", "4"]);

    game.apply_move(&Move::Subtract(1)).unwrap();
    assert_eq!(game.state(), &State::from(SubtractState::new(PlayerId::P2, 7)));
    assert_eq!(game.current_player(), PlayerId::P2);
}

/// Subtracting a non-square is rejected and leaves the game unchanged.
#[test]
fn test_subtract_illegal_move() {
    let mut game = subtract(PlayerId::P1, 8);
    let before = game.clone();

    let err = game.apply_move(&Move::Subtract(8)).unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { mv: Move::Subtract(8), .. }));
    assert_eq!(game, before);
}

/// Parsing and legality are separate steps.
#[test]
fn test_parse_then_apply() {
    let game = subtract(PlayerId::P1, 8);

    let mv = game.str_to_move(" 8 ").unwrap();
    assert_eq!(mv, Move::Subtract(8));
    assert!(!game.is_legal(&mv));
    assert!(game.play(&mv).is_err());

    assert!(matches!(
        game.str_to_move("four"),
        Err(GameError::InvalidMoveSyntax { .. })
    ));
    assert!(matches!(game.str_to_move("-1"), Err(GameError::InvalidMoveSyntax { .. })));
}

/// A player at 0 has lost.
#[test]
fn test_subtract_terminal() {
    let game = subtract(PlayerId::P1, 0);

    assert!(game.legal_moves().is_empty());
    assert!(game.is_over());
    assert!(game.is_winner(PlayerId::P2));
    assert!(!game.is_winner(PlayerId::P1));
    assert_eq!(game.winner(), Some(PlayerId::P2));
}

/// Tapping adds the attacking hand to the target hand.
#[test]
fn test_chopsticks_tap() {
    let game = chop(PlayerId::P1, [1, 0], [1, 2]);

    let moves: Vec<String> = game.legal_moves().iter().map(ToString::to_string).collect();
    assert_eq!(moves, vec!["ll", "lr"]);

    let next = game.play(&Move::chop(Hand::Left, Hand::Left)).unwrap();
    assert_eq!(next.state(), &State::from(ChopState::new(PlayerId::P2, [1, 0], [2, 2]).unwrap()));
    assert_eq!(next.current_player(), PlayerId::P2);
    // `game` itself is untouched
    assert_eq!(game.current_player(), PlayerId::P1);
}

/// Reaching exactly five fingers empties a hand.
#[test]
fn test_chopsticks_wraps_to_zero() {
    let game = chop(PlayerId::P1, [2, 1], [3, 1]);
    let next = game.play(&Move::chop(Hand::Left, Hand::Left)).unwrap();

    assert_eq!(next.state(), &State::from(ChopState::new(PlayerId::P2, [2, 1], [0, 1]).unwrap()));
}

/// Two empty hands lose.
#[test]
fn test_chopsticks_terminal() {
    let game = chop(PlayerId::P2, [3, 2], [0, 0]);

    assert!(game.is_over());
    assert_eq!(game.winner(), Some(PlayerId::P1));
}

/// Moving with an empty hand is illegal.
#[test]
fn test_chopsticks_empty_hand_cannot_tap() {
    let game = chop(PlayerId::P1, [0, 3], [1, 1]);

    assert!(!game.is_legal(&Move::chop(Hand::Left, Hand::Right)));
    assert!(game.play(&Move::chop(Hand::Left, Hand::Right)).is_err());
    assert!(game.is_legal(&Move::chop(Hand::Right, Hand::Right)));
}

#[test]
fn test_chopsticks_parse() {
    let game = Variant::chopsticks().build(PlayerId::P1).unwrap();

    assert_eq!(game.str_to_move("lR").unwrap(), Move::chop(Hand::Left, Hand::Right));
    for bad in ["", "l", "lrl", "xy", "12"] {
        assert!(
            matches!(game.str_to_move(bad), Err(GameError::InvalidMoveSyntax { .. })),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn test_hand_validation() {
    assert!(matches!(
        ChopState::new(PlayerId::P1, [1, 5], [1, 1]),
        Err(GameError::InvalidHand { value: 5 })
    ));
}

/// Chopsticks positions compare by hands alone.
#[test]
fn test_chopsticks_equality_ignores_turn() {
    let p1_to_move = ChopState::new(PlayerId::P1, [1, 2], [3, 4]).unwrap();
    let p2_to_move = ChopState::new(PlayerId::P2, [1, 2], [3, 4]).unwrap();
    assert_eq!(p1_to_move, p2_to_move);

    // Subtract-square includes the turn
    assert_ne!(SubtractState::new(PlayerId::P1, 3), SubtractState::new(PlayerId::P2, 3));
}

/// Move generation is repeatable.
#[test]
fn test_legal_moves_idempotent() {
    for game in [subtract(PlayerId::P1, 50), chop(PlayerId::P2, [1, 3], [2, 4])] {
        assert_eq!(game.legal_moves(), game.legal_moves());
    }
}

#[test]
fn test_display() {
    assert_eq!(
        subtract(PlayerId::P1, 8).to_string(),
        "The current player is p1 and the current value is 8."
    );
    assert_eq!(
        chop(PlayerId::P1, [1, 1], [2, 3]).to_string(),
        "Player 1: 1-1; Player 2: 2-3, the current player is p1."
    );
}

#[test]
fn test_instructions_mention_rules() {
    let subtract = Variant::subtract_square(5).build(PlayerId::P1).unwrap();
    let chopsticks = Variant::chopsticks().build(PlayerId::P1).unwrap();

    assert!(subtract.instructions().contains("square"));
    assert!(chopsticks.instructions().contains("hand"));
    assert_ne!(subtract.instructions(), chopsticks.instructions());
}

#[test]
fn test_state_serialization() {
    let state = State::from(ChopState::new(PlayerId::P2, [0, 4], [3, 1]).unwrap());
    let json = serde_json::to_string(&state).unwrap();
    let back: State = serde_json::from_str(&json).unwrap();

    assert_eq!(back, state);
    assert_eq!(back.current_player(), PlayerId::P2);
}
