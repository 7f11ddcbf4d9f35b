//! Iterative minimax move selection.
//!
//! Same answer as `recursive_minimax`, but each root move is scored by
//! building an explicit `SearchTree`, so native stack depth stays constant
//! no matter how long the lines of play are. The whole subtree is kept in
//! memory until its score is read.

use crate::core::Move;
use crate::rules::{Game, Position, Score};

use super::recursive::select;
use super::tree::SearchTree;

/// Pick a move for the player to move using explicit-stack tree evaluation.
///
/// Applies the same tie-break as `recursive_minimax`: the first forced
/// win, else the first legal move. Returns `None` only when the game is
/// already over.
pub fn iterative_minimax<S: Position>(game: &Game<S>) -> Option<Move> {
    let scored: Vec<(Move, Score)> = game
        .successors()
        .map(|(mv, next)| (mv, -tree_score(next, &mv)))
        .collect();

    select(&scored)
}

/// Score `game` for its player to move by evaluating its full tree.
fn tree_score<S: Position>(game: Game<S>, mv: &Move) -> Score {
    let tree = SearchTree::evaluate(game);
    let stats = tree.stats();
    log::debug!(
        "iterative minimax: {} scores {} ({} nodes, depth {}, peak stack {})",
        mv,
        -tree.root_score(),
        stats.node_count,
        stats.max_depth,
        stats.peak_stack
    );
    tree.root_score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Hand, PlayerId};
    use crate::games::{ChopState, State, SubtractState};
    use crate::search::recursive_minimax;

    fn subtract(value: u32) -> Game {
        Game::new(State::from(SubtractState::new(PlayerId::P1, value)))
    }

    fn chop(to_move: PlayerId, p1: [u8; 2], p2: [u8; 2]) -> Game {
        Game::new(State::from(ChopState::new(to_move, p1, p2).unwrap()))
    }

    #[test]
    fn test_winning_moves() {
        assert_eq!(iterative_minimax(&subtract(8)), Some(Move::Subtract(1)));
        assert_eq!(iterative_minimax(&subtract(9)), Some(Move::Subtract(4)));
        assert_eq!(iterative_minimax(&subtract(19)), Some(Move::Subtract(4)));
    }

    #[test]
    fn test_losing_position_returns_first_move() {
        assert_eq!(iterative_minimax(&subtract(15)), Some(Move::Subtract(1)));
        assert_eq!(
            iterative_minimax(&chop(PlayerId::P1, [1, 0], [4, 4])),
            Some(Move::chop(Hand::Left, Hand::Left))
        );
    }

    #[test]
    fn test_terminal_game_has_no_move() {
        assert_eq!(iterative_minimax(&subtract(0)), None);
    }

    #[test]
    fn test_matches_recursive_on_small_values() {
        for value in 0..=16 {
            let game = subtract(value);
            assert_eq!(iterative_minimax(&game), recursive_minimax(&game), "value {value}");
        }
    }
}
