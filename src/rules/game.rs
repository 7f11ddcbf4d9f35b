//! Game wrapper binding a position to its starting player.

use serde::{Deserialize, Serialize};

use crate::core::{Move, Moves, PlayerId, Result};
use crate::games::State;

use super::position::Position;

/// A game in progress.
///
/// Owns exactly one position at a time. The starting player is fixed when
/// the game is created and never changes, independent of whose turn it
/// currently is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game<S = State> {
    state: S,
    starting_player: PlayerId,
}

impl<S: Position> Game<S> {
    /// Start a game from `state`; its player to move becomes the starting player.
    pub fn new(state: S) -> Self {
        let starting_player = state.current_player();
        Self {
            state,
            starting_player,
        }
    }

    /// Current position.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Player who had the first move of this game.
    #[must_use]
    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    /// Legal moves in the current position.
    #[must_use]
    pub fn legal_moves(&self) -> Moves {
        self.state.legal_moves()
    }

    /// Check whether `mv` is legal in the current position.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.state.is_legal(mv)
    }

    /// Play `mv`, replacing the current position.
    ///
    /// On `IllegalMove` the game is left as it was.
    pub fn apply_move(&mut self, mv: &Move) -> Result<()> {
        self.state = self.state.apply_move(mv)?;
        Ok(())
    }

    /// The game that results from playing `mv`, leaving `self` untouched.
    pub fn play(&self, mv: &Move) -> Result<Self> {
        Ok(self.with_state(self.state.apply_move(mv)?))
    }

    /// Every legal move with the game it leads to, in `legal_moves()` order.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Self)> + '_ {
        self.state
            .successors()
            .into_iter()
            .map(move |(mv, next)| (mv, self.with_state(next)))
    }

    /// Check if the player to move has no legal move.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Check if `player` has won.
    ///
    /// Only meaningful once the game is over: the stuck player to move loses,
    /// so the other player is the winner.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.is_over() && self.current_player() != player
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.is_over().then(|| self.current_player().other())
    }

    /// Read a move from user text for this game.
    pub fn str_to_move(&self, text: &str) -> Result<Move> {
        self.state.parse_move(text)
    }

    /// Rules of the game, for display.
    #[must_use]
    pub fn instructions(&self) -> &'static str {
        self.state.instructions()
    }

    fn with_state(&self, state: S) -> Self {
        Self {
            state,
            starting_player: self.starting_player,
        }
    }
}

impl<S: Position> std::fmt::Display for Game<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.state, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameError, Hand};
    use crate::games::{ChopState, SubtractState};

    fn subtract(to_move: PlayerId, value: u32) -> Game {
        Game::new(State::from(SubtractState::new(to_move, value)))
    }

    #[test]
    fn test_new_records_starting_player() {
        let game = subtract(PlayerId::P2, 10);
        assert_eq!(game.starting_player(), PlayerId::P2);
        assert_eq!(game.current_player(), PlayerId::P2);
    }

    #[test]
    fn test_apply_move_keeps_starting_player() {
        let mut game = subtract(PlayerId::P1, 10);
        game.apply_move(&Move::Subtract(4)).unwrap();

        assert_eq!(game.current_player(), PlayerId::P2);
        assert_eq!(game.starting_player(), PlayerId::P1);
        assert_eq!(game.state(), &State::from(SubtractState::new(PlayerId::P2, 6)));
    }

    #[test]
    fn test_illegal_move_leaves_game_untouched() {
        let mut game = subtract(PlayerId::P1, 8);
        let before = game.clone();

        let err = game.apply_move(&Move::Subtract(8)).unwrap_err();

        assert!(matches!(err, GameError::IllegalMove { mv: Move::Subtract(8), .. }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_wrong_variant_move_is_illegal() {
        let game = subtract(PlayerId::P1, 8);
        let result = game.play(&Move::chop(Hand::Left, Hand::Left));
        assert!(matches!(result, Err(GameError::IllegalMove { .. })));
    }

    #[test]
    fn test_successors_follow_legal_move_order() {
        let game = subtract(PlayerId::P1, 9);
        let moves: Vec<_> = game.successors().map(|(mv, _)| mv).collect();
        assert_eq!(moves, game.legal_moves().to_vec());

        for (mv, next) in game.successors() {
            assert_eq!(next, game.play(&mv).unwrap());
        }
    }

    #[test]
    fn test_winner_at_terminal() {
        let game = subtract(PlayerId::P1, 0);

        assert!(game.is_over());
        assert!(game.is_winner(PlayerId::P2));
        assert!(!game.is_winner(PlayerId::P1));
        assert_eq!(game.winner(), Some(PlayerId::P2));
    }

    #[test]
    fn test_no_winner_while_running() {
        let chop = ChopState::new(PlayerId::P1, [1, 1], [1, 3]).unwrap();
        let game = Game::new(State::from(chop));

        assert!(!game.is_over());
        assert!(!game.is_winner(PlayerId::P1));
        assert!(!game.is_winner(PlayerId::P2));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_stuck_p2_is_not_winner() {
        let chop = ChopState::new(PlayerId::P2, [0, 0], [1, 3]).unwrap();
        let game = Game::new(State::from(chop));

        assert!(game.is_over());
        assert_eq!(game.current_player(), PlayerId::P2);
        assert!(!game.is_winner(PlayerId::P2));
        assert!(game.is_winner(PlayerId::P1));
    }

    #[test]
    fn test_str_to_move_and_display() {
        let game = subtract(PlayerId::P1, 8);
        assert_eq!(game.str_to_move(" 4 ").unwrap(), Move::Subtract(4));
        assert_eq!(
            game.to_string(),
            "The current player is p1 and the current value is 8."
        );
    }
}
