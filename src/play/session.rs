//! Match driver.
//!
//! Alternates between the two players' strategies until the game is over
//! or the move cap is reached, recording each move.

use crate::core::{GameError, GameRng, PlayerId, Result};
use crate::games::State;
use crate::rules::{Game, Position};
use crate::search::is_acyclic;
use crate::strategy::Strategy;

use super::config::MatchConfig;
use super::transcript::Transcript;

/// Result of a finished (or abandoned) match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchOutcome<S = State> {
    /// Winner, or `None` if the move cap stopped the match first.
    pub winner: Option<PlayerId>,

    /// Every move played.
    pub transcript: Transcript<S>,
}

impl<S: Position> MatchOutcome<S> {
    /// True if the game reached a terminal position.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Number of moves played.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.transcript.len()
    }
}

/// Plays matches between two strategies.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    max_moves: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MatchConfig::default().max_moves)
    }
}

impl Session {
    /// Session that abandons a match after `max_moves` moves (0 = never).
    #[must_use]
    pub const fn new(max_moves: usize) -> Self {
        Self { max_moves }
    }

    /// Session with the cap from `config`.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.max_moves)
    }

    /// Play `game` to the end.
    ///
    /// Each turn asks the strategy of the player to move and applies its
    /// choice. An illegal choice aborts the match with `IllegalMove`.
    pub fn play<S: Position>(
        &self,
        mut game: Game<S>,
        p1: &mut dyn Strategy<S>,
        p2: &mut dyn Strategy<S>,
    ) -> Result<MatchOutcome<S>> {
        let mut transcript = Transcript::new(game.state().clone());

        while !game.is_over() {
            if self.max_moves > 0 && transcript.len() >= self.max_moves {
                log::info!("stopping after {} moves without a winner", transcript.len());
                return Ok(MatchOutcome {
                    winner: None,
                    transcript,
                });
            }

            let player = game.current_player();
            let (mv, name) = match player {
                PlayerId::P1 => (p1.choose_move(&game)?, p1.name()),
                PlayerId::P2 => (p2.choose_move(&game)?, p2.name()),
            };

            game.apply_move(&mv)?;
            log::info!("move {}: {} ({}) plays {}", transcript.len(), player, name, mv);
            transcript.record(player, mv, game.state().clone());
        }

        let winner = game.winner();
        if let Some(player) = winner {
            log::info!("{} wins after {} moves", player, transcript.len());
        }

        Ok(MatchOutcome { winner, transcript })
    }

    /// Set up and play the match described by `config`.
    ///
    /// Random strategies draw from an RNG seeded with `config.seed`.
    /// Exhaustive strategies are refused with `InvalidConfiguration` when
    /// the starting position can repeat, since their search would never
    /// finish.
    pub fn run(config: &MatchConfig) -> Result<MatchOutcome> {
        let game = config.build_game()?;
        check_searchable(config, &game)?;

        let mut rng = GameRng::new(config.seed);
        let mut p1 = config.p1.build::<State>(&mut rng);
        let mut p2 = config.p2.build::<State>(&mut rng);
        log::debug!("{}: {} vs {}", config.variant.name(), p1.name(), p2.name());

        Self::from_config(config).play(game, p1.as_mut(), p2.as_mut())
    }
}

/// Fail if `config` asks for exhaustive search on a game that can cycle.
pub fn check_searchable(config: &MatchConfig, game: &Game<State>) -> Result<()> {
    let exhaustive: Vec<PlayerId> = PlayerId::ALL
        .into_iter()
        .filter(|&player| config.strategy(player).is_exhaustive())
        .collect();

    if exhaustive.is_empty() || is_acyclic(game) {
        return Ok(());
    }

    Err(GameError::InvalidConfiguration {
        message: format!(
            "{} cannot be searched exhaustively from this position because play can repeat; \
             choose another strategy for {}",
            config.variant.name(),
            exhaustive
                .iter()
                .map(|player| player.name())
                .collect::<Vec<_>>()
                .join(" and ")
        ),
    })
}
