//! Match configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId, Result};
use crate::games::{State, Variant};
use crate::rules::Game;
use crate::strategy::StrategyKind;

/// Everything needed to set up one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Game and starting parameters.
    pub variant: Variant,

    /// Player who moves first.
    pub first_player: PlayerId,

    /// Strategy for player 1.
    pub p1: StrategyKind,

    /// Strategy for player 2.
    pub p2: StrategyKind,

    /// Seed for random strategies.
    pub seed: u64,

    /// Maximum moves before the match is abandoned.
    /// 0 = no limit.
    pub max_moves: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            variant: Variant::subtract_square(20),
            first_player: PlayerId::P1,
            p1: StrategyKind::Interactive,
            p2: StrategyKind::RecursiveMinimax,
            seed: 42,
            max_moves: 500,
        }
    }
}

impl MatchConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set who moves first.
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Set the strategy of one player.
    pub fn with_strategy(mut self, player: PlayerId, kind: StrategyKind) -> Self {
        match player {
            PlayerId::P1 => self.p1 = kind,
            PlayerId::P2 => self.p2 = kind,
        }
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the move cap.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Strategy of `player`.
    #[must_use]
    pub fn strategy(&self, player: PlayerId) -> StrategyKind {
        match player {
            PlayerId::P1 => self.p1,
            PlayerId::P2 => self.p2,
        }
    }

    /// Whether the move cap has been reached after `moves` moves.
    #[must_use]
    pub fn is_capped(&self, moves: usize) -> bool {
        self.max_moves > 0 && moves >= self.max_moves
    }

    /// Check that the configured game can be set up.
    pub fn validate(&self) -> Result<()> {
        self.variant.initial_state(self.first_player).map(|_| ())
    }

    /// The game this config starts from.
    pub fn build_game(&self) -> Result<Game<State>> {
        self.variant.build(self.first_player)
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|err| GameError::io(format!("read config {}", path.display()), err))?;
        Self::from_json_str(&json)
    }
}
