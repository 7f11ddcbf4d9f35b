//! Record of a played match.
//!
//! A transcript captures the starting position, every move in order with
//! the player who made it, and the final position. It serializes to JSON
//! so finished matches can be stored and replayed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{Move, PlayerId, Result};
use crate::games::State;
use crate::rules::{Game, Position};

/// One move of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Move number in the match (0-indexed).
    pub move_number: usize,

    /// The player who moved.
    pub player: PlayerId,

    /// The move played.
    pub mv: Move,
}

/// Every move of a match between its starting and final positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript<S = State> {
    /// Position before the first move.
    pub start: S,

    /// Moves in the order played.
    pub steps: Vec<Step>,

    /// Position after the last move.
    pub end: S,
}

impl<S: Position> Transcript<S> {
    /// Empty transcript starting (and so far ending) at `start`.
    pub fn new(start: S) -> Self {
        Self {
            end: start.clone(),
            start,
            steps: Vec::new(),
        }
    }

    /// Append a move that took the game to `after`.
    pub fn record(&mut self, player: PlayerId, mv: Move, after: S) {
        self.steps.push(Step {
            move_number: self.steps.len(),
            player,
            mv,
        });
        self.end = after;
    }

    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no move was played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Moves in order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().map(|step| step.mv)
    }

    /// Play the recorded moves again from `start`.
    ///
    /// Fails with `IllegalMove` if a step is not legal where it was
    /// recorded, which only happens to a transcript edited by hand.
    pub fn replay(&self) -> Result<Game<S>> {
        let mut game = Game::new(self.start.clone());
        for mv in self.moves() {
            game.apply_move(&mv)?;
        }
        Ok(game)
    }
}

impl<S: Serialize> Transcript<S> {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<S: DeserializeOwned> Transcript<S> {
    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
