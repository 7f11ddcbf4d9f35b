//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Exactly two identities, `P1` and `P2`. Turns alternate strictly between
//! them, so `other()` is the only transition a game ever needs.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`, used for per-player game
//! data such as the hands in chopsticks.

use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// One of the two players of an alternating-turn game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// Both players, in seating order.
    pub const ALL: [PlayerId; 2] = [PlayerId::P1, PlayerId::P2];

    /// The opponent of this player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// Slot index (0 for `P1`, 1 for `P2`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }

    /// Short name used in position snapshots: `"p1"` or `"p2"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerId::P1 => "p1",
            PlayerId::P2 => "p2",
        }
    }

    /// Seat number (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p1" | "1" => Ok(PlayerId::P1),
            "p2" | "2" => Ok(PlayerId::P2),
            other => Err(GameError::InvalidConfiguration {
                message: format!("unknown player '{other}' (expected p1 or p2)"),
            }),
        }
    }
}

/// Per-player data with one slot for each of the two players.
///
/// ## Example
///
/// ```
/// use rust_minimax::core::{PlayerId, PlayerMap};
///
/// let mut fingers: PlayerMap<u8> = PlayerMap::with_value(1);
/// fingers[PlayerId::P2] = 3;
///
/// assert_eq!(fingers[PlayerId::P1], 1);
/// assert_eq!(fingers[PlayerId::P2], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::P1), factory(PlayerId::P2)],
        }
    }

    /// Create a map from explicit values for `P1` and `P2`.
    pub const fn from_pair(p1: T, p2: T) -> Self {
        Self { data: [p1, p2] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
