//! Chopsticks position.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Hand, Move, Moves, PlayerId, PlayerMap, Result};
use crate::rules::Position;

/// Fingers on a hand wrap around at this count; a hand at 0 is out of play.
pub const FINGERS: u8 = 5;

const INSTRUCTIONS: &str = "\
1) Each player begins with one finger pointed up on each hand.
2) On your turn, touch one of your live hands to one of your opponent's live \
hands. Their hand gains as many fingers as yours shows; yours is unchanged.
3) Fingers wrap around at five: a hand that reaches exactly five is dead and \
can no longer play or be touched, and a count above five drops by five.
4) Players alternate. A player who cannot touch any hand, because both of \
their own hands or both of their opponent's hands are dead, loses.";

/// Chopsticks position: both players' hands and the player to move.
///
/// Hands are `[left, right]` finger counts in `0..=4`. Equality compares
/// the hands only; the player to move is not part of it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "ChopRecord", into = "ChopRecord")]
pub struct ChopState {
    to_move: PlayerId,
    hands: PlayerMap<[u8; 2]>,
}

/// Serialized form of `ChopState`, checked on the way back in.
#[derive(Serialize, Deserialize)]
struct ChopRecord {
    to_move: PlayerId,
    p1: [u8; 2],
    p2: [u8; 2],
}

impl TryFrom<ChopRecord> for ChopState {
    type Error = GameError;

    fn try_from(record: ChopRecord) -> Result<Self> {
        ChopState::new(record.to_move, record.p1, record.p2)
    }
}

impl From<ChopState> for ChopRecord {
    fn from(state: ChopState) -> Self {
        ChopRecord {
            to_move: state.to_move,
            p1: state.hands[PlayerId::P1],
            p2: state.hands[PlayerId::P2],
        }
    }
}

impl ChopState {
    /// Create a position, validating every finger count.
    pub fn new(to_move: PlayerId, p1: [u8; 2], p2: [u8; 2]) -> Result<Self> {
        if let Some(&value) = p1.iter().chain(p2.iter()).find(|&&v| v >= FINGERS) {
            return Err(GameError::InvalidHand { value });
        }

        Ok(Self {
            to_move,
            hands: PlayerMap::from_pair(p1, p2),
        })
    }

    /// The standard opening: one finger on every hand.
    #[must_use]
    pub fn opening(to_move: PlayerId) -> Self {
        Self {
            to_move,
            hands: PlayerMap::with_value([1, 1]),
        }
    }

    /// A player's `[left, right]` finger counts.
    #[must_use]
    pub fn hands(&self, player: PlayerId) -> [u8; 2] {
        self.hands[player]
    }

    fn finger(&self, player: PlayerId, hand: Hand) -> u8 {
        self.hands[player][hand.index()]
    }
}

impl PartialEq for ChopState {
    fn eq(&self, other: &Self) -> bool {
        self.hands == other.hands
    }
}

impl Eq for ChopState {}

impl Hash for ChopState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hands.hash(state);
    }
}

impl Position for ChopState {
    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn legal_moves(&self) -> Moves {
        let mover = self.to_move;
        let opponent = mover.other();

        Hand::ALL
            .into_iter()
            .filter(|&from| self.finger(mover, from) != 0)
            .flat_map(move |from| {
                Hand::ALL
                    .into_iter()
                    .filter(move |&to| self.finger(opponent, to) != 0)
                    .map(move |to| Move::chop(from, to))
            })
            .collect()
    }

    fn transition(&self, mv: &Move) -> Option<Self> {
        let Move::Chop { from, to } = *mv else {
            return None;
        };

        let mover = self.to_move;
        let opponent = mover.other();
        let mut hands = self.hands;
        let target = &mut hands[opponent][to.index()];
        *target = (*target + self.finger(mover, from)) % FINGERS;

        Some(Self {
            to_move: opponent,
            hands,
        })
    }

    fn parse_move(&self, text: &str) -> Result<Move> {
        let trimmed = text.trim();
        let invalid = || GameError::InvalidMoveSyntax {
            input: trimmed.to_string(),
            reason: "expected two letters from l and r, such as 'lr'".to_string(),
        };

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(from), Some(to), None) => {
                let from = Hand::from_symbol(from).ok_or_else(invalid)?;
                let to = Hand::from_symbol(to).ok_or_else(invalid)?;
                Ok(Move::chop(from, to))
            }
            _ => Err(invalid()),
        }
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }
}

impl std::fmt::Display for ChopState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [p1_left, p1_right] = self.hands[PlayerId::P1];
        let [p2_left, p2_right] = self.hands[PlayerId::P2];
        write!(
            f,
            "Player 1: {p1_left}-{p1_right}; Player 2: {p2_left}-{p2_right}, the current player is {}.",
            self.to_move
        )
    }
}
