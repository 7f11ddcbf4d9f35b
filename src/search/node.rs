//! Search tree node structures.
//!
//! Uses arena-based allocation with index references (NodeId); each node
//! lists the ids of the children it owns.

use smallvec::SmallVec;

use crate::core::Move;
use crate::rules::{Game, Score};

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A node in the search tree.
#[derive(Clone, Debug)]
pub struct SearchNode<S> {
    /// Game at this node.
    pub game: Game<S>,

    /// Move that led here from the parent (None for root).
    pub mv: Option<Move>,

    /// Value for the player to move. Meaningful only once resolved.
    pub score: Score,

    /// Depth in tree (root = 0).
    pub depth: u32,

    /// Child nodes, in the parent's `legal_moves()` order.
    pub children: SmallVec<[NodeId; 4]>,
}

impl<S> SearchNode<S> {
    /// Create a root node.
    pub fn root(game: Game<S>) -> Self {
        Self {
            game,
            mv: None,
            score: 0,
            depth: 0,
            children: SmallVec::new(),
        }
    }

    /// Create a child node reached by `mv`.
    pub fn child(game: Game<S>, mv: Move, depth: u32) -> Self {
        Self {
            game,
            mv: Some(mv),
            score: 0,
            depth,
            children: SmallVec::new(),
        }
    }

    /// Check if this node has been expanded.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}
