//! Arena-based game tree with explicit-stack evaluation.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. The tree is
//! built and scored without call-stack recursion: a LIFO worklist of node
//! ids replaces the recursive post-order walk of `score`.

use super::node::{NodeId, SearchNode};
use crate::rules::{Game, Position, Score, LOSS};

/// Arena-based game tree.
#[derive(Clone, Debug)]
pub struct SearchTree<S> {
    /// All nodes in the tree.
    nodes: Vec<SearchNode<S>>,

    /// The root node ID (always 0).
    root: NodeId,

    /// Longest the worklist grew while evaluating.
    peak_stack: usize,
}

impl<S: Position> SearchTree<S> {
    /// Create an unevaluated tree holding only the root.
    pub fn new(game: Game<S>) -> Self {
        Self {
            nodes: vec![SearchNode::root(game)],
            root: NodeId::new(0),
            peak_stack: 0,
        }
    }

    /// Build the full game tree below `game` and score every node.
    ///
    /// Each pop does one of three things:
    /// - unexpanded, non-terminal: push the node back, then one child per
    ///   legal move, so the node is revisited after all its children
    /// - unexpanded, terminal: score `LOSS` (the stuck mover loses)
    /// - expanded: children are resolved, take the best negated child score
    pub fn evaluate(game: Game<S>) -> Self {
        let mut tree = Self::new(game);
        let mut stack = vec![tree.root];
        let mut peak_stack = stack.len();

        while let Some(id) = stack.pop() {
            let node = tree.get(id);

            if !node.is_expanded() && !node.game.is_over() {
                let depth = node.depth + 1;
                let successors: Vec<_> = node.game.successors().collect();

                stack.push(id);
                for (mv, next) in successors {
                    let child = tree.alloc(SearchNode::child(next, mv, depth));
                    tree.get_mut(id).children.push(child);
                    stack.push(child);
                }
                peak_stack = peak_stack.max(stack.len());
            } else if !node.is_expanded() {
                tree.get_mut(id).score = LOSS;
            } else {
                let best = node
                    .children
                    .iter()
                    .map(|&child| -tree.get(child).score)
                    .max()
                    .unwrap_or(LOSS);
                tree.get_mut(id).score = best;
            }
        }

        tree.peak_stack = peak_stack;
        tree
    }
}

impl<S> SearchTree<S> {
    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode<S> {
        self.get(self.root)
    }

    /// Value of the root for its player to move.
    #[must_use]
    pub fn root_score(&self) -> Score {
        self.root_node().score
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| !n.is_expanded()).count();
        let total_edges: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            total_edges,
            peak_stack: self.peak_stack,
        }
    }
}

/// Statistics about an evaluated search tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u32,

    /// Number of leaves (terminal positions once evaluated).
    pub terminal_count: usize,

    /// Total number of parent-child links.
    pub total_edges: usize,

    /// Longest the explicit worklist grew.
    pub peak_stack: usize,
}

impl TreeStats {
    /// Average children per expanded node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let expanded = self.node_count - self.terminal_count;
        if expanded == 0 {
            0.0
        } else {
            self.total_edges as f64 / expanded as f64
        }
    }
}
