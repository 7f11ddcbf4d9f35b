//! Exhaustive minimax search.
//!
//! ## Overview
//!
//! Every supported game is finite, two-player, zero-sum and alternating, and
//! the player who cannot move loses. Positions are therefore scored with
//! negamax: a terminal position is a loss for its player to move, and any
//! other position is worth the best negated value among its successors.
//!
//! - `score`: recursive negamax value of a game
//! - `recursive_minimax`: move choice driven by `score`
//! - `iterative_minimax`: the same choice, computed on an explicit
//!   `SearchTree` with a worklist instead of recursion
//! - `reachable_positions` / `is_acyclic`: graph walks that check whether
//!   exhaustive search from a game terminates at all
//!
//! Both solvers pick the first move (in `legal_moves()` order) that forces a
//! win, and the first legal move when none does.
//!
//! There is no pruning, memoisation or depth limit; the search only
//! terminates on games without repeated positions.
//!
//! ## Usage
//!
//! ```rust
//! use rust_minimax::core::{Move, PlayerId};
//! use rust_minimax::games::Variant;
//! use rust_minimax::search::{iterative_minimax, recursive_minimax};
//!
//! let game = Variant::subtract_square(9).build(PlayerId::P1).unwrap();
//!
//! assert_eq!(recursive_minimax(&game), Some(Move::Subtract(4)));
//! assert_eq!(iterative_minimax(&game), Some(Move::Subtract(4)));
//! ```

pub mod iterative;
pub mod node;
pub mod reachable;
pub mod recursive;
pub mod score;
pub mod tree;

// Re-export main types
pub use iterative::iterative_minimax;
pub use node::{NodeId, SearchNode};
pub use reachable::{is_acyclic, reachable_positions};
pub use recursive::recursive_minimax;
pub use score::score;
pub use tree::{SearchTree, TreeStats};
