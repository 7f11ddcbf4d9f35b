//! Reachable-position enumeration and cycle detection.
//!
//! Exhaustive search assumes the game tree is finite. These walks work on
//! the position graph instead of the tree (each distinct position once),
//! so they terminate even when play can loop, and tell a caller up front
//! whether `score` and the solvers would.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::PlayerId;
use crate::rules::{Game, Position};

/// A position together with its player to move.
///
/// Some games leave the turn out of position equality; the key keeps two
/// otherwise equal positions with different movers apart.
type PositionKey<S> = (PlayerId, S);

fn key<S: Position>(game: &Game<S>) -> PositionKey<S> {
    (game.current_player(), game.state().clone())
}

/// Every distinct position reachable from `game`, `game` first, in
/// breadth-first order.
pub fn reachable_positions<S: Position>(game: &Game<S>) -> Vec<Game<S>> {
    let mut seen: FxHashSet<PositionKey<S>> = FxHashSet::default();
    let mut queue = VecDeque::from([game.clone()]);
    let mut positions = Vec::new();
    seen.insert(key(game));

    while let Some(current) = queue.pop_front() {
        for (_, next) in current.successors() {
            if seen.insert(key(&next)) {
                queue.push_back(next);
            }
        }
        positions.push(current);
    }

    positions
}

/// Check whether no line of play from `game` ever repeats a position.
///
/// Exactly the condition under which exhaustive search from `game`
/// terminates.
pub fn is_acyclic<S: Position>(game: &Game<S>) -> bool {
    enum Visit<S> {
        Enter(Game<S>),
        Exit(PositionKey<S>),
    }

    let mut on_path: FxHashSet<PositionKey<S>> = FxHashSet::default();
    let mut done: FxHashSet<PositionKey<S>> = FxHashSet::default();
    let mut stack = vec![Visit::Enter(game.clone())];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Exit(key) => {
                on_path.remove(&key);
                done.insert(key);
            }
            Visit::Enter(current) => {
                let current_key = key(&current);
                if done.contains(&current_key) {
                    continue;
                }

                on_path.insert(current_key.clone());
                stack.push(Visit::Exit(current_key));

                for (_, next) in current.successors() {
                    let next_key = key(&next);
                    if on_path.contains(&next_key) {
                        log::debug!("cycle through {}", next);
                        return false;
                    }
                    if !done.contains(&next_key) {
                        stack.push(Visit::Enter(next));
                    }
                }
            }
        }
    }

    true
}
