//! Playing matches.
//!
//! - `MatchConfig`: game, first player, strategies, seed and move cap,
//!   loadable from JSON
//! - `Session`: the turn loop that asks each player's strategy for a move
//! - `Transcript`: the record of a match, serializable to JSON
//!
//! ## Example
//!
//! ```rust
//! use rust_minimax::core::PlayerId;
//! use rust_minimax::games::Variant;
//! use rust_minimax::play::{MatchConfig, Session};
//! use rust_minimax::strategy::StrategyKind;
//!
//! let config = MatchConfig::new()
//!     .with_variant(Variant::subtract_square(8))
//!     .with_strategy(PlayerId::P1, StrategyKind::RecursiveMinimax)
//!     .with_strategy(PlayerId::P2, StrategyKind::Random);
//!
//! let outcome = Session::run(&config).unwrap();
//! assert_eq!(outcome.winner, Some(PlayerId::P1));
//! ```

pub mod config;
pub mod session;
pub mod transcript;

pub use config::MatchConfig;
pub use session::{check_searchable, MatchOutcome, Session};
pub use transcript::{Step, Transcript};
