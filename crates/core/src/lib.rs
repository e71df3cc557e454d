//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the word-pair memory game: reading a
//! dataset, choosing pairs, dealing the board, judging turns and tracking the
//! score. It performs **no I/O**; timers are advanced by the host and every
//! visible consequence is returned as an [`Effect`](types::Effect).
//!
//! - **Deterministic**: the same seed deals the same board
//! - **Testable**: delays are countdowns, not wall-clock sleeps
//! - **Portable**: the terminal front-end is just one [`EffectSink`]
//!
//! # Module Structure
//!
//! - [`dataset`]: the two accepted JSON dataset shapes
//! - [`prepare`]: pair selection and the bidirectional [`MatchIndex`]
//! - [`board`]: shuffled tiles with flipped/matched state
//! - [`turn`]: the `Idle -> OneSelected -> Evaluating` machine
//! - [`scoring`]: pairs found and the win condition
//! - [`session`]: one game, its delays and its effect queue
//! - [`rng`]: seeded LCG and Fisher-Yates shuffle
//!
//! # Game Rules
//!
//! - A game deals up to ten pairs; fewer when the dataset has fewer
//! - Two face-up tiles are compared at once; a match stays face-up
//! - A mismatch stays visible for 1200ms, during which input is ignored
//! - The win is announced 800ms after the last pair is found
//! - A new game reshuffles the same pairs and cancels pending delays
//!
//! # Example
//!
//! ```
//! use memory_match_core::{GameSession, WordPairDataset};
//! use memory_match_types::{GameAction, MISMATCH_DELAY_MS};
//!
//! let raw = serde_json::json!({
//!     "pairs": [
//!         { "term1": "big", "term2": "large" },
//!         { "term1": "small", "term2": "tiny" }
//!     ]
//! });
//! let dataset = WordPairDataset::from_value(&raw).unwrap();
//! let mut game = GameSession::from_dataset(&dataset, 10, 12345).unwrap();
//! assert_eq!(game.target(), 2);
//!
//! let big = game.board().position_of("big").unwrap();
//! let small = game.board().position_of("small").unwrap();
//! game.apply_action(GameAction::Select(big));
//! game.apply_action(GameAction::Select(small));
//! assert!(game.input_locked());
//!
//! game.tick(MISMATCH_DELAY_MS);
//! assert!(!game.input_locked());
//! ```

pub mod board;
pub mod dataset;
pub mod effects;
pub mod error;
pub mod prepare;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod turn;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile};
pub use dataset::{AlternativesEntry, PairEntry, WordPairDataset};
pub use effects::{dispatch, EffectSink, RecordingSink};
pub use error::{DatasetError, Result};
pub use prepare::{prepare, MatchIndex, PreparedGame, WordPair};
pub use rng::SimpleRng;
pub use scoring::Scoreboard;
pub use session::GameSession;
pub use snapshot::{GameSnapshot, TimersSnapshot};
pub use turn::{IgnoreReason, SelectOutcome, TurnState};
