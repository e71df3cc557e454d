//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, data tooling).
//!
//! # Board Size
//!
//! A game deals two tiles per selected word pair:
//!
//! - **Default pairs**: 10 (20 tiles)
//! - **Board columns**: 5 (the terminal grid wraps after five tiles)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MISMATCH_DELAY_MS` | 1200 | Time both tiles stay visible after a mismatch |
//! | `WIN_ANNOUNCE_DELAY_MS` | 800 | Delay between the last match and the win announcement |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{GameAction, TurnPhase, DEFAULT_TARGET_PAIRS};
//!
//! let action = GameAction::from_str("newGame").unwrap();
//! assert_eq!(action, GameAction::NewGame);
//!
//! assert_eq!(TurnPhase::Idle.as_str(), "idle");
//! assert_eq!(DEFAULT_TARGET_PAIRS, 10);
//! ```

/// Default number of word pairs dealt per game.
pub const DEFAULT_TARGET_PAIRS: usize = 10;

/// Number of tile columns in the board grid.
pub const BOARD_COLUMNS: usize = 5;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long a mismatched pair stays face-up before flipping back.
pub const MISMATCH_DELAY_MS: u32 = 1200;

/// Delay between the winning match and the win announcement.
pub const WIN_ANNOUNCE_DELAY_MS: u32 = 800;

/// Minimum number of candidate words an alternatives entry needs.
pub const MIN_ALTERNATIVES: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(MISMATCH_DELAY_MS, 1200);
        assert_eq!(WIN_ANNOUNCE_DELAY_MS, 800);
        assert_eq!(TICK_MS, 16);
        assert_eq!(DEFAULT_TARGET_PAIRS * 2 % BOARD_COLUMNS, 0);
    }

    #[test]
    fn lifecycle_actions_parse_from_their_names() {
        assert_eq!(
            GameAction::from_str(GameAction::NewGame.as_str()),
            Some(GameAction::NewGame)
        );
        assert_eq!(
            GameAction::from_str(GameAction::ChangeTopic.as_str()),
            Some(GameAction::ChangeTopic)
        );
        assert_eq!(GameAction::Select(3).as_str(), "select");
    }
}

/// Stable identity of a tile: its index on the board for the whole game.
pub type TileId = usize;

/// Phase of the turn controller.
///
/// - **Idle**: no tile selected
/// - **OneSelected**: one tile face-up, waiting for the second pick
/// - **Evaluating**: two tiles face-up, input locked until the turn resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    Idle,
    OneSelected,
    Evaluating,
}

impl TurnPhase {
    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::Idle => "idle",
            TurnPhase::OneSelected => "oneSelected",
            TurnPhase::Evaluating => "evaluating",
        }
    }
}

/// Inputs that can be applied to a game session.
///
/// Tile selection is the only input that touches turn state; the other two
/// are lifecycle controls raised by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reveal the tile with the given id
    Select(TileId),
    /// Deal a fresh board from the same word pairs
    NewGame,
    /// Abandon the board and return to topic selection
    ChangeTopic,
}

impl GameAction {
    /// Parse a lifecycle action from its camelCase name.
    ///
    /// `Select` carries a tile id and is never produced by this function.
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("changeTopic"), Some(GameAction::ChangeTopic));
    /// assert_eq!(GameAction::from_str("NEWGAME"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("select"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newgame" | "reset" => Some(GameAction::NewGame),
            "changetopic" => Some(GameAction::ChangeTopic),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Select(_) => "select",
            GameAction::NewGame => "newGame",
            GameAction::ChangeTopic => "changeTopic",
        }
    }
}

/// Side effect requested by the engine.
///
/// The engine never performs presentation work itself; it emits these
/// descriptors and the host executes them (draw, beep, announce).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Lay out one tile per word, in board order.
    RenderTiles(Vec<String>),
    /// A tile's visible state changed.
    UpdateTile {
        tile: TileId,
        flipped: bool,
        matched: bool,
    },
    /// Progress counter changed.
    RenderStatus { pairs_found: usize, target: usize },
    /// Success sound for a found pair. Mismatches are silent.
    PlayMatchFeedback,
    /// Every pair has been found and the announcement delay elapsed.
    AnnounceWin,
}

impl Effect {
    /// Short name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::RenderTiles(_) => "renderTiles",
            Effect::UpdateTile { .. } => "updateTile",
            Effect::RenderStatus { .. } => "renderStatus",
            Effect::PlayMatchFeedback => "playMatchFeedback",
            Effect::AnnounceWin => "announceWin",
        }
    }
}
