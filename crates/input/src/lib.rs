//! Terminal input module.
//!
//! Maps `crossterm` key events into [`InputCommand`]s and tracks the cursor
//! over the tile grid or topic list. The game itself only ever receives
//! [`crate::types::GameAction`]s; turning a command plus the cursor into an
//! action happens in [`InputCommand::game_action`].

pub mod cursor;
pub mod map;

pub use memory_match_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, should_quit, Direction, InputCommand};
